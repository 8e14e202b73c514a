//! Noisy channel simulator.
//!
//! Flips bits in a frame in place. All randomness comes from a seeded
//! ChaCha8 RNG, so a given seed and frame sequence always produce the same
//! corruption.

use crate::config::ChannelConfig;
use crate::error::{GolayError, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Flips bit `bit` of `frame`, counting bit 0 as the LSB of byte 0.
#[inline]
pub fn flip_bit(frame: &mut [u8], bit: usize) {
    frame[bit / 8] ^= 1 << (bit % 8);
}

/// Independent bit errors, or bursts of `burst_bits` consecutive errors when
/// configured.
#[derive(Debug)]
pub struct BitFlipChannel {
    bit_error_rate: f64,
    burst_bits: usize,
    rng: ChaCha8Rng,
    /// Total bits flipped since creation.
    flipped: u64,
}

impl BitFlipChannel {
    pub fn new(config: &ChannelConfig) -> Result<Self> {
        if !(0.0..=1.0).contains(&config.bit_error_rate) {
            return Err(GolayError::Config(format!(
                "bit_error_rate must lie in [0, 1], got {}",
                config.bit_error_rate
            )));
        }
        if config.burst_bits == 0 {
            return Err(GolayError::Config("burst_bits must be at least 1".to_string()));
        }
        Ok(Self {
            bit_error_rate: config.bit_error_rate,
            burst_bits: config.burst_bits,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            flipped: 0,
        })
    }

    /// A channel that never corrupts anything.
    pub fn perfect(seed: u64) -> Self {
        Self {
            bit_error_rate: 0.0,
            burst_bits: 1,
            rng: ChaCha8Rng::seed_from_u64(seed),
            flipped: 0,
        }
    }

    /// Corrupts `frame` in place and returns the number of bits flipped.
    pub fn transmit(&mut self, frame: &mut [u8]) -> usize {
        if self.bit_error_rate == 0.0 {
            return 0;
        }
        let total = frame.len() * 8;
        let mut flips = 0;
        let mut bit = 0;
        while bit < total {
            if self.rng.gen_bool(self.bit_error_rate) {
                let end = (bit + self.burst_bits).min(total);
                for b in bit..end {
                    flip_bit(frame, b);
                }
                flips += end - bit;
                bit = end;
            } else {
                bit += 1;
            }
        }
        self.flipped += flips as u64;
        flips
    }

    pub fn total_flipped(&self) -> u64 {
        self.flipped
    }
}
