use crate::error::{GolayError, Result};
use serde::Deserialize;
use std::path::Path;

/// Tuning for [`crate::ParallelCodec`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CodecConfig {
    /// Worker threads; 0 picks one per logical CPU.
    pub workers: usize,
    /// Inputs shorter than this many blocks are processed inline.
    pub min_parallel_blocks: usize,
    /// Corrected words per decoded word above which a decode is logged as degraded.
    pub degraded_ratio: f64,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            workers: 0,
            min_parallel_blocks: 4096,
            degraded_ratio: 0.05,
        }
    }
}

impl CodecConfig {
    /// Concrete worker count, never zero.
    pub fn resolved_workers(&self) -> usize {
        if self.workers == 0 {
            num_cpus::get().max(1)
        } else {
            self.workers
        }
    }
}

/// Noise model for the simulated link.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChannelConfig {
    /// Probability that a given bit (or burst start) is hit.
    pub bit_error_rate: f64,
    /// Consecutive bits flipped per hit.
    pub burst_bits: usize,
    pub seed: u64,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            bit_error_rate: 0.001,
            burst_bits: 1,
            seed: 0x601A_7023,
        }
    }
}

/// Top-level configuration of the `golay-link` simulator.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Raw bytes sent per round; a multiple of 3.
    pub payload_bytes: usize,
    pub rounds: usize,
    pub codec: CodecConfig,
    pub channel: ChannelConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            payload_bytes: 3 * 1024,
            rounds: 16,
            codec: CodecConfig::default(),
            channel: ChannelConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SimConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.payload_bytes == 0 || self.payload_bytes % golay_codec::PLAIN_BLOCK != 0 {
            return Err(GolayError::Config(format!(
                "payload_bytes must be a non-zero multiple of {}, got {}",
                golay_codec::PLAIN_BLOCK,
                self.payload_bytes
            )));
        }
        let ber = self.channel.bit_error_rate;
        if !(0.0..=1.0).contains(&ber) {
            return Err(GolayError::Config(format!(
                "bit_error_rate must lie in [0, 1], got {}",
                ber
            )));
        }
        if self.channel.burst_bits == 0 {
            return Err(GolayError::Config("burst_bits must be at least 1".to_string()));
        }
        let ratio = self.codec.degraded_ratio;
        if ratio.is_nan() || ratio < 0.0 {
            return Err(GolayError::Config(format!(
                "degraded_ratio must be non-negative, got {}",
                ratio
            )));
        }
        Ok(())
    }
}
