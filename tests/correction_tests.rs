//! # Correction Tests: Bit Errors on the Wire
//!
//! Injects bit flips into encoded blocks and checks what the decoder
//! recovers. Bit `n` of a block is bit `n % 8` of byte `n / 8`.

use golay_core::channel::flip_bit;
use rand::seq::index;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Bits 23 and 47 pad each 3-byte slot and sit outside the code.
const PADDING_BITS: [usize; 2] = [23, 47];

fn is_padding(bit: usize) -> bool {
    PADDING_BITS.contains(&bit)
}

fn encode_one(x: u32) -> ([u8; 3], Vec<u8>) {
    let input = [(x >> 16) as u8, (x >> 8) as u8, x as u8];
    (input, golay_core::encode(&input, Vec::with_capacity(6)))
}

/// Meaningful bit positions of codeword half `half` (0 or 1).
fn half_bits(half: usize) -> impl Iterator<Item = usize> {
    (half * 24..half * 24 + 23).filter(|b| !is_padding(*b))
}

#[test]
fn test_single_bit_correction_all_positions() {
    for x in (0..=0xFF_FFFFu32).step_by(4099) {
        let (input, encoded) = encode_one(x);
        for bit in 0..48 {
            let mut damaged = encoded.clone();
            flip_bit(&mut damaged, bit);
            let (corrections, decoded) = golay_core::decode(&damaged, Vec::new());
            assert_eq!(decoded, input, "bit {} of {:06x} not corrected", bit, x);
            if is_padding(bit) {
                assert_eq!(corrections, 0, "padding bit {} reported as an error", bit);
            } else {
                assert_eq!(corrections, 1, "bit {} of {:06x}: wrong correction count", bit, x);
            }
        }
    }
}

/// Every pattern of 1, 2 or 3 flips inside one codeword is corrected.
#[test]
fn test_up_to_three_bits_within_one_codeword() {
    for &x in &[0x000000u32, 0xFFFFFF, 0x123456, 0xA5A5A5, 0x0F0F0F, 0x800001] {
        let (input, encoded) = encode_one(x);
        for half in 0..2 {
            let bits: Vec<usize> = half_bits(half).collect();
            assert_eq!(bits.len(), 23);
            for (i, &a) in bits.iter().enumerate() {
                for (j, &b) in bits.iter().enumerate().skip(i) {
                    for &c in bits.iter().skip(j) {
                        let mut damaged = encoded.clone();
                        flip_bit(&mut damaged, a);
                        if b != a {
                            flip_bit(&mut damaged, b);
                        }
                        if c != b {
                            flip_bit(&mut damaged, c);
                        }
                        let (corrections, decoded) = golay_core::decode(&damaged, Vec::new());
                        assert_eq!(
                            decoded, input,
                            "flips ({}, {}, {}) in half {} of {:06x} not corrected",
                            a, b, c, half, x
                        );
                        assert_eq!(corrections, 1);
                    }
                }
            }
        }
    }
}

/// Three random flips anywhere in the 48-bit block never exceed 3 per
/// codeword, so the data always comes back.
#[test]
fn test_random_three_bit_injection() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x601A_7023);
    let mut input = [0u8; 3];
    for _ in 0..200 {
        rng.fill_bytes(&mut input);
        let encoded = golay_core::encode(&input, Vec::new());
        for _ in 0..20 {
            let mut damaged = encoded.clone();
            for bit in index::sample(&mut rng, 48, 3) {
                flip_bit(&mut damaged, bit);
            }
            let (corrections, decoded) = golay_core::decode(&damaged, Vec::new());
            assert_eq!(decoded, input, "input={:02x?} damaged={:02x?}", input, damaged);
            assert!((1..=2).contains(&corrections));
        }
    }
}

#[test]
fn test_flip_first_parity_bit() {
    let input = [0x12, 0x34, 0x56];
    let mut encoded = golay_core::encode(&input, Vec::new());
    encoded[0] ^= 0x01;

    let (corrections, decoded) = golay_core::decode(&encoded, Vec::new());
    assert!(corrections >= 1);
    assert_eq!(decoded, input);
}

/// Both codewords damaged in one block: the count reaches 2.
#[test]
fn test_both_codewords_corrected() {
    let input = [0xDE, 0xAD, 0xBE];
    let mut encoded = golay_core::encode(&input, Vec::new());
    for bit in [3, 12, 20, 24, 35, 46] {
        flip_bit(&mut encoded, bit);
    }
    let (corrections, decoded) = golay_core::decode(&encoded, Vec::new());
    assert_eq!(corrections, 2);
    assert_eq!(decoded, input);
}

/// Four errors in one codeword land within distance 3 of a different
/// codeword. The decoder "corrects" towards it and reports a normal count.
#[test]
fn test_four_bit_errors_miscorrect_silently() {
    let (input, encoded) = encode_one(0x123456);
    let bits: Vec<usize> = half_bits(0).collect();
    for window in bits.windows(4) {
        let mut damaged = encoded.clone();
        for &bit in window {
            flip_bit(&mut damaged, bit);
        }
        let (corrections, decoded) = golay_core::decode(&damaged, Vec::new());
        assert_eq!(corrections, 1);
        assert_ne!(decoded, input, "flips {:?} should exceed the correction radius", window);
        // The untouched half still decodes.
        assert_eq!(decoded[2], input[2]);
    }
}

/// Corrections accumulate across a multi-block buffer.
#[test]
fn test_correction_count_accumulates_over_stream() {
    let input: Vec<u8> = (0..90u8).collect();
    let mut encoded = golay_core::encode(&input, Vec::new());
    // One flip in the first codeword of every block.
    for block in 0..input.len() / 3 {
        flip_bit(&mut encoded, block * 48 + 5);
    }
    let (corrections, decoded) = golay_core::decode(&encoded, Vec::new());
    assert_eq!(corrections, input.len() / 3);
    assert_eq!(decoded, input);
}
