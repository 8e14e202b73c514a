#![cfg_attr(not(test), no_std)]
//! # golay-tables: Constant Lookup Tables
//!
//! The two tables behind the Golay(23,12) codec, evaluated by the compiler
//! and burned into the binary as `static` data. Nothing here runs at startup.

pub mod construct;

pub use construct::{parity, syndrome_of, GENERATOR};

/// Number of data bits per word.
pub const DATA_BITS: u32 = 12;
/// Number of redundancy bits per word.
pub const REDUNDANCY_BITS: u32 = 11;
/// Meaningful bits per codeword.
pub const CODEWORD_BITS: u32 = DATA_BITS + REDUNDANCY_BITS;

pub const DATA_MASK: u16 = (1 << DATA_BITS) - 1;
pub const REDUNDANCY_MASK: u16 = (1 << REDUNDANCY_BITS) - 1;
pub const CODEWORD_MASK: u32 = (1 << CODEWORD_BITS) - 1;

pub const ENCODE_TABLE_LEN: usize = 1 << DATA_BITS;
pub const DECODE_TABLE_LEN: usize = 1 << REDUNDANCY_BITS;

/// Data word -> 11 redundancy bits.
pub static ENCODE_TABLE: [u16; ENCODE_TABLE_LEN] = construct::encode_table();

/// Syndrome -> correction mask, laid out as `data_error << 11 | redundancy_error`.
///
/// Index 0 maps to 0. Every other entry is the unique error pattern of
/// weight 1 to 3 that produces that syndrome.
pub static DECODE_TABLE: [u32; DECODE_TABLE_LEN] = construct::decode_table();

static_assertions::const_assert_eq!(ENCODE_TABLE_LEN, 4096);
static_assertions::const_assert_eq!(DECODE_TABLE_LEN, 2048);
static_assertions::assert_eq_size!([u16; ENCODE_TABLE_LEN], [u8; 8192]);
// 1 + 23 + C(23,2) + C(23,3): the code is perfect, so every syndrome is reachable.
static_assertions::const_assert_eq!(1 + 23 + 253 + 1771, DECODE_TABLE_LEN);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_word_has_zero_redundancy() {
        assert_eq!(ENCODE_TABLE[0], 0);
        assert_eq!(DECODE_TABLE[0], 0);
    }

    #[test]
    fn redundancy_fits_in_eleven_bits() {
        assert!(ENCODE_TABLE.iter().all(|&r| r & !REDUNDANCY_MASK == 0));
    }

    #[test]
    fn encode_table_is_linear() {
        // P(a ^ b) == P(a) ^ P(b) for a sample of pairs.
        for a in (0..ENCODE_TABLE_LEN).step_by(37) {
            for b in (0..ENCODE_TABLE_LEN).step_by(101) {
                assert_eq!(
                    ENCODE_TABLE[a ^ b],
                    ENCODE_TABLE[a] ^ ENCODE_TABLE[b],
                    "linearity broken for a={:#05x} b={:#05x}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn minimum_distance_is_seven() {
        let min = (1..ENCODE_TABLE_LEN)
            .map(|d| (d as u32).count_ones() + (ENCODE_TABLE[d] as u32).count_ones())
            .min()
            .unwrap();
        assert_eq!(min, 7);
    }

    #[test]
    fn every_syndrome_has_a_low_weight_mask() {
        for (syn, &mask) in DECODE_TABLE.iter().enumerate().skip(1) {
            assert!(mask != 0, "syndrome {:#05x} has no correction", syn);
            assert!(mask & !CODEWORD_MASK == 0);
            assert!(mask.count_ones() <= 3, "mask {:#08x} too heavy", mask);
            assert_eq!(syndrome_of(mask) as usize, syn);
        }
    }

    #[test]
    fn masks_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        assert!(DECODE_TABLE.iter().all(|m| seen.insert(*m)));
    }
}
