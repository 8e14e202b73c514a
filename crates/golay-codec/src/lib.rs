#![no_std]
//! # golay-codec: Block Transform
//!
//! Bit packing between raw bytes and 12-bit words, and the table-driven
//! Golay(23,12) word codec. Every function here is pure and allocation-free.
//!
//! ## Wire Layout
//! Three input bytes become two data words, each sent as a 3-byte codeword
//! slot. Read little-endian, a slot is `data << 11 | redundancy`; bit 23 is
//! padding and never checked.

pub mod pack;
pub mod word;

pub use pack::{join_sextet, join_triple, split_sextet, split_triple, Codeword, DataWord};
pub use word::{decode_word, encode_word, syndrome, Decoded};

/// Raw bytes consumed per encode block.
pub const PLAIN_BLOCK: usize = 3;
/// Coded bytes produced per encode block.
pub const CODED_BLOCK: usize = 6;

/// Encodes one 3-byte block into its 6-byte wire form.
#[inline]
pub fn encode_block(plain: [u8; PLAIN_BLOCK]) -> [u8; CODED_BLOCK] {
    let [w0, w1] = split_triple(plain);
    join_sextet([encode_word(w0), encode_word(w1)])
}

/// Decodes one 6-byte block.
///
/// Returns the number of words that needed correction (0, 1 or 2) and the
/// recovered bytes. Only exact for at most 3 flipped bits per codeword.
#[inline]
pub fn decode_block(coded: [u8; CODED_BLOCK]) -> (usize, [u8; PLAIN_BLOCK]) {
    let [c0, c1] = split_sextet(coded);
    let d0 = decode_word(c0);
    let d1 = decode_word(c1);
    let corrections = d0.corrected as usize + d1.corrected as usize;
    (corrections, join_triple([d0.word, d1.word]))
}
