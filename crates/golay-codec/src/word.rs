//! Single-word Golay(23,12) encode and syndrome decode.

use crate::pack::{Codeword, DataWord};
use golay_tables::{DECODE_TABLE, ENCODE_TABLE};

/// Outcome of decoding one codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub word: DataWord,
    /// A non-zero correction mask was applied.
    pub corrected: bool,
}

#[inline(always)]
pub fn encode_word(word: DataWord) -> Codeword {
    Codeword::from_parts(word, ENCODE_TABLE[word.get() as usize])
}

/// Expected redundancy of the received data bits XOR the received redundancy.
#[inline(always)]
pub fn syndrome(received: Codeword) -> u16 {
    ENCODE_TABLE[received.data().get() as usize] ^ received.redundancy()
}

/// Corrects up to 3 flipped bits among the 23 meaningful bits.
///
/// ## Known Limitation
/// Four or more errors in one codeword alias onto a weight-3-or-less
/// pattern. The wrong mask is applied and `corrected` still reads `true`;
/// nothing here can tell the two cases apart.
#[inline]
pub fn decode_word(received: Codeword) -> Decoded {
    let mask = DECODE_TABLE[syndrome(received) as usize];
    if mask == 0 {
        return Decoded { word: received.data(), corrected: false };
    }
    Decoded {
        word: Codeword::from_bits(received.bits() ^ mask).data(),
        corrected: true,
    }
}
