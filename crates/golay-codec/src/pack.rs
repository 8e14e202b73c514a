//! Bit-field packing between byte blocks and Golay words.

use golay_tables::{CODEWORD_MASK, DATA_MASK, REDUNDANCY_BITS, REDUNDANCY_MASK};

/// A 12-bit unit of original information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DataWord(u16);

impl DataWord {
    pub const MAX: DataWord = DataWord(DATA_MASK);

    /// Keeps the low 12 bits of `value`.
    #[inline(always)]
    pub const fn new(value: u16) -> Self {
        Self(value & DATA_MASK)
    }

    #[inline(always)]
    pub const fn get(self) -> u16 {
        self.0
    }
}

/// 23 meaningful bits: the data word above 11 redundancy bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Codeword(u32);

impl Codeword {
    #[inline(always)]
    pub const fn from_parts(data: DataWord, redundancy: u16) -> Self {
        Self((data.0 as u32) << REDUNDANCY_BITS | (redundancy & REDUNDANCY_MASK) as u32)
    }

    /// Keeps the low 23 bits of `bits`.
    #[inline(always)]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & CODEWORD_MASK)
    }

    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The systematic data bits, as received.
    #[inline(always)]
    pub const fn data(self) -> DataWord {
        DataWord::new((self.0 >> REDUNDANCY_BITS) as u16)
    }

    #[inline(always)]
    pub const fn redundancy(self) -> u16 {
        self.0 as u16 & REDUNDANCY_MASK
    }

    /// Reads a 3-byte slot; the padding bit (bit 7 of the last byte) is dropped.
    #[inline(always)]
    pub const fn from_bytes(slot: [u8; 3]) -> Self {
        Self(slot[0] as u32 | (slot[1] as u32) << 8 | ((slot[2] & 0x7F) as u32) << 16)
    }

    /// Writes the 3-byte slot with the padding bit cleared.
    #[inline(always)]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.0 as u8, (self.0 >> 8) as u8, (self.0 >> 16) as u8 & 0x7F]
    }
}

/// `b0,b1,b2` -> two data words. The low nibble of `b1` extends the first
/// word, the high nibble extends the second.
#[inline(always)]
pub const fn split_triple(block: [u8; 3]) -> [DataWord; 2] {
    let [b0, b1, b2] = block;
    [
        DataWord(b0 as u16 | ((b1 & 0x0F) as u16) << 8),
        DataWord(b2 as u16 | ((b1 & 0xF0) as u16) << 4),
    ]
}

/// Inverse of [`split_triple`].
#[inline(always)]
pub const fn join_triple(words: [DataWord; 2]) -> [u8; 3] {
    let [w0, w1] = words;
    [
        w0.0 as u8,
        (w0.0 >> 8) as u8 | ((w1.0 >> 4) as u8 & 0xF0),
        w1.0 as u8,
    ]
}

/// Six received bytes -> the two codeword slots they carry.
#[inline(always)]
pub const fn split_sextet(block: [u8; 6]) -> [Codeword; 2] {
    let [r0, r1, r2, r3, r4, r5] = block;
    [Codeword::from_bytes([r0, r1, r2]), Codeword::from_bytes([r3, r4, r5])]
}

/// Inverse of [`split_sextet`] for the meaningful bits.
#[inline(always)]
pub const fn join_sextet(words: [Codeword; 2]) -> [u8; 6] {
    let [a0, a1, a2] = words[0].to_bytes();
    let [b0, b1, b2] = words[1].to_bytes();
    [a0, a1, a2, b0, b1, b2]
}
