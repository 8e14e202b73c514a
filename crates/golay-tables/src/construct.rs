//! `const fn` construction of the encode and decode tables.
//!
//! Redundancy is the remainder of `data(x) * x^11` divided by the generator
//! polynomial of the cyclic Golay code, which makes the code systematic: the
//! 12 data bits travel unchanged next to 11 check bits.

use crate::{CODEWORD_BITS, DATA_BITS, DATA_MASK, DECODE_TABLE_LEN, ENCODE_TABLE_LEN, REDUNDANCY_BITS, REDUNDANCY_MASK};

/// g(x) = x^11 + x^9 + x^7 + x^6 + x^5 + x + 1
pub const GENERATOR: u32 = 0xAE3;

/// 11 redundancy bits for a 12-bit data word (upper bits of `data` ignored).
pub const fn parity(data: u16) -> u16 {
    let mut rem = ((data & DATA_MASK) as u32) << REDUNDANCY_BITS;
    let mut i = DATA_BITS;
    while i > 0 {
        i -= 1;
        if rem & (1 << (i + REDUNDANCY_BITS)) != 0 {
            rem ^= GENERATOR << i;
        }
    }
    (rem as u16) & REDUNDANCY_MASK
}

/// Syndrome produced by an error pattern in codeword layout.
///
/// By linearity this is also the syndrome of any codeword carrying that
/// error pattern.
pub const fn syndrome_of(pattern: u32) -> u16 {
    let data = (pattern >> REDUNDANCY_BITS) as u16;
    let redundancy = pattern as u16 & REDUNDANCY_MASK;
    parity(data) ^ redundancy
}

pub(crate) const fn encode_table() -> [u16; ENCODE_TABLE_LEN] {
    let mut table = [0u16; ENCODE_TABLE_LEN];
    let mut data = 0;
    while data < ENCODE_TABLE_LEN {
        table[data] = parity(data as u16);
        data += 1;
    }
    table
}

pub(crate) const fn decode_table() -> [u32; DECODE_TABLE_LEN] {
    let mut table = [0u32; DECODE_TABLE_LEN];
    let mut a = 0;
    while a < CODEWORD_BITS {
        let ea = 1u32 << a;
        table[syndrome_of(ea) as usize] = ea;
        let mut b = a + 1;
        while b < CODEWORD_BITS {
            let eb = ea | 1 << b;
            table[syndrome_of(eb) as usize] = eb;
            let mut c = b + 1;
            while c < CODEWORD_BITS {
                let ec = eb | 1 << c;
                table[syndrome_of(ec) as usize] = ec;
                c += 1;
            }
            b += 1;
        }
        a += 1;
    }
    table
}
