//! # Stream Processor
//!
//! Drives the block codec across whole buffers. Output buffers are owned by
//! the caller and only ever appended to.
//!
//! Two flavours share one implementation:
//! - `encode` / `decode` treat a misaligned length as caller misuse and
//!   panic before touching the output.
//! - `try_*` return [`GolayError::Misaligned`] instead.
//!
//! Pre-size outputs with [`encoded_len`] / [`decoded_len`] to avoid regrowth.

use crate::error::{GolayError, Result};
use bytes::BufMut;
use golay_codec::{decode_block, encode_block, CODED_BLOCK, PLAIN_BLOCK};

/// Bytes appended by encoding `plain_len` input bytes.
#[inline]
pub const fn encoded_len(plain_len: usize) -> usize {
    plain_len / PLAIN_BLOCK * CODED_BLOCK
}

/// Bytes appended by decoding `coded_len` input bytes.
#[inline]
pub const fn decoded_len(coded_len: usize) -> usize {
    coded_len / CODED_BLOCK * PLAIN_BLOCK
}

#[inline]
fn check_aligned(len: usize, block: usize) -> Result<()> {
    if len % block != 0 {
        return Err(GolayError::Misaligned { len, block });
    }
    Ok(())
}

/// Appends the coded form of `input` to `out`.
pub fn try_encode_into<B: BufMut>(input: &[u8], out: &mut B) -> Result<()> {
    check_aligned(input.len(), PLAIN_BLOCK)?;
    for b in input.chunks_exact(PLAIN_BLOCK) {
        out.put_slice(&encode_block([b[0], b[1], b[2]]));
    }
    tracing::trace!(blocks = input.len() / PLAIN_BLOCK, "encoded");
    Ok(())
}

/// Appends the decoded form of `input` to `out` and returns how many 12-bit
/// words needed correction.
pub fn try_decode_into<B: BufMut>(input: &[u8], out: &mut B) -> Result<usize> {
    check_aligned(input.len(), CODED_BLOCK)?;
    let mut corrections = 0;
    for b in input.chunks_exact(CODED_BLOCK) {
        let (fixed, plain) = decode_block([b[0], b[1], b[2], b[3], b[4], b[5]]);
        corrections += fixed;
        out.put_slice(&plain);
    }
    tracing::trace!(blocks = input.len() / CODED_BLOCK, corrections, "decoded");
    Ok(corrections)
}

/// Panicking form of [`try_encode_into`].
pub fn encode_into<B: BufMut>(input: &[u8], out: &mut B) {
    if let Err(e) = try_encode_into(input, out) {
        panic!("golay encode: {}", e);
    }
}

/// Panicking form of [`try_decode_into`].
pub fn decode_into<B: BufMut>(input: &[u8], out: &mut B) -> usize {
    match try_decode_into(input, out) {
        Ok(corrections) => corrections,
        Err(e) => panic!("golay decode: {}", e),
    }
}

pub fn try_encode(input: &[u8], mut output: Vec<u8>) -> Result<Vec<u8>> {
    check_aligned(input.len(), PLAIN_BLOCK)?;
    output.reserve(encoded_len(input.len()));
    try_encode_into(input, &mut output)?;
    Ok(output)
}

pub fn try_decode(input: &[u8], mut output: Vec<u8>) -> Result<(usize, Vec<u8>)> {
    check_aligned(input.len(), CODED_BLOCK)?;
    output.reserve(decoded_len(input.len()));
    let corrections = try_decode_into(input, &mut output)?;
    Ok((corrections, output))
}

/// Encodes `input` (length a multiple of 3) onto the end of `output`.
///
/// # Panics
/// If `input.len() % 3 != 0`. Nothing is appended in that case.
pub fn encode(input: &[u8], output: Vec<u8>) -> Vec<u8> {
    match try_encode(input, output) {
        Ok(out) => out,
        Err(e) => panic!("golay encode: {}", e),
    }
}

/// Decodes `input` (length a multiple of 6) onto the end of `output`.
///
/// Returns the number of corrected 12-bit words alongside the buffer. A
/// non-zero count is channel telemetry, not a failure. Codewords hit by more
/// than 3 bit errors decode to wrong data without any signal.
///
/// # Panics
/// If `input.len() % 6 != 0`. Nothing is appended in that case.
pub fn decode(input: &[u8], output: Vec<u8>) -> (usize, Vec<u8>) {
    match try_decode(input, output) {
        Ok(res) => res,
        Err(e) => panic!("golay decode: {}", e),
    }
}
