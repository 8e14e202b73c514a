//! # Parallel Block Processing
//!
//! Splits a buffer on block boundaries and runs each span on its own scoped
//! thread. Every worker writes into a disjoint slice of one pre-sized output,
//! so results are byte-identical to the serial path and need no stitching.

use crate::config::CodecConfig;
use crate::error::{GolayError, Result};
use crate::stream::{decode_into, decoded_len, encode_into, encoded_len, try_decode, try_encode};
use golay_codec::{CODED_BLOCK, PLAIN_BLOCK};
use std::thread;

#[derive(Debug, Clone)]
pub struct ParallelCodec {
    workers: usize,
    min_parallel_blocks: usize,
    degraded_ratio: f64,
}

impl ParallelCodec {
    pub fn new(config: &CodecConfig) -> Self {
        Self {
            workers: config.resolved_workers(),
            min_parallel_blocks: config.min_parallel_blocks,
            degraded_ratio: config.degraded_ratio,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    fn inline(&self, blocks: usize) -> bool {
        self.workers <= 1 || blocks < self.min_parallel_blocks.max(2)
    }

    /// Blocks per worker span, rounded up.
    fn span_blocks(&self, blocks: usize) -> usize {
        blocks.div_ceil(self.workers).max(1)
    }

    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.len() % PLAIN_BLOCK != 0 {
            return Err(GolayError::Misaligned { len: input.len(), block: PLAIN_BLOCK });
        }
        let blocks = input.len() / PLAIN_BLOCK;
        if self.inline(blocks) {
            return try_encode(input, Vec::with_capacity(encoded_len(input.len())));
        }

        let span = self.span_blocks(blocks);
        let mut out = vec![0u8; encoded_len(input.len())];
        thread::scope(|s| {
            for (src, mut dst) in input
                .chunks(span * PLAIN_BLOCK)
                .zip(out.chunks_mut(span * CODED_BLOCK))
            {
                s.spawn(move || encode_into(src, &mut dst));
            }
        });
        tracing::debug!(blocks, workers = self.workers, "parallel encode");
        Ok(out)
    }

    /// Returns the total number of corrected words and the decoded bytes.
    pub fn decode(&self, input: &[u8]) -> Result<(usize, Vec<u8>)> {
        if input.len() % CODED_BLOCK != 0 {
            return Err(GolayError::Misaligned { len: input.len(), block: CODED_BLOCK });
        }
        let blocks = input.len() / CODED_BLOCK;
        let (corrections, out) = if self.inline(blocks) {
            try_decode(input, Vec::with_capacity(decoded_len(input.len())))?
        } else {
            let span = self.span_blocks(blocks);
            let mut out = vec![0u8; decoded_len(input.len())];
            let corrections = thread::scope(|s| {
                let handles: Vec<_> = input
                    .chunks(span * CODED_BLOCK)
                    .zip(out.chunks_mut(span * PLAIN_BLOCK))
                    .map(|(src, mut dst)| s.spawn(move || decode_into(src, &mut dst)))
                    .collect();
                handles
                    .into_iter()
                    .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                    .sum::<usize>()
            });
            tracing::debug!(blocks, workers = self.workers, corrections, "parallel decode");
            (corrections, out)
        };

        let words = blocks * 2;
        if words > 0 && corrections as f64 / words as f64 > self.degraded_ratio {
            tracing::warn!(
                corrections,
                words,
                threshold = self.degraded_ratio,
                "degraded channel: correction ratio above threshold"
            );
        }
        Ok((corrections, out))
    }
}
