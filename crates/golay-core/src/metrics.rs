//! Link telemetry accumulated across simulation rounds.

/// What one encode -> channel -> decode round observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundReport {
    pub blocks: u64,
    pub bits_flipped: u64,
    pub words_corrected: u64,
    /// Decoded bytes that differ from what was sent.
    pub residual_byte_errors: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkStats {
    pub rounds: u64,
    pub blocks: u64,
    pub bits_flipped: u64,
    pub words_corrected: u64,
    pub residual_byte_errors: u64,
    /// Rounds whose decoded payload differed from the input.
    pub failed_rounds: u64,
}

impl LinkStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, round: &RoundReport) {
        self.rounds += 1;
        self.blocks += round.blocks;
        self.bits_flipped += round.bits_flipped;
        self.words_corrected += round.words_corrected;
        self.residual_byte_errors += round.residual_byte_errors;
        if round.residual_byte_errors > 0 {
            self.failed_rounds += 1;
        }
    }

    /// Folds per-worker or per-link stats together.
    pub fn merge(&mut self, other: &LinkStats) {
        self.rounds += other.rounds;
        self.blocks += other.blocks;
        self.bits_flipped += other.bits_flipped;
        self.words_corrected += other.words_corrected;
        self.residual_byte_errors += other.residual_byte_errors;
        self.failed_rounds += other.failed_rounds;
    }

    /// Wrong decoded bytes per plain byte sent.
    pub fn residual_error_rate(&self) -> f64 {
        let plain = self.blocks * golay_codec::PLAIN_BLOCK as u64;
        if plain == 0 {
            0.0
        } else {
            self.residual_byte_errors as f64 / plain as f64
        }
    }

    pub fn corrections_per_block(&self) -> f64 {
        if self.blocks == 0 {
            0.0
        } else {
            self.words_corrected as f64 / self.blocks as f64
        }
    }
}
