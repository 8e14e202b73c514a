//! Error types for the stream layer and its configuration.
//!
//! Channel noise is never an error here: corrections are reported as counts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GolayError {
    /// Input length is not a whole number of blocks.
    #[error("input length {len} is not a multiple of {block}")]
    Misaligned { len: usize, block: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GolayError>;
