//! # golay-core: Stream Layer
//!
//! Buffer-level Golay(23,12) encoding and decoding on top of
//! `golay-codec`, plus the configuration, parallel driver and noisy-link
//! simulator that exercise it.

pub mod channel;
pub mod config;
pub mod error;
pub mod metrics;
pub mod parallel;
pub mod sim;
pub mod stream;

pub use channel::BitFlipChannel;
pub use config::{ChannelConfig, CodecConfig, SimConfig};
pub use error::{GolayError, Result};
pub use metrics::{LinkStats, RoundReport};
pub use parallel::ParallelCodec;
pub use sim::Simulation;
pub use stream::{
    decode, decode_into, decoded_len, encode, encode_into, encoded_len, try_decode, try_decode_into,
    try_encode, try_encode_into,
};
