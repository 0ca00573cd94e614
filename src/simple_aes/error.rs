use rand::rand_core;
use thiserror::Error;

/// SimpleAES Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// SimpleAES Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Input did not encode to exactly one 16-byte state. Inputs are never padded or truncated.
    #[error("invalid state length: {len} bytes (expected 16)")]
    InvalidStateLength { len: usize },

    /// Input text could not be encoded as UTF-8.
    #[error("input is not valid UTF-8: {lossy:?}")]
    InvalidEncoding { lossy: String },

    /// OS RNG failed while generating a random state.
    #[error("OS RNG failed in random state generation")]
    Rng(#[from] rand_core::OsError),
}
