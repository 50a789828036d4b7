//! Error types for the BPE tokenizer library.

use thiserror::Error;

/// Main error type for tokenizer operations.
///
/// All errors surface directly to the immediate caller; nothing in this
/// library retries or recovers internally.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Decoded bytes do not form valid UTF-8
    #[error("Invalid UTF-8 sequence during decoding: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Unknown token ID
    #[error("Unknown token ID: {0}")]
    UnknownTokenId(u32),
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
