//! Bytepair-tokenizer - High-level BPE tokenizer API
//!
//! This crate provides the BPE tokenizer built on trained parameters from
//! `bytepair-training`, plus batch encode/decode, an encoding cache, and a
//! compression-ratio reporting helper.
//!
//! # Example
//!
//! ```rust
//! use bytepair_tokenizer::{BpeTokenizer, Tokenizer};
//! use bytepair_training::BpeTrainer;
//!
//! let params = BpeTrainer::with_num_merges(3).train("the cat in the hat")?;
//! let tokenizer = BpeTokenizer::from_params(params);
//!
//! let tokens = tokenizer.encode("the quick brown fox");
//! assert_eq!(tokenizer.decode(&tokens)?, "the quick brown fox");
//! # Ok::<(), bytepair_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use bytepair_core::{Result, Token, Tokenizer, TokenizerError, TokenizerParams};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::BpeTokenizer;

// Utilities
pub mod utils;
pub use utils::{compression_ratio, EncodingCache};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
