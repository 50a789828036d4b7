//! Bytepair-core - Core BPE data structures and primitives
//!
//! This crate provides the fundamental data structures and algorithms for
//! byte-pair encoding (BPE): the vocabulary mapping token IDs to byte
//! expansions, the ordered merge-rule table, the pair merge primitive, and
//! the `Tokenizer` trait with its character- and byte-level baseline
//! implementations.
//!
//! # Example
//!
//! ```rust
//! use bytepair_core::merge_pair;
//!
//! // Fuse every adjacent (1, 2) into token 256, leftmost-first
//! let merged = merge_pair(&[1, 2, 3, 1, 2], (1, 2), 256);
//! assert_eq!(merged, vec![256, 3, 256]);
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Byte/text conversion
pub mod bytes;
pub use bytes::{byte_tokens, bytes_to_text, text_to_bytes};

// Core BPE data structures
pub mod core;
pub use core::{
    merge_pair, MergeRules, Pair, Token, TokenizerParams, Vocabulary, BYTE_TOKENS,
};

// Tokenizer trait and baseline codecs
pub mod encoding;
pub use encoding::{ByteTokenizer, CharTokenizer, Tokenizer};
