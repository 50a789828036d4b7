//! Core BPE data structures.
//!
//! This module contains the fundamental data structures and algorithms
//! for byte-pair encoding, independent of any specific tokenizer.

pub mod merge;
pub mod merges;
pub mod params;
pub mod vocab;

pub use merge::merge_pair;
pub use merges::{MergeRules, Pair};
pub use params::TokenizerParams;
pub use vocab::{Vocabulary, BYTE_TOKENS};

/// Integer token identifier.
///
/// IDs 0-255 denote single raw bytes; IDs >= 256 denote learned merges,
/// assigned in strictly increasing order of creation.
pub type Token = u32;
