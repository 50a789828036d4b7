//! Bytepair-training - BPE training infrastructure
//!
//! This crate provides the training algorithm for learning BPE merge rules
//! from text data: adjacent-pair frequency counting, deterministic merge
//! selection, and the sequential merge loop producing a
//! [`TokenizerParams`](bytepair_core::TokenizerParams).
//!
//! # Example
//!
//! ```rust
//! use bytepair_training::BpeTrainer;
//!
//! let trainer = BpeTrainer::with_num_merges(3);
//! let params = trainer.train("the cat in the hat")?;
//! assert_eq!(params.vocab_size(), 259);
//! # Ok::<(), bytepair_training::TokenizerError>(())
//! ```

pub use bytepair_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{
    count_pairs, BpeTrainer, MergeCandidate, PairPriorityQueue, PairStats, TrainingConfig,
};
