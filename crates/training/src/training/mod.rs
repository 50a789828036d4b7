//! Training infrastructure for BPE tokenizers.
//!
//! This module provides the pair counting, merge selection, and training
//! loop for learning BPE merge rules from text data.

pub mod counter;
pub mod priority;
pub mod trainer;

pub use counter::{count_pairs, PairStats};
pub use priority::{MergeCandidate, PairPriorityQueue};
pub use trainer::{BpeTrainer, TrainingConfig};
