//! Pair frequency counting for BPE training.
//!
//! Each training iteration counts every adjacent token pair in the current
//! corpus sequence. Alongside the count, the index of each pair's leftmost
//! occurrence is recorded so the trainer can break frequency ties
//! deterministically.

use ahash::AHashMap;
use bytepair_core::{Pair, Token};

/// Frequency statistics for one adjacent pair within a counting pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairStats {
    /// Number of adjacent occurrences
    pub count: u64,
    /// Index of the leftmost occurrence in the scanned sequence
    pub first_at: usize,
}

/// Count every adjacent pair in `sequence`.
///
/// For every index pair `(i, i + 1)` the count of
/// `(sequence[i], sequence[i + 1])` is incremented; the first occurrence
/// index is recorded on first touch. Sequences shorter than two tokens
/// yield an empty map.
pub fn count_pairs(sequence: &[Token]) -> AHashMap<Pair, PairStats> {
    let mut counts: AHashMap<Pair, PairStats> = AHashMap::new();

    for (i, window) in sequence.windows(2).enumerate() {
        let pair = (window[0], window[1]);
        counts
            .entry(pair)
            .and_modify(|stats| stats.count += 1)
            .or_insert(PairStats { count: 1, first_at: i });
    }

    counts
}
