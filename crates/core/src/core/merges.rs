//! Merge rule storage.
//!
//! Merge rules map a token pair to the token minted for it. The order in
//! which rules were learned is preserved and is semantically significant:
//! encoding must apply rules in exactly this order, because later merges
//! were learned against a corpus already rewritten by the earlier ones.

use crate::core::Token;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A pair of adjacent token IDs considered as a unit for merging.
pub type Pair = (Token, Token);

/// Ordered collection of BPE merge rules.
///
/// Pairs are unique keys: a pair is merged into exactly one token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeRules {
    /// Rules in the order they were learned: (pair, minted token)
    rules: Vec<(Pair, Token)>,
    /// Rank index: pair -> position in `rules`
    ranks: AHashMap<Pair, u32>,
}

impl MergeRules {
    /// Create an empty collection of merge rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rules: Vec::with_capacity(capacity),
            ranks: AHashMap::with_capacity(capacity),
        }
    }

    /// Append a rule, preserving insertion order.
    ///
    /// Returns false and leaves the table unchanged if the pair already has
    /// a rule.
    pub fn push(&mut self, pair: Pair, new_token: Token) -> bool {
        if self.ranks.contains_key(&pair) {
            return false;
        }

        self.ranks.insert(pair, self.rules.len() as u32);
        self.rules.push((pair, new_token));
        true
    }

    /// The token a pair merges into, if a rule exists.
    #[inline]
    pub fn get(&self, pair: Pair) -> Option<Token> {
        self.ranks.get(&pair).map(|&rank| self.rules[rank as usize].1)
    }

    /// The rank (learned position, 0-based) of a pair's rule.
    #[inline]
    pub fn rank(&self, pair: Pair) -> Option<u32> {
        self.ranks.get(&pair).copied()
    }

    /// Iterate over rules in learned order.
    pub fn iter(&self) -> impl Iterator<Item = (Pair, Token)> + '_ {
        self.rules.iter().copied()
    }

    /// Number of merge rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there are no merge rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_get() {
        let mut rules = MergeRules::new();
        assert!(rules.push((0, 1), 256));
        assert!(rules.push((256, 2), 257));

        assert_eq!(rules.get((0, 1)), Some(256));
        assert_eq!(rules.get((256, 2)), Some(257));
        assert_eq!(rules.get((2, 3)), None);
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn test_duplicate_pair_rejected() {
        let mut rules = MergeRules::new();
        assert!(rules.push((0, 1), 256));
        assert!(!rules.push((0, 1), 999));

        assert_eq!(rules.get((0, 1)), Some(256));
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn test_iter_preserves_insertion_order() {
        let mut rules = MergeRules::new();
        rules.push((5, 6), 256);
        rules.push((1, 2), 257);
        rules.push((256, 1), 258);

        let collected: Vec<_> = rules.iter().collect();
        assert_eq!(
            collected,
            vec![((5, 6), 256), ((1, 2), 257), ((256, 1), 258)]
        );
    }

    #[test]
    fn test_rank() {
        let mut rules = MergeRules::new();
        rules.push((5, 6), 256);
        rules.push((1, 2), 257);

        assert_eq!(rules.rank((5, 6)), Some(0));
        assert_eq!(rules.rank((1, 2)), Some(1));
        assert_eq!(rules.rank((9, 9)), None);
    }
}
