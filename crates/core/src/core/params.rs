//! Trained tokenizer parameters.

use crate::core::merges::MergeRules;
use crate::core::vocab::Vocabulary;
use serde::{Deserialize, Serialize};

/// The immutable result of BPE training: a vocabulary plus the ordered
/// merge rules. Fully determines a tokenizer's behavior.
///
/// Constructed once by the trainer and never mutated afterwards, so it may
/// be shared (behind an `Arc`) across any number of tokenizers and
/// concurrent encode/decode calls without synchronization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerParams {
    vocab: Vocabulary,
    merges: MergeRules,
}

impl TokenizerParams {
    /// Bundle a vocabulary and merge rules into a parameter set.
    pub fn new(vocab: Vocabulary, merges: MergeRules) -> Self {
        Self { vocab, merges }
    }

    /// The vocabulary: token ID -> byte expansion.
    #[inline]
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// The merge rules in learned order.
    #[inline]
    pub fn merges(&self) -> &MergeRules {
        &self.merges
    }

    /// Total number of known tokens (256 byte tokens plus learned merges).
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let mut vocab = Vocabulary::new();
        vocab.add_merged(256, (97, 98)).unwrap();
        let mut merges = MergeRules::new();
        merges.push((97, 98), 256);

        let params = TokenizerParams::new(vocab, merges);
        assert_eq!(params.vocab_size(), 257);
        assert_eq!(params.merges().len(), 1);
        assert_eq!(params.vocab().bytes(256), Some(b"ab".as_slice()));
    }
}
