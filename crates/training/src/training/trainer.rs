//! BPE trainer implementation.
//!
//! Trains a tokenizer from a text corpus by iteratively merging the most
//! frequent adjacent byte/token pair into a newly minted token, recording
//! each merge as an ordered rule.

use super::counter::count_pairs;
use super::priority::{MergeCandidate, PairPriorityQueue};
use bytepair_core::{
    byte_tokens, merge_pair, MergeRules, Result, Token, TokenizerParams, Vocabulary, BYTE_TOKENS,
};

/// Configuration for BPE training.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Number of merge rules to learn
    pub num_merges: usize,
    /// Minimum frequency for a pair to be merged
    pub min_frequency: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_merges: 1_000,
            min_frequency: 1,
        }
    }
}

/// BPE trainer.
///
/// Each merge step counts all adjacent pairs in the current token sequence,
/// selects the most frequent one (ties broken by earliest left-to-right
/// occurrence), mints the next token ID for it, and rewrites the sequence.
/// Later merges therefore build on earlier ones, which is why the learned
/// order must be preserved for encoding.
pub struct BpeTrainer {
    config: TrainingConfig,
}

impl BpeTrainer {
    /// Create a new BPE trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Create a trainer learning `num_merges` rules with default settings.
    pub fn with_num_merges(num_merges: usize) -> Self {
        Self::new(TrainingConfig {
            num_merges,
            ..Default::default()
        })
    }

    /// Train on the given corpus.
    ///
    /// Starts from the raw UTF-8 bytes of `corpus` and performs up to
    /// `num_merges` merge steps, stopping early once the sequence is too
    /// short or no pair reaches `min_frequency`. Training degrades
    /// gracefully rather than failing: an exhausted (or empty) corpus
    /// simply yields fewer merges than requested.
    ///
    /// # Returns
    /// The trained parameters: 256 byte tokens plus one vocabulary entry
    /// and one ordered merge rule per learned merge.
    pub fn train(&self, corpus: &str) -> Result<TokenizerParams> {
        let mut tokens = byte_tokens(corpus);
        let mut vocab = Vocabulary::with_capacity(self.config.num_merges);
        let mut merges = MergeRules::with_capacity(self.config.num_merges);

        for _ in 0..self.config.num_merges {
            if tokens.len() < 2 {
                break;
            }

            let counts = count_pairs(&tokens);
            let mut queue = PairPriorityQueue::with_capacity(counts.len());
            for (pair, stats) in counts {
                queue.push(MergeCandidate::new(pair, stats));
            }

            let best = match queue.pop() {
                Some(candidate) if candidate.count >= self.config.min_frequency => candidate,
                _ => break,
            };

            let new_token = (BYTE_TOKENS + merges.len()) as Token;
            merges.push(best.pair, new_token);
            vocab.add_merged(new_token, best.pair)?;
            tokens = merge_pair(&tokens, best.pair, new_token);
        }

        Ok(TokenizerParams::new(vocab, merges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocab_growth() {
        let trainer = BpeTrainer::with_num_merges(3);
        let params = trainer.train("the cat in the hat").unwrap();

        assert_eq!(params.merges().len(), 3);
        assert_eq!(params.vocab_size(), 256 + 3);
    }

    #[test]
    fn test_learned_merges_in_order() {
        // "the cat in the hat": (t,h), (h,e), (e,' '), (a,t) all occur
        // twice; (t,h) appears first, so it merges first, and the follow-up
        // pairs it creates win the next two rounds.
        let trainer = BpeTrainer::with_num_merges(3);
        let params = trainer.train("the cat in the hat").unwrap();

        let rules: Vec<_> = params.merges().iter().collect();
        assert_eq!(
            rules,
            vec![
                ((116, 104), 256), // "th"
                ((256, 101), 257), // "the"
                ((257, 32), 258),  // "the "
            ]
        );

        assert_eq!(params.vocab().bytes(256), Some(b"th".as_slice()));
        assert_eq!(params.vocab().bytes(257), Some(b"the".as_slice()));
        assert_eq!(params.vocab().bytes(258), Some(b"the ".as_slice()));
    }

    #[test]
    fn test_empty_corpus() {
        for num_merges in [0, 1, 100] {
            let trainer = BpeTrainer::with_num_merges(num_merges);
            let params = trainer.train("").unwrap();
            assert_eq!(params.vocab_size(), 256);
            assert!(params.merges().is_empty());
        }
    }

    #[test]
    fn test_degrades_when_corpus_exhausted() {
        // "ab" supports exactly one merge, then the sequence is length 1
        let trainer = BpeTrainer::with_num_merges(10);
        let params = trainer.train("ab").unwrap();

        assert_eq!(params.merges().len(), 1);
        assert_eq!(params.vocab().bytes(256), Some(b"ab".as_slice()));
    }

    #[test]
    fn test_tie_break_leftmost_first() {
        // All pairs occur once; the leftmost pair (a,b) must win
        let trainer = BpeTrainer::with_num_merges(1);
        let params = trainer.train("abcd").unwrap();

        let rules: Vec<_> = params.merges().iter().collect();
        assert_eq!(rules, vec![((97, 98), 256)]);
    }

    #[test]
    fn test_min_frequency_stops_training() {
        let trainer = BpeTrainer::new(TrainingConfig {
            num_merges: 10,
            min_frequency: 3,
        });
        // Every pair occurs at most twice
        let params = trainer.train("ababX").unwrap();
        assert!(params.merges().is_empty());
    }

    #[test]
    fn test_training_is_deterministic() {
        let corpus = "low low low lower lowest newest newest";
        let first = BpeTrainer::with_num_merges(8).train(corpus).unwrap();
        let second = BpeTrainer::with_num_merges(8).train(corpus).unwrap();

        let a: Vec<_> = first.merges().iter().collect();
        let b: Vec<_> = second.merges().iter().collect();
        assert_eq!(a, b);
    }
}
