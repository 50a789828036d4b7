//! BPE tokenizer implementation.
//!
//! Encodes and decodes text against a shared set of trained parameters.
//! Encoding replays the learned merge rules over the raw byte sequence in
//! the exact order they were learned; decoding concatenates vocabulary
//! byte expansions and re-validates UTF-8.

use bytepair_core::{
    byte_tokens, bytes_to_text, merge_pair, Result, Token, Tokenizer, TokenizerError,
    TokenizerParams,
};
use rayon::prelude::*;
use std::sync::Arc;

/// BPE tokenizer driven by trained parameters.
///
/// Holds its [`TokenizerParams`] behind an `Arc`: parameters are immutable
/// after training, so one parameter set may back any number of tokenizers
/// and concurrent encode/decode calls without synchronization.
#[derive(Debug, Clone)]
pub struct BpeTokenizer {
    params: Arc<TokenizerParams>,
}

impl BpeTokenizer {
    /// Create a tokenizer from shared trained parameters.
    pub fn new(params: Arc<TokenizerParams>) -> Self {
        Self { params }
    }

    /// Create a tokenizer taking ownership of trained parameters.
    pub fn from_params(params: TokenizerParams) -> Self {
        Self::new(Arc::new(params))
    }

    /// The trained parameters backing this tokenizer.
    #[inline]
    pub fn params(&self) -> &TokenizerParams {
        &self.params
    }

    /// Total number of known tokens.
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.params.vocab_size()
    }

    /// Encode a batch of texts (parallelized).
    ///
    /// Each text is encoded independently against the shared parameters on
    /// a rayon worker; results preserve input order.
    pub fn encode_batch(&self, texts: &[&str]) -> Vec<Vec<Token>> {
        texts.par_iter().map(|text| self.encode(text)).collect()
    }

    /// Decode a batch of token sequences (parallelized).
    pub fn decode_batch(&self, sequences: &[&[Token]]) -> Result<Vec<String>> {
        sequences
            .par_iter()
            .map(|tokens| self.decode(tokens))
            .collect()
    }
}

impl Tokenizer for BpeTokenizer {
    /// Encode text by replaying every merge rule, in learned order, over
    /// the raw UTF-8 byte tokens.
    ///
    /// The order matters: a rule learned later assumes the sequence has
    /// already been rewritten by every earlier rule. Applying rules out of
    /// order can produce a different, non-canonical tokenization.
    fn encode(&self, text: &str) -> Vec<Token> {
        let mut tokens = byte_tokens(text);

        for (pair, new_token) in self.params.merges().iter() {
            if tokens.len() < 2 {
                break;
            }
            tokens = merge_pair(&tokens, pair, new_token);
        }

        tokens
    }

    /// Decode by concatenating each token's byte expansion, then
    /// UTF-8-decoding the result.
    fn decode(&self, tokens: &[Token]) -> Result<String> {
        let vocab = self.params.vocab();
        let mut bytes = Vec::with_capacity(tokens.len());

        for &id in tokens {
            let expansion = vocab
                .bytes(id)
                .ok_or(TokenizerError::UnknownTokenId(id))?;
            bytes.extend_from_slice(expansion);
        }

        bytes_to_text(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytepair_core::{MergeRules, Vocabulary};
    use bytepair_training::BpeTrainer;

    fn trained(corpus: &str, num_merges: usize) -> BpeTokenizer {
        let params = BpeTrainer::with_num_merges(num_merges)
            .train(corpus)
            .unwrap();
        BpeTokenizer::from_params(params)
    }

    #[test]
    fn test_roundtrip() {
        let tokenizer = trained("the cat in the hat", 3);

        for text in ["", "that thing", "the the the", "héllo wörld", "日本語"] {
            let tokens = tokenizer.encode(text);
            assert_eq!(tokenizer.decode(&tokens).unwrap(), text);
        }
    }

    #[test]
    fn test_end_to_end_cat_in_the_hat() {
        let tokenizer = trained("the cat in the hat", 3);
        assert_eq!(tokenizer.vocab_size(), 259);

        let text = "the quick brown fox";
        let tokens = tokenizer.encode(text);
        // "the " collapses to the third learned token
        assert_eq!(tokens[0], 258);
        assert!(tokens.len() < text.len());
        assert_eq!(tokenizer.decode(&tokens).unwrap(), text);
    }

    #[test]
    fn test_encode_without_merges_is_bytes() {
        let tokenizer = trained("", 0);
        assert_eq!(tokenizer.encode("abc"), vec![97, 98, 99]);
    }

    #[test]
    fn test_merge_order_is_canonical() {
        // Training on "abcabc" learns (a,b) -> 256 then (256,c) -> 257.
        // Canonical encoding of "abc" applies them in that order and
        // reaches [257]; replaying the rules in reverse never fires the
        // second rule and stops at [256, 99].
        let tokenizer = trained("abcabc", 2);

        let canonical = tokenizer.encode("abc");
        assert_eq!(canonical, vec![257]);

        let rules: Vec<_> = tokenizer.params().merges().iter().collect();
        let mut reversed = byte_tokens("abc");
        for &(pair, new_token) in rules.iter().rev() {
            reversed = merge_pair(&reversed, pair, new_token);
        }
        assert_eq!(reversed, vec![256, 99]);
        assert_ne!(canonical, reversed);

        // Both still decode losslessly
        assert_eq!(tokenizer.decode(&reversed).unwrap(), "abc");
    }

    #[test]
    fn test_decode_unknown_token() {
        let tokenizer = trained("aaaa", 1);
        let result = tokenizer.decode(&[97, 9999]);
        assert!(matches!(
            result,
            Err(TokenizerError::UnknownTokenId(9999))
        ));
    }

    #[test]
    fn test_decode_split_multibyte_char() {
        let tokenizer = trained("", 0);
        // 0xC3 alone is a truncated UTF-8 sequence
        let result = tokenizer.decode(&[0xc3]);
        assert!(matches!(result, Err(TokenizerError::InvalidUtf8(_))));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let tokenizer = trained("the cat in the hat", 3);
        let texts = ["the hat", "a cat", "the the"];

        let batch = tokenizer.encode_batch(&texts);
        for (text, tokens) in texts.iter().zip(&batch) {
            assert_eq!(tokenizer.encode(text), *tokens);
        }

        let sequences: Vec<&[Token]> = batch.iter().map(|t| t.as_slice()).collect();
        let decoded = tokenizer.decode_batch(&sequences).unwrap();
        assert_eq!(decoded, texts);
    }

    #[test]
    fn test_shared_params() {
        let params = Arc::new(
            BpeTrainer::with_num_merges(2).train("abcabc").unwrap(),
        );
        let a = BpeTokenizer::new(params.clone());
        let b = BpeTokenizer::new(params);

        assert_eq!(a.encode("abc"), b.encode("abc"));
    }

    #[test]
    fn test_hand_built_params() {
        let mut vocab = Vocabulary::new();
        vocab.add_merged(256, (97, 98)).unwrap();
        let mut merges = MergeRules::new();
        merges.push((97, 98), 256);

        let tokenizer = BpeTokenizer::from_params(TokenizerParams::new(vocab, merges));
        assert_eq!(tokenizer.encode("abab"), vec![256, 256]);
        assert_eq!(tokenizer.decode(&[256]).unwrap(), "ab");
    }
}
