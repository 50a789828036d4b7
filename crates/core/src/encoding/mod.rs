//! Tokenizer interface and baseline codecs.
//!
//! Every tokenizer variant implements the same `Tokenizer` capability set:
//! - Character-level: one token per Unicode scalar value
//! - Byte-level: one token per UTF-8 byte
//! - BPE (in `bytepair-tokenizer`): learned merges over UTF-8 bytes

pub mod byte_level;
pub mod char_level;

pub use byte_level::ByteTokenizer;
pub use char_level::CharTokenizer;

use crate::core::Token;
use crate::error::Result;

/// Common capability set of every tokenizer variant.
pub trait Tokenizer {
    /// Encode text into a token sequence.
    ///
    /// Total: any text is encodable.
    fn encode(&self, text: &str) -> Vec<Token>;

    /// Decode a token sequence back into text.
    ///
    /// Fails with `UnknownTokenId` for IDs outside the variant's vocabulary
    /// and with `InvalidUtf8` when the reconstructed bytes are not valid
    /// UTF-8.
    fn decode(&self, tokens: &[Token]) -> Result<String>;
}
