//! Text/byte conversion at the edges of the pipeline.
//!
//! BPE operates on raw UTF-8 bytes; these helpers convert between text and
//! byte or token sequences. Encoding is total, decoding fails on byte
//! sequences that are not valid UTF-8 (e.g. a truncated token stream).

use crate::core::Token;
use crate::error::Result;

/// Convert text to its UTF-8 byte sequence.
#[inline]
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Convert a byte sequence back to text.
///
/// Fails with [`TokenizerError::InvalidUtf8`](crate::TokenizerError) if the
/// bytes are not valid UTF-8.
pub fn bytes_to_text(bytes: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(bytes)?)
}

/// Convert text to byte-valued tokens (each UTF-8 byte widened to a `Token`).
#[inline]
pub fn byte_tokens(text: &str) -> Vec<Token> {
    text.bytes().map(Token::from).collect()
}
