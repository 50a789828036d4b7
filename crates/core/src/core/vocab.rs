//! Vocabulary storage and lookup.
//!
//! This module maps every known token ID to the raw bytes it expands to when
//! fully decoded. IDs 0-255 are the single raw bytes; a token minted by
//! merging `(a, b)` expands to the concatenation of the expansions of `a`
//! and `b`.

use crate::core::merges::Pair;
use crate::core::Token;
use crate::error::{Result, TokenizerError};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Number of reserved single-byte tokens.
pub const BYTE_TOKENS: usize = 256;

/// Vocabulary mapping token IDs to their byte expansions.
///
/// The mapping is append-only: once an ID is assigned an expansion it never
/// changes. A fresh vocabulary always contains the 256 single-byte tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Token ID -> byte expansion
    map: AHashMap<Token, Vec<u8>>,
}

impl Vocabulary {
    /// Create a vocabulary seeded with the 256 single-byte tokens.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a seeded vocabulary with room for `extra` learned tokens.
    pub fn with_capacity(extra: usize) -> Self {
        let mut map = AHashMap::with_capacity(BYTE_TOKENS + extra);
        for byte in 0..BYTE_TOKENS {
            map.insert(byte as Token, vec![byte as u8]);
        }
        Self { map }
    }

    /// Get the byte expansion for a token ID.
    #[inline]
    pub fn bytes(&self, token: Token) -> Option<&[u8]> {
        self.map.get(&token).map(|bytes| bytes.as_slice())
    }

    /// Check whether a token ID is known.
    #[inline]
    pub fn contains(&self, token: Token) -> bool {
        self.map.contains_key(&token)
    }

    /// Register a learned token as the concatenation of a pair's expansions.
    ///
    /// Fails with `UnknownTokenId` if either side of the pair has no
    /// expansion yet.
    pub fn add_merged(&mut self, token: Token, pair: Pair) -> Result<()> {
        let left = self
            .map
            .get(&pair.0)
            .ok_or(TokenizerError::UnknownTokenId(pair.0))?;
        let right = self
            .map
            .get(&pair.1)
            .ok_or(TokenizerError::UnknownTokenId(pair.1))?;

        let expansion = [left.as_slice(), right.as_slice()].concat();
        self.map.insert(token, expansion);

        Ok(())
    }

    /// Number of known tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the vocabulary is empty.
    ///
    /// Always false for vocabularies built through `new`, which seed the
    /// byte tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(token, expansion)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Token, &[u8])> + '_ {
        self.map.iter().map(|(&token, bytes)| (token, bytes.as_slice()))
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}
