//! Encoding cache for repeated text sequences.
//!
//! Encoding is deterministic for a fixed parameter set, so repeated inputs
//! can be served from a small LRU cache.

use bytepair_core::Token;
use std::collections::HashMap;

/// LRU cache for encoding results.
///
/// HashMap-backed with a fixed capacity; the least recently used entry is
/// evicted once the cache is full. Hit and miss counts are tracked for
/// reporting.
pub struct EncodingCache {
    /// Text -> encoded tokens
    cache: HashMap<String, Vec<Token>>,
    /// Keys ordered oldest-first for eviction
    order: Vec<String>,
    /// Maximum number of entries
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl EncodingCache {
    /// Create an encoding cache with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Create an encoding cache with default capacity (1000).
    pub fn new() -> Self {
        Self::with_capacity(1000)
    }

    /// Get the cached encoding for `text`, or compute and store it.
    pub fn get_or_encode<F>(&mut self, text: &str, encode: F) -> Vec<Token>
    where
        F: FnOnce(&str) -> Vec<Token>,
    {
        if let Some(tokens) = self.cache.get(text).cloned() {
            self.hits += 1;
            self.touch(text);
            return tokens;
        }

        self.misses += 1;
        let tokens = encode(text);
        self.insert(text.to_string(), tokens.clone());
        tokens
    }

    /// Move a key to the most-recently-used position.
    fn touch(&mut self, text: &str) {
        if let Some(pos) = self.order.iter().position(|key| key == text) {
            let key = self.order.remove(pos);
            self.order.push(key);
        }
    }

    fn insert(&mut self, key: String, tokens: Vec<Token>) {
        if self.order.len() >= self.capacity {
            let oldest = self.order.remove(0);
            self.cache.remove(&oldest);
        }

        self.cache.insert(key.clone(), tokens);
        self.order.push(key);
    }

    /// Number of cache hits so far.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of cache misses so far.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all entries and reset the counters.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.order.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

impl Default for EncodingCache {
    fn default() -> Self {
        Self::new()
    }
}
