use std::num::NonZeroUsize;

use lru::LruCache;
use sha2::{Digest, Sha256};
use tracing::trace;

use crate::strategy::{chunk, ChunkOutput, ChunkingConfig, ConfigError};

/// Maximum memoized documents before the least recently used is evicted
pub const DEFAULT_CACHE_ENTRIES: usize = 256;

/// Memoizes chunking results by `(text, config)`.
///
/// Output is deterministic for the default estimator, so a hit is returned
/// without re-running the engine.
#[derive(Debug)]
pub struct ChunkCache {
    entries: LruCache<String, ChunkOutput>,
    hits: u64,
    misses: u64,
}

impl ChunkCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_ENTRIES)
    }

    pub fn with_capacity(max_entries: usize) -> Self {
        let cap = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(cap),
            hits: 0,
            misses: 0,
        }
    }

    /// Chunk `text`, reusing a previous result for the same input
    pub fn chunk(
        &mut self,
        text: &str,
        config: &ChunkingConfig,
    ) -> Result<ChunkOutput, ConfigError> {
        let key = cache_key(text, config);

        if let Some(output) = self.entries.get(&key) {
            self.hits += 1;
            trace!(key = %key, "chunk cache hit");
            return Ok(output.clone());
        }

        // invalid configs are never cached
        let output = chunk(text, config)?;
        self.misses += 1;

        if let Some((evicted, _)) = self.entries.push(key, output.clone()) {
            trace!(key = %evicted, "chunk cache eviction");
        }

        Ok(output)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop every entry and reset the hit/miss counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

impl Default for ChunkCache {
    fn default() -> Self {
        Self::new()
    }
}

/// SHA-256 over the config fields and the document text
fn cache_key(text: &str, config: &ChunkingConfig) -> String {
    let mut hasher = Sha256::new();
    hasher.update(config.strategy.as_str().as_bytes());
    hasher.update(config.target_size.to_le_bytes());
    hasher.update(config.overlap_size.to_le_bytes());
    hasher.update([
        config.respect_paragraphs as u8,
        config.detect_numbered_sections as u8,
    ]);
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
