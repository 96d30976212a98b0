// Public API exports
pub mod cache;
pub mod chunker;
pub mod config;
pub mod estimator;
pub mod strategy;
pub mod units;

// Re-export main types for convenience
pub use cache::{ChunkCache, DEFAULT_CACHE_ENTRIES};

pub use chunker::{Chunk, DEFAULT_OVERLAP_SIZE, DEFAULT_TARGET_SIZE};

pub use estimator::{CharRatioEstimator, TokenEstimator, WordCountEstimator};

pub use strategy::{chunk, ChunkOutput, Chunker, ChunkingConfig, ConfigError, Notice, Strategy};

pub use units::{
    is_numbered_list, split_numbered_sections, split_paragraphs, split_sentences, split_words,
    NaturalUnit, UnitKind,
};
