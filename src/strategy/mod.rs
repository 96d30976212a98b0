mod config;
mod error;


use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::chunker::{word_windows, Assembler, Chunk, Overflow};
use crate::estimator::{TokenEstimator, WordCountEstimator};
use crate::units::{split_numbered_sections, split_paragraphs, split_sentences, NaturalUnit};

pub use config::{ChunkingConfig, Strategy};
pub use error::ConfigError;

/// Non-fatal remark about how the configuration was applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Notice {
    /// The requested overlap cannot be honored; 0 was used instead
    OverlapInapplicable { requested: usize, strategy: Strategy },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverlapInapplicable {
                requested,
                strategy,
            } => write!(
                f,
                "overlap of {} tokens is not applied by the {} strategy when paragraphs are respected; using 0",
                requested, strategy
            ),
        }
    }
}

/// Result of chunking one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkOutput {
    pub chunks: Vec<Chunk>,
    pub notices: Vec<Notice>,
}

impl ChunkOutput {
    pub fn total_tokens(&self) -> usize {
        self.chunks.iter().map(|c| c.token_estimate).sum()
    }
}

/// A validated configuration paired with a token estimator
pub struct Chunker {
    config: ChunkingConfig,
    estimator: Box<dyn TokenEstimator>,
}

impl Chunker {
    /// Validate `config` and use the word-count estimator
    pub fn new(config: ChunkingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            estimator: Box::new(WordCountEstimator),
        })
    }

    /// Swap in a different token estimator
    pub fn with_estimator(mut self, estimator: impl TokenEstimator + 'static) -> Self {
        self.estimator = Box::new(estimator);
        self
    }

    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    /// Notices implied by the configuration alone
    pub fn notices(&self) -> Vec<Notice> {
        if self.config.overlap_size > 0 && !self.config.overlap_applicable() {
            vec![Notice::OverlapInapplicable {
                requested: self.config.overlap_size,
                strategy: self.config.strategy,
            }]
        } else {
            vec![]
        }
    }

    /// Overlap actually used by the active mode
    pub fn effective_overlap(&self) -> usize {
        if self.config.overlap_applicable() {
            self.config.overlap_size
        } else {
            0
        }
    }

    pub fn chunk(&self, text: &str) -> ChunkOutput {
        let notices = self.notices();
        for notice in &notices {
            warn!("{}", notice);
        }

        if text.trim().is_empty() {
            return ChunkOutput {
                chunks: vec![],
                notices,
            };
        }

        let chunks = match self.config.strategy {
            Strategy::FixedSize => self.chunk_fixed(text),
            Strategy::Paragraph => self.chunk_paragraphs(text),
            Strategy::Sentence => self.chunk_sentences(text),
            Strategy::Semantic => self.chunk_semantic(text),
        };

        debug!(
            strategy = %self.config.strategy,
            bytes = text.len(),
            target = self.config.target_size,
            overlap = self.effective_overlap(),
            chunks = chunks.len(),
            "chunked document"
        );

        ChunkOutput { chunks, notices }
    }

    fn assembler(&self, joiner: &'static str, overlap: usize, overflow: Overflow) -> Assembler<'_> {
        Assembler {
            estimator: self.estimator.as_ref(),
            target: self.config.target_size,
            overlap,
            fallback_overlap: self.effective_overlap(),
            joiner,
            overflow,
        }
    }

    fn chunk_fixed(&self, text: &str) -> Vec<Chunk> {
        word_windows(
            text,
            self.config.target_size,
            self.effective_overlap(),
            self.estimator.as_ref(),
        )
    }

    fn chunk_paragraphs(&self, text: &str) -> Vec<Chunk> {
        let overflow = if self.config.respect_paragraphs {
            Overflow::Emit
        } else {
            Overflow::WordWindows
        };
        self.assembler("\n\n", self.effective_overlap(), overflow)
            .assemble(&split_paragraphs(text))
    }

    fn chunk_sentences(&self, text: &str) -> Vec<Chunk> {
        self.assembler(" ", self.effective_overlap(), Overflow::WordWindows)
            .assemble(&split_sentences(text))
    }

    /// Plain paragraphs pack together without overlap; each numbered section
    /// gets its own chunks. Overlap only applies inside overflow splits.
    fn chunk_semantic(&self, text: &str) -> Vec<Chunk> {
        let plain = self.assembler("\n\n", 0, Overflow::WordWindows);
        let section = self.assembler(" ", 0, Overflow::Sentences);

        let mut chunks = Vec::new();
        let mut run: Vec<NaturalUnit<'_>> = Vec::new();

        for paragraph in split_paragraphs(text) {
            let sections = if self.config.detect_numbered_sections {
                split_numbered_sections(paragraph.text)
            } else {
                None
            };

            match sections {
                Some(sections) => {
                    chunks.extend(plain.assemble(&run));
                    run.clear();
                    for unit in sections {
                        chunks.extend(section.assemble(&[unit]));
                    }
                }
                None => run.push(paragraph),
            }
        }
        chunks.extend(plain.assemble(&run));

        chunks
    }
}

/// Chunk `text` with the default estimator
pub fn chunk(text: &str, config: &ChunkingConfig) -> Result<ChunkOutput, ConfigError> {
    Ok(Chunker::new(config.clone())?.chunk(text))
}
