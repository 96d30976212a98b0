use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::chunker::{DEFAULT_OVERLAP_SIZE, DEFAULT_TARGET_SIZE};

/// How a document is cut into natural units before packing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Plain word windows over the whole document
    FixedSize,
    /// Blank-line separated paragraphs
    Paragraph,
    /// Sentences with sentence-level overlap
    #[default]
    Sentence,
    /// Paragraphs with numbered-list sections split out
    Semantic,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FixedSize => "fixed-size",
            Self::Paragraph => "paragraph",
            Self::Sentence => "sentence",
            Self::Semantic => "semantic",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed-size" | "fixed_size" | "fixed" => Ok(Self::FixedSize),
            "paragraph" | "paragraphs" => Ok(Self::Paragraph),
            "sentence" | "sentences" => Ok(Self::Sentence),
            "semantic" => Ok(Self::Semantic),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Chunking parameters, sizes in estimated tokens
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    pub strategy: Strategy,
    pub target_size: usize,
    pub overlap_size: usize,
    /// Paragraph strategy only: never split a paragraph, no overlap
    pub respect_paragraphs: bool,
    /// Semantic strategy only: split numbered lists into sections
    pub detect_numbered_sections: bool,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            target_size: DEFAULT_TARGET_SIZE,
            overlap_size: DEFAULT_OVERLAP_SIZE,
            respect_paragraphs: true,
            detect_numbered_sections: true,
        }
    }
}

impl ChunkingConfig {
    pub fn new(strategy: Strategy, target_size: usize, overlap_size: usize) -> Self {
        Self {
            strategy,
            target_size,
            overlap_size,
            ..Default::default()
        }
    }

    pub fn respect_paragraphs(mut self, respect: bool) -> Self {
        self.respect_paragraphs = respect;
        self
    }

    pub fn detect_numbered_sections(mut self, detect: bool) -> Self {
        self.detect_numbered_sections = detect;
        self
    }

    /// Reject sizes the engine cannot work with. Never clamps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_size == 0 {
            return Err(ConfigError::ZeroTargetSize);
        }
        if self.overlap_size >= self.target_size {
            return Err(ConfigError::OverlapTooLarge {
                overlap: self.overlap_size,
                target: self.target_size,
            });
        }
        Ok(())
    }

    /// Whether the active mode can carry overlap at all
    pub fn overlap_applicable(&self) -> bool {
        !(self.strategy == Strategy::Paragraph && self.respect_paragraphs)
    }
}
