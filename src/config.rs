//! Configuration for the `ragchunk` binary: an optional JSON file, overridden
//! by command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::estimator::{CharRatioEstimator, TokenEstimator, WordCountEstimator};
use crate::strategy::{ChunkingConfig, Strategy};

#[derive(Parser, Debug)]
#[command(name = "ragchunk")]
#[command(version, about = "Split a document into retrieval-sized chunks", long_about = None)]
pub struct Cli {
    /// Document to chunk; omit or pass `-` to read stdin
    pub input: Option<PathBuf>,

    /// JSON file holding a chunking configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Chunking strategy
    #[arg(short, long, value_parser = parse_strategy)]
    pub strategy: Option<Strategy>,

    /// Target chunk size in estimated tokens
    #[arg(short, long)]
    pub target_size: Option<usize>,

    /// Overlap between consecutive chunks in estimated tokens
    #[arg(short, long)]
    pub overlap: Option<usize>,

    /// Let the paragraph strategy split oversized paragraphs and apply overlap
    #[arg(long)]
    pub no_respect_paragraphs: bool,

    /// Treat numbered lists as plain paragraphs in the semantic strategy
    #[arg(long)]
    pub no_numbered_sections: bool,

    /// Token estimator
    #[arg(long, value_enum, default_value_t = EstimatorKind::Words)]
    pub estimator: EstimatorKind,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EstimatorKind {
    /// ceil(words * 1.3)
    Words,
    /// bytes / 4
    Chars,
}

impl EstimatorKind {
    pub fn build(self) -> Box<dyn TokenEstimator> {
        match self {
            Self::Words => Box::new(WordCountEstimator),
            Self::Chars => Box::new(CharRatioEstimator::default()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    s.parse().map_err(|e: crate::ConfigError| e.to_string())
}

impl Cli {
    /// File values first, then any flags given on the command line.
    ///
    /// The result is not validated here; `Chunker::new` does that.
    pub fn chunking_config(&self) -> Result<ChunkingConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ChunkingConfig::default(),
        };

        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(target) = self.target_size {
            config.target_size = target;
        }
        if let Some(overlap) = self.overlap {
            config.overlap_size = overlap;
        }
        if self.no_respect_paragraphs {
            config.respect_paragraphs = false;
        }
        if self.no_numbered_sections {
            config.detect_numbered_sections = false;
        }

        Ok(config)
    }
}

/// Read a `ChunkingConfig` from a JSON file; missing fields take defaults
pub fn load_config(path: &Path) -> Result<ChunkingConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: ChunkingConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}
