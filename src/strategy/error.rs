use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("target size must be at least 1 token")]
    ZeroTargetSize,

    #[error("overlap size ({overlap}) must be smaller than target size ({target})")]
    OverlapTooLarge { overlap: usize, target: usize },

    #[error("unknown chunking strategy: {0} (expected fixed-size, paragraph, sentence or semantic)")]
    UnknownStrategy(String),
}
