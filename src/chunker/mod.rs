mod assembler;
mod window;


use serde::{Deserialize, Serialize};

use crate::units::UnitKind;

pub(crate) use assembler::{Assembler, Overflow};
pub(crate) use window::word_windows;

/// Default target tokens per chunk
pub const DEFAULT_TARGET_SIZE: usize = 200;

/// Default overlap tokens between consecutive chunks
pub const DEFAULT_OVERLAP_SIZE: usize = 20;

/// A retrieval-sized span of document text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The text content of this chunk
    pub text: String,
    /// Estimated token count of `text`
    pub token_estimate: usize,
    /// Granularity the chunk was assembled from
    pub origin: UnitKind,
    /// Length of the leading prefix repeated from the previous chunk
    pub overlap_bytes: usize,
}

impl Chunk {
    /// Text this chunk contributes beyond the previous chunk's overlap
    pub fn fresh_text(&self) -> &str {
        self.text.get(self.overlap_bytes..).unwrap_or("")
    }

    /// The repeated prefix, empty when the chunk carries no overlap
    pub fn overlap_text(&self) -> &str {
        self.text
            .get(..self.overlap_bytes)
            .map(str::trim_end)
            .unwrap_or("")
    }
}
