use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::Error;
use crate::Result;

use super::separator::Segment;

/// A size-bounded run of segments emitted as final output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The chunk's text
    pub text: String,
    /// Byte offset in the source where the first segment starts
    pub start: usize,
    /// Byte offset in the source one past the last segment
    pub end: usize,
    /// Indices of the atomic segments that make up the chunk
    pub segments: Range<usize>,
}

impl Chunk {
    /// Build a chunk by concatenating a run of segments.
    ///
    /// `first` is the index of `run[0]` in the full segment sequence; `run` must be non-empty.
    pub(crate) fn concat(run: &[Segment<'_>], first: usize) -> Self {
        let start = run.first().map_or(0, |s| s.offset);
        let end = run.last().map_or(start, |s| s.end());

        Self {
            text: run.iter().map(|s| s.text).collect(),
            start,
            end,
            segments: first..first + run.len(),
        }
    }

    /// Build a chunk from the contiguous source span covered by a run of segments
    pub(crate) fn span(source: &str, run: &[Segment<'_>], first: usize) -> Self {
        let start = run.first().map_or(0, |s| s.offset);
        let end = run.last().map_or(start, |s| s.end());

        Self {
            text: source[start..end].to_string(),
            start,
            end,
            segments: first..first + run.len(),
        }
    }
}

/// Struct to define chunk size constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSize {
    /// The target size for each chunk
    pub chunk_size: usize,
    /// The amount of overlap between chunks
    pub chunk_overlap: usize,
}

impl ChunkSize {
    /// Create a new chunk size configuration
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::InvalidConfiguration(
                "chunk size must be greater than zero".to_string(),
            ));
        }
        if chunk_overlap >= chunk_size {
            return Err(Error::InvalidConfiguration(format!(
                "chunk overlap ({}) must be less than chunk size ({})",
                chunk_overlap, chunk_size
            )));
        }
        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }
}

impl Default for ChunkSize {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
        }
    }
}
