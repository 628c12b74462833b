use std::sync::Arc;
use tracing::debug;

use crate::error::Error;
use crate::Result;

use super::chunk::Chunk;
use super::length::{CharacterLength, LengthFunction};
use super::separator::Segment;

/// Regroups atomic segments into windows of roughly `window_size`.
///
/// A window starts at segment `i` and takes segments until their summed length
/// reaches `window_size` or the input runs out; the next window starts at
/// `i + step_size`. A step shorter than a window's span yields overlapping chunks,
/// an equal step tiles the text, and a longer step leaves gaps of skipped segments.
/// Gaps are a caller choice, not an error.
#[derive(Clone)]
pub struct SlidingWindowAssembler {
    window_size: usize,
    step_size: usize,
    min_chunk_length: usize,
    length_function: Arc<dyn LengthFunction>,
}

impl std::fmt::Debug for SlidingWindowAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlidingWindowAssembler")
            .field("window_size", &self.window_size)
            .field("step_size", &self.step_size)
            .field("min_chunk_length", &self.min_chunk_length)
            .finish_non_exhaustive()
    }
}

impl SlidingWindowAssembler {
    /// Create an assembler measuring length in characters
    pub fn new(window_size: usize, step_size: usize, min_chunk_length: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(Error::InvalidConfiguration(
                "window size must be greater than zero".to_string(),
            ));
        }
        if step_size == 0 {
            return Err(Error::InvalidConfiguration(
                "step size must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            window_size,
            step_size,
            min_chunk_length,
            length_function: Arc::new(CharacterLength),
        })
    }

    /// Replace the length function
    pub fn with_length_function(mut self, length_function: Arc<dyn LengthFunction>) -> Self {
        self.length_function = length_function;
        self
    }

    /// Rendered length of a piece of text
    pub fn measure(&self, text: &str) -> usize {
        self.length_function.length(text)
    }

    /// Assemble chunks in window-start order, dropping those shorter than the minimum
    pub fn assemble(&self, segments: &[Segment<'_>]) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut skipped = 0;
        let mut covered_until = 0;
        let mut start = 0;

        while start < segments.len() {
            let mut total = 0;
            let mut end = start;
            while end < segments.len() {
                total += self.length_function.length(segments[end].text);
                end += 1;
                if total >= self.window_size {
                    break;
                }
            }

            skipped += start.saturating_sub(covered_until);
            covered_until = covered_until.max(end);

            let chunk = Chunk::concat(&segments[start..end], start);
            if self.length_function.length(&chunk.text) >= self.min_chunk_length {
                chunks.push(chunk);
            }

            start += self.step_size;
        }

        if skipped > 0 {
            debug!(
                skipped,
                step_size = self.step_size,
                "window stride skipped segments"
            );
        }

        chunks
    }
}
