use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::traits::{Runnable, TextSplitter};
use crate::Result;

use super::chunk::{Chunk, ChunkSize};
use super::length::{CharacterLength, LengthFunction};
use super::separator::{Segment, Separator};

/// Text splitter that splits on a single separator and greedily merges the
/// pieces into chunks of at most `chunk_size`, carrying up to `chunk_overlap`
/// of trailing context into the next chunk
#[derive(Clone)]
pub struct CharacterTextSplitter {
    /// Size configuration for chunks
    chunk_size: ChunkSize,
    /// The separator to split on
    separator: Separator,
    /// Whether to keep separators in the pieces
    keep_separator: bool,
    /// How chunk size is measured
    length_function: Arc<dyn LengthFunction>,
}

impl std::fmt::Debug for CharacterTextSplitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterTextSplitter")
            .field("chunk_size", &self.chunk_size)
            .field("separator", &self.separator.as_str())
            .field("keep_separator", &self.keep_separator)
            .finish_non_exhaustive()
    }
}

impl Default for CharacterTextSplitter {
    fn default() -> Self {
        Self {
            chunk_size: ChunkSize::default(),
            separator: Separator::literal("\n\n"),
            keep_separator: false,
            length_function: Arc::new(CharacterLength),
        }
    }
}

impl CharacterTextSplitter {
    /// Create a new text splitter with custom parameters
    pub fn new(
        chunk_size: ChunkSize,
        separator: &str,
        is_separator_regex: bool,
        keep_separator: bool,
    ) -> Result<Self> {
        Ok(Self {
            chunk_size,
            separator: Separator::compile(separator, is_separator_regex)?,
            keep_separator,
            length_function: Arc::new(CharacterLength),
        })
    }

    /// Create a new text splitter with the default separator
    pub fn with_chunk_size(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        Ok(Self {
            chunk_size: ChunkSize::new(chunk_size, chunk_overlap)?,
            ..Default::default()
        })
    }

    /// Measure chunk size with a different length function
    pub fn with_length_function(mut self, length_function: impl LengthFunction + 'static) -> Self {
        self.length_function = Arc::new(length_function);
        self
    }

    fn span_length(&self, source: &str, run: &[Segment<'_>]) -> usize {
        match (run.first(), run.last()) {
            (Some(first), Some(last)) => self
                .length_function
                .length(&source[first.offset..last.end()]),
            _ => 0,
        }
    }

    /// Merge pieces into chunks that respect the size and overlap limits
    fn merge_splits(&self, source: &str, splits: &[Segment<'_>]) -> Vec<Chunk> {
        let ChunkSize {
            chunk_size,
            chunk_overlap,
        } = self.chunk_size;
        let mut docs = Vec::new();
        // current document is splits[start..end]
        let mut start = 0;

        for end in 0..splits.len() {
            if end > start && self.span_length(source, &splits[start..=end]) > chunk_size {
                let current = &splits[start..end];
                let current_length = self.span_length(source, current);
                if current_length > chunk_size {
                    warn!(
                        length = current_length,
                        chunk_size, "created a chunk larger than the chunk size"
                    );
                }
                docs.push(Chunk::span(source, current, start));

                // Drop leading pieces until what remains fits in the overlap and leaves
                // room for the next piece
                while start < end
                    && (self.span_length(source, &splits[start..end]) > chunk_overlap
                        || self.span_length(source, &splits[start..=end]) > chunk_size)
                {
                    start += 1;
                }
            }
        }

        if start < splits.len() {
            let current = &splits[start..];
            let current_length = self.span_length(source, current);
            if current_length > chunk_size {
                warn!(
                    length = current_length,
                    chunk_size, "created a chunk larger than the chunk size"
                );
            }
            docs.push(Chunk::span(source, current, start));
        }

        docs
    }
}

impl TextSplitter for CharacterTextSplitter {
    fn split_chunks(&self, text: &str) -> Result<Vec<Chunk>> {
        let splits = self
            .separator
            .split(Segment::whole(text), self.keep_separator);
        Ok(self.merge_splits(text, &splits))
    }
}

#[async_trait]
impl Runnable<String, Vec<String>> for CharacterTextSplitter {
    async fn invoke(&self, input: String) -> Result<Vec<String>> {
        self.split_text(&input)
    }
}
