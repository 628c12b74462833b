use tracing::trace;

use super::separator::{Segment, Separator};

/// Breaks text into atomic segments by applying separators in priority order.
///
/// Each separator refines the segments left by the previous ones: a segment the
/// separator matches is replaced by its pieces, every other segment is passed
/// through untouched.
#[derive(Debug, Clone)]
pub struct RecursiveSeparatorSplitter {
    separators: Vec<Separator>,
    keep_separator: bool,
}

impl RecursiveSeparatorSplitter {
    /// Create a splitter from already compiled separators
    pub fn new(separators: Vec<Separator>, keep_separator: bool) -> Self {
        Self {
            separators,
            keep_separator,
        }
    }

    /// The separators in the order they are applied
    pub fn separators(&self) -> &[Separator] {
        &self.separators
    }

    /// Split text into ordered, non-empty segments.
    ///
    /// Returns an empty list only for empty text. If nothing ever matches, the whole
    /// text comes back as a single segment.
    pub fn split<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut segments = vec![Segment::whole(text)];

        for separator in &self.separators {
            let mut refined = Vec::with_capacity(segments.len());
            for segment in segments {
                if separator.is_match(segment.text) {
                    refined.extend(separator.split(segment, self.keep_separator));
                } else {
                    refined.push(segment);
                }
            }
            trace!(
                separator = separator.as_str(),
                segments = refined.len(),
                "refinement pass"
            );
            segments = refined;
        }

        // Only reachable when every character of the text was a discarded delimiter
        if segments.is_empty() {
            segments.push(Segment::whole(text));
        }

        segments
    }
}
