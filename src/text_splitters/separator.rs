use regex::Regex;

use crate::error::Error;
use crate::Result;

/// A contiguous, non-empty slice of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The segment's text
    pub text: &'a str,
    /// Byte offset of the segment within the source text
    pub offset: usize,
}

impl<'a> Segment<'a> {
    /// Create a segment covering a whole text
    pub fn whole(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    /// Byte offset one past the end of the segment
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    fn slice(&self, start: usize, end: usize) -> Self {
        Self {
            text: &self.text[start..end],
            offset: self.offset + start,
        }
    }
}

/// A compiled separator
#[derive(Debug, Clone)]
pub enum Separator {
    /// The empty separator: split between every character
    EveryCharacter,
    /// Split wherever the pattern matches
    Pattern {
        /// The separator as configured
        source: String,
        /// The compiled pattern
        regex: Regex,
    },
}

impl Separator {
    /// Compile a separator, escaping it first unless it is already a regex
    pub fn compile(separator: &str, is_separator_regex: bool) -> Result<Self> {
        if separator.is_empty() {
            return Ok(Self::EveryCharacter);
        }

        let pattern = if is_separator_regex {
            separator.to_string()
        } else {
            regex::escape(separator)
        };

        let regex = Regex::new(&pattern).map_err(|source| Error::Pattern {
            pattern: separator.to_string(),
            source,
        })?;

        Ok(Self::Pattern {
            source: separator.to_string(),
            regex,
        })
    }

    /// A literal separator; escaped literals always compile
    pub fn literal(separator: &str) -> Self {
        Self::compile(separator, false).expect("escaped literal is a valid pattern")
    }

    /// Compile an ordered separator list
    pub fn compile_all(separators: &[String], is_separator_regex: bool) -> Result<Vec<Self>> {
        separators
            .iter()
            .map(|separator| Self::compile(separator, is_separator_regex))
            .collect()
    }

    /// The separator as it was configured
    pub fn as_str(&self) -> &str {
        match self {
            Self::EveryCharacter => "",
            Self::Pattern { source, .. } => source,
        }
    }

    /// Whether splitting on this separator would change the text
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::EveryCharacter => !text.is_empty(),
            Self::Pattern { regex, .. } => regex.is_match(text),
        }
    }

    /// Split a segment into its non-empty pieces.
    ///
    /// With `keep_separator` each delimiter stays at the end of the piece before it,
    /// so the pieces tile the segment exactly. Without it delimiters are dropped.
    pub fn split<'a>(&self, segment: Segment<'a>, keep_separator: bool) -> Vec<Segment<'a>> {
        let regex = match self {
            Self::EveryCharacter => {
                return segment
                    .text
                    .char_indices()
                    .map(|(i, c)| segment.slice(i, i + c.len_utf8()))
                    .collect();
            }
            Self::Pattern { regex, .. } => regex,
        };

        let mut pieces = Vec::new();
        let mut last = 0;

        for m in regex.find_iter(segment.text) {
            let piece_end = if keep_separator { m.end() } else { m.start() };
            if piece_end > last {
                pieces.push(segment.slice(last, piece_end));
            }
            last = m.end();
        }

        if last < segment.text.len() {
            pieces.push(segment.slice(last, segment.text.len()));
        }

        pieces
    }
}
