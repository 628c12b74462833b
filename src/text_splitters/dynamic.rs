use async_trait::async_trait;
use std::cmp::Reverse;
use std::sync::Arc;
use tracing::debug;

use crate::config::{OutputOrder, SplitterConfig};
use crate::language::Language;
use crate::traits::{Runnable, TextSplitter};
use crate::Result;

use super::chunk::Chunk;
use super::length::LengthFunction;
use super::recursive::RecursiveSeparatorSplitter;
use super::separator::Separator;
use super::window::SlidingWindowAssembler;

/// Text splitter that refines text on every separator, then slides a window
/// over the resulting segments.
///
/// Configuration is validated and separators are compiled on construction; a
/// constructed splitter is immutable and can be shared across threads.
#[derive(Debug, Clone)]
pub struct DynamicWindowSplitter {
    splitter: RecursiveSeparatorSplitter,
    assembler: SlidingWindowAssembler,
    output_order: OutputOrder,
}

impl DynamicWindowSplitter {
    /// Create a new splitter from a configuration
    pub fn new(config: SplitterConfig) -> Result<Self> {
        config.validate()?;

        let (separators, is_separator_regex) = config.effective_separators()?;
        let separators = Separator::compile_all(&separators, is_separator_regex)?;

        Ok(Self {
            splitter: RecursiveSeparatorSplitter::new(separators, config.keep_separator),
            assembler: SlidingWindowAssembler::new(
                config.window_size,
                config.step_size,
                config.min_chunk_length,
            )?,
            output_order: config.output_order,
        })
    }

    /// Create a splitter using a language's separator profile
    pub fn from_language(language: Language, config: SplitterConfig) -> Result<Self> {
        Self::new(config.with_language(language))
    }

    /// Measure segments and chunks with a different length function
    pub fn with_length_function(mut self, length_function: impl LengthFunction + 'static) -> Self {
        self.assembler = self
            .assembler
            .with_length_function(Arc::new(length_function));
        self
    }

    /// Split text into chunks
    pub fn split(&self, text: &str) -> Vec<Chunk> {
        let segments = self.splitter.split(text);
        let mut chunks = self.assembler.assemble(&segments);

        if self.output_order == OutputOrder::SizeDescending {
            chunks.sort_by_key(|chunk| Reverse(self.assembler.measure(&chunk.text)));
        }

        debug!(
            bytes = text.len(),
            segments = segments.len(),
            chunks = chunks.len(),
            "split text"
        );

        chunks
    }
}

/// Split text with a one-off configuration
pub fn split(text: &str, config: &SplitterConfig) -> Result<Vec<Chunk>> {
    Ok(DynamicWindowSplitter::new(config.clone())?.split(text))
}

impl TextSplitter for DynamicWindowSplitter {
    fn split_chunks(&self, text: &str) -> Result<Vec<Chunk>> {
        Ok(self.split(text))
    }
}

#[async_trait]
impl Runnable<String, Vec<String>> for DynamicWindowSplitter {
    async fn invoke(&self, input: String) -> Result<Vec<String>> {
        self.split_text(&input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::schema::Document;
    use crate::text_splitters::TokenLength;

    fn splitter(config: SplitterConfig) -> DynamicWindowSplitter {
        DynamicWindowSplitter::new(config).unwrap()
    }

    fn period_config() -> SplitterConfig {
        SplitterConfig::default()
            .with_separators(vec![".".to_string()])
            .with_window_size(6)
            .with_step_size(1)
            .with_min_chunk_length(1)
    }

    #[test]
    fn test_sentence_window_trace() {
        let chunks = splitter(period_config()).split("A. B. C. D.");
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["A. B. C.", " B. C.", " C. D.", " D."]);
        assert_eq!((chunks[1].start, chunks[1].end), (2, 8));
    }

    #[test]
    fn test_empty_text() {
        assert!(splitter(period_config()).split("").is_empty());
    }

    #[test]
    fn test_no_separator_match() {
        let chunks = splitter(period_config()).split("no full stop");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "no full stop");
        assert_eq!(chunks[0].segments, 0..1);
    }

    #[test]
    fn test_gap_between_windows() {
        // each window spans two segments, so a stride of three skips one
        let config = SplitterConfig::default()
            .with_separators(vec![" ".to_string()])
            .with_window_size(6)
            .with_step_size(3);
        let text = "aa bb cc dd ee ff gg";
        let chunks = splitter(config).split(text);
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["aa bb ", "dd ee ", "gg"]);

        assert!(chunks[1].start > chunks[0].end);
        assert_eq!(&text[chunks[0].end..chunks[1].start], "cc ");
        assert_eq!(&text[chunks[1].end..chunks[2].start], "ff ");
    }

    #[test]
    fn test_size_descending_is_opt_in() {
        let config = period_config().with_output_order(OutputOrder::SizeDescending);
        let chunks = splitter(config).split("A. B. C. D.");
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["A. B. C.", " B. C.", " C. D.", " D."]);

        let config = period_config()
            .with_window_size(4)
            .with_output_order(OutputOrder::SizeDescending);
        let chunks = splitter(config).split("A. B. Ceeee.");
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec![" B. Ceeee.", " Ceeee.", "A. B."]);
    }

    #[test]
    fn test_keep_separator_false_drops_delimiters() {
        let config = period_config().with_keep_separator(false).with_window_size(4);
        let chunks = splitter(config).split("A. B. C.");
        let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["A B C", " B C", " C"]);
    }

    #[test]
    fn test_regex_separators() {
        let config = period_config()
            .with_separators(vec![r"[.!?]".to_string()])
            .with_separator_regex(true)
            .with_window_size(1)
            .with_step_size(1);
        let texts = splitter(config).split_text("Hi! Ok? Yes.").unwrap();
        assert_eq!(texts, vec!["Hi!", " Ok?", " Yes."]);
    }

    #[test]
    fn test_invalid_configuration_fails_fast() {
        let err = DynamicWindowSplitter::new(period_config().with_step_size(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));

        let config = period_config()
            .with_separators(vec!["[".to_string()])
            .with_separator_regex(true);
        let err = DynamicWindowSplitter::new(config).unwrap_err();
        assert!(matches!(err, Error::Pattern { ref pattern, .. } if pattern == "["));
    }

    #[test]
    fn test_unknown_language_id_fails_fast() {
        let config = period_config().with_language_id("klingon");
        let err = DynamicWindowSplitter::new(config).unwrap_err();
        assert!(matches!(err, Error::UnsupportedLanguage { ref language, .. } if language == "klingon"));

        let config = period_config().with_language_id("TypeScript");
        assert!(DynamicWindowSplitter::new(config).is_ok());
    }

    #[test]
    fn test_from_language() {
        let config = SplitterConfig::default().with_window_size(20).with_step_size(20);
        let splitter = DynamicWindowSplitter::from_language(Language::Python, config).unwrap();
        let code = "def a():\n    return 1\n\ndef b():\n    return 2\n";
        let chunks = splitter.split(code);

        assert_eq!(chunks.iter().map(|c| c.text.as_str()).collect::<String>(), code);
        for chunk in &chunks[..chunks.len() - 1] {
            assert_eq!(chunk.text.chars().count(), 20);
        }
    }

    #[test]
    fn test_token_length_function() {
        let config = SplitterConfig::default()
            .with_separators(vec![" ".to_string()])
            .with_window_size(3)
            .with_step_size(3);
        let splitter = splitter(config).with_length_function(TokenLength);
        let texts = splitter.split_text("one two three four five").unwrap();
        assert_eq!(texts, vec!["one two three ", "four five"]);
    }

    #[test]
    fn test_split_function() {
        let chunks = split("A. B. C. D.", &period_config()).unwrap();
        assert_eq!(chunks.len(), 4);
        assert!(split("A.", &period_config().with_window_size(0)).is_err());
    }

    #[test]
    fn test_split_documents_carries_metadata() {
        let doc = Document::new("A. B. C. D.").with_metadata_entry("source", "notes.txt");
        let docs = splitter(period_config().with_step_size(2))
            .split_documents(vec![doc])
            .unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].page_content, " C. D.");
        assert_eq!(docs[1].metadata["source"], "notes.txt");
        assert_eq!(docs[1].metadata["start_index"], 5);
        assert_eq!(docs[1].metadata["end_index"], 11);
        assert_eq!(docs[1].metadata["chunk_index"], 1);
    }

    #[test]
    fn test_invoke() {
        let splitter = splitter(period_config());
        let chunks = tokio_test::block_on(splitter.invoke("A. B. C. D.".to_string())).unwrap();
        assert_eq!(chunks[0], "A. B. C.");
    }

    #[tokio::test]
    async fn test_batch() {
        let splitter = splitter(period_config());
        let results = splitter
            .batch(vec!["A. B. C. D.".to_string(), String::new()])
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap().len(), 4);
        assert!(results[1].as_ref().unwrap().is_empty());
    }
}
