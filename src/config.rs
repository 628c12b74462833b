use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::language::{resolve_separators_for, Language};
use crate::Result;

/// Order of the chunks returned by a split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputOrder {
    /// Window-start order, which is also order of appearance in the source
    #[default]
    SourceOrder,
    /// Largest chunk first; equal sizes keep their source order
    SizeDescending,
}

/// Configuration for the sliding-window splitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Separators, most structural first; ignored when `language` is set
    pub separators: Vec<String>,

    /// Language identifier whose separator profile replaces `separators`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Keep each delimiter at the end of the segment before it
    pub keep_separator: bool,

    /// Treat separators as regular expressions rather than literals
    pub is_separator_regex: bool,

    /// Length at which a window stops taking segments
    pub window_size: usize,

    /// Number of segments between the starts of consecutive windows
    pub step_size: usize,

    /// Chunks shorter than this are dropped
    pub min_chunk_length: usize,

    /// Order of the returned chunks
    pub output_order: OutputOrder,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            separators: ["\n\n", "\n", ".", "。", "?", "？", "!", "！"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            language: None,
            keep_separator: true,
            is_separator_regex: false,
            window_size: 100,
            step_size: 1,
            min_chunk_length: 1,
            output_order: OutputOrder::SourceOrder,
        }
    }
}

impl SplitterConfig {
    /// Configuration using a language's separator profile
    pub fn for_language(language: Language) -> Self {
        Self::default().with_language(language)
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the separators
    pub fn with_separators(mut self, separators: Vec<String>) -> Self {
        self.separators = separators;
        self
    }

    /// Use a language's separator profile
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language.to_string());
        self
    }

    /// Use the separator profile of a language identifier, resolved when the config is validated
    pub fn with_language_id(mut self, language_id: impl Into<String>) -> Self {
        self.language = Some(language_id.into());
        self
    }

    /// Set whether delimiters are kept
    pub fn with_keep_separator(mut self, keep_separator: bool) -> Self {
        self.keep_separator = keep_separator;
        self
    }

    /// Set whether separators are regular expressions
    pub fn with_separator_regex(mut self, is_separator_regex: bool) -> Self {
        self.is_separator_regex = is_separator_regex;
        self
    }

    /// Set the window size
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the step size
    pub fn with_step_size(mut self, step_size: usize) -> Self {
        self.step_size = step_size;
        self
    }

    /// Set the minimum chunk length
    pub fn with_min_chunk_length(mut self, min_chunk_length: usize) -> Self {
        self.min_chunk_length = min_chunk_length;
        self
    }

    /// Set the output order
    pub fn with_output_order(mut self, output_order: OutputOrder) -> Self {
        self.output_order = output_order;
        self
    }

    /// The separators that will actually be applied, and whether they are patterns
    pub fn effective_separators(&self) -> Result<(Vec<String>, bool)> {
        match &self.language {
            Some(language_id) => Ok((resolve_separators_for(language_id)?, true)),
            None => Ok((self.separators.clone(), self.is_separator_regex)),
        }
    }

    /// Reject configurations that cannot be run
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(Error::InvalidConfiguration(
                "window size must be greater than zero".to_string(),
            ));
        }
        if self.step_size == 0 {
            return Err(Error::InvalidConfiguration(
                "step size must be greater than zero".to_string(),
            ));
        }
        if let Some(language_id) = &self.language {
            language_id.parse::<Language>()?;
        } else if self.separators.is_empty() {
            return Err(Error::InvalidConfiguration(
                "separator list is empty; add at least one separator or \"\" to split by character"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SplitterConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.keep_separator);
        assert_eq!(config.output_order, OutputOrder::SourceOrder);
        assert_eq!(config.separators[3], "。");
    }

    #[test]
    fn test_validation_errors() {
        let zero_window = SplitterConfig::default().with_window_size(0);
        assert!(matches!(
            zero_window.validate(),
            Err(Error::InvalidConfiguration(_))
        ));

        let zero_step = SplitterConfig::default().with_step_size(0);
        assert!(matches!(
            zero_step.validate(),
            Err(Error::InvalidConfiguration(_))
        ));

        let no_separators = SplitterConfig::default().with_separators(vec![]);
        assert!(matches!(
            no_separators.validate(),
            Err(Error::InvalidConfiguration(_))
        ));

        // the empty string alone is a valid character-level fallback
        let sentinel_only = SplitterConfig::default().with_separators(vec![String::new()]);
        assert!(sentinel_only.validate().is_ok());
    }

    #[test]
    fn test_language_overrides_separators() {
        let config = SplitterConfig::for_language(Language::Python).with_separators(vec![]);
        assert!(config.validate().is_ok());

        let (separators, is_regex) = config.effective_separators().unwrap();
        assert!(is_regex);
        assert_eq!(separators[0], "\nclass ");
    }

    #[test]
    fn test_from_json() {
        let config = SplitterConfig::from_json(
            r#"{"window_size": 500, "language": "markdown", "output_order": "size_descending"}"#,
        )
        .unwrap();
        assert_eq!(config.window_size, 500);
        assert_eq!(config.step_size, 1);
        assert_eq!(config.language.as_deref(), Some("markdown"));
        assert_eq!(config.output_order, OutputOrder::SizeDescending);

        assert!(matches!(
            SplitterConfig::from_json(r#"{"step_size": 0}"#),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            SplitterConfig::from_json("not json"),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_language_id_resolves_through_profile_lookup() {
        let config = SplitterConfig::from_json(r#"{"language": "javascript"}"#).unwrap();
        let (separators, is_regex) = config.effective_separators().unwrap();
        assert!(is_regex);
        assert_eq!(separators[0], "\nfunction ");

        match SplitterConfig::from_json(r#"{"language": "klingon"}"#) {
            Err(Error::UnsupportedLanguage {
                language,
                supported,
            }) => {
                assert_eq!(language, "klingon");
                assert!(supported.contains(&"js".to_string()));
            }
            other => panic!("expected unsupported language, got {:?}", other),
        }

        let built = SplitterConfig::default().with_language_id("klingon");
        assert!(matches!(
            built.effective_separators(),
            Err(Error::UnsupportedLanguage { .. })
        ));
    }
}
