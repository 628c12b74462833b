use thiserror::Error;

/// Error type for the chunking engine
#[derive(Error, Debug)]
pub enum Error {
    /// No separator profile exists for the requested language identifier
    #[error("Unsupported language: {language:?}. Supported languages: {}", .supported.join(", "))]
    UnsupportedLanguage {
        /// The identifier that failed to resolve
        language: String,
        /// Every identifier the profile table knows about
        supported: Vec<String>,
    },

    /// The splitter was configured with values it cannot work with
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A separator could not be compiled into a pattern
    #[error("Invalid separator pattern {pattern:?}: {source}")]
    Pattern {
        /// The separator as given by the caller
        pattern: String,
        /// The underlying regex error
        source: regex::Error,
    },

    /// JSON serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
