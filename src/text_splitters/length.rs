use regex::Regex;
use std::sync::LazyLock;

/// Measures the rendered size of a piece of text.
///
/// Any `Fn(&str) -> usize` closure is a length function, so a tokenizer can be
/// plugged in without a wrapper type.
pub trait LengthFunction: Send + Sync {
    /// Size of the given text
    fn length(&self, text: &str) -> usize;
}

impl<F> LengthFunction for F
where
    F: Fn(&str) -> usize + Send + Sync,
{
    fn length(&self, text: &str) -> usize {
        self(text)
    }
}

/// Counts Unicode scalar values
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterLength;

impl LengthFunction for CharacterLength {
    fn length(&self, text: &str) -> usize {
        text.chars().count()
    }
}

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+|[^\w\s]").expect("token pattern is valid"));

/// Approximate token count: each run of word characters and each punctuation mark is one token
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenLength;

impl LengthFunction for TokenLength {
    fn length(&self, text: &str) -> usize {
        TOKEN_REGEX.find_iter(text).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_length_counts_chars_not_bytes() {
        assert_eq!(CharacterLength.length("héllo"), 5);
        assert_eq!(CharacterLength.length("郗鉴"), 2);
        assert_eq!(CharacterLength.length(""), 0);
    }

    #[test]
    fn test_token_length() {
        assert_eq!(TokenLength.length("Hello, world!"), 4);
        assert_eq!(TokenLength.length("   "), 0);
        assert_eq!(TokenLength.length("fn main() {}"), 6);
    }

    #[test]
    fn test_closure_is_length_function() {
        let bytes = |text: &str| text.len();
        assert_eq!(bytes.length("héllo"), 6);
    }
}
