//! Regex-based tokenizer implementation.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, ScourError};

/// Pattern for runs of word characters: letters, digits and underscore.
pub const WORD_PATTERN: &str = r"\w+";

static WORD_REGEX: LazyLock<Arc<Regex>> =
    LazyLock::new(|| Arc::new(Regex::new(WORD_PATTERN).expect("word pattern is valid")));

/// A tokenizer that emits every match of a regular expression.
///
/// Text between matches (whitespace, punctuation, symbols, emoji) is
/// discarded. The default pattern is [`WORD_PATTERN`], which splits text into
/// maximal runs of word characters.
///
/// # Examples
///
/// ```
/// use scour::analysis::tokenizer::Tokenizer;
/// use scour::analysis::tokenizer::regex::RegexTokenizer;
///
/// let tokenizer = RegexTokenizer::with_pattern(r"[a-z]+").unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("abc123def").unwrap().map(|t| t.text).collect();
/// assert_eq!(tokens, vec!["abc", "def"]);
/// ```
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a tokenizer that splits on word boundaries.
    pub fn new() -> Self {
        RegexTokenizer {
            pattern: Arc::clone(&WORD_REGEX),
        }
    }

    /// Create a tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| ScourError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Return the text of every match, in order.
    pub fn split(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|mat| mat.as_str().to_string())
            .collect()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| Token::at(mat.as_str(), position, mat.range()))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

/// Split text into runs of word characters.
///
/// ```
/// use scour::analysis::tokenizer::full_word_split;
///
/// assert_eq!(full_word_split("he11o-world"), vec!["he11o", "world"]);
/// assert!(full_word_split("").is_empty());
/// ```
pub fn full_word_split(text: &str) -> Vec<String> {
    WORD_REGEX
        .find_iter(text)
        .map(|mat| mat.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        RegexTokenizer::new()
            .tokenize(text)
            .unwrap()
            .map(Token::into_text)
            .collect()
    }

    #[test]
    fn test_regex_tokenizer_spans() {
        let tokenizer = RegexTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].span, 0..5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].span, 6..11);
    }

    #[test]
    fn test_word_split_cases() {
        assert_eq!(texts("hello world"), vec!["hello", "world"]);
        assert_eq!(texts("hello 1234 world&*(@"), vec!["hello", "1234", "world"]);
        assert_eq!(texts("he11o-world"), vec!["he11o", "world"]);
        assert_eq!(texts("hello_world"), vec!["hello_world"]);
        assert_eq!(texts("hello🌎world"), vec!["hello", "world"]);
        assert_eq!(
            texts("*some markdown* [text](#)"),
            vec!["some", "markdown", "text"]
        );
        assert_eq!(texts(":emoji_code:"), vec!["emoji_code"]);
        assert_eq!(
            texts("Lorem ipsum. dolor, sit amet,  "),
            vec!["Lorem", "ipsum", "dolor", "sit", "amet"]
        );
    }

    #[test]
    fn test_word_split_nothing_to_match() {
        assert!(texts("").is_empty());
        assert!(texts("&*(@").is_empty());
        assert!(full_word_split("   ").is_empty());
    }

    #[test]
    fn test_custom_pattern() {
        let tokenizer = RegexTokenizer::with_pattern(r"[^,]+").unwrap();
        assert_eq!(tokenizer.split("a b,c"), vec!["a b", "c"]);
        assert_eq!(tokenizer.pattern(), "[^,]+");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RegexTokenizer::with_pattern("(unclosed").unwrap_err();
        assert!(matches!(err, ScourError::Analysis(_)));
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().name(), "regex");
    }
}
