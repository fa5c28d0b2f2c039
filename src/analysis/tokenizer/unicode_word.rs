//! Word segmentation by UAX #29 boundaries.
//!
//! Where the `\w+` pattern cuts at every non-word character, UAX #29 keeps
//! in-word punctuation attached: `"can't"` and `"3.14"` are single tokens.
//!
//! ```
//! use scour::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
//!
//! let words: Vec<String> = UnicodeWordTokenizer::new()
//!     .tokenize("Don't panic, it's 3.14!")
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//!
//! assert_eq!(words, vec!["Don't", "panic", "it's", "3.14"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Emits the word segments of the text, skipping whitespace, punctuation and
/// symbol-only segments.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let words: Vec<Token> = text
            .split_word_bound_indices()
            .filter(|(_, segment)| is_word(segment))
            .enumerate()
            .map(|(position, (start, segment))| {
                Token::at(segment, position, start..start + segment.len())
            })
            .collect();

        Ok(Box::new(words.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        UnicodeWordTokenizer::new()
            .tokenize(text)
            .unwrap()
            .map(Token::into_text)
            .collect()
    }

    #[test]
    fn test_drops_punctuation_and_emoji() {
        assert_eq!(words("hello🌎world, again!"), vec!["hello", "world", "again"]);
        assert!(words(" &*(@ ").is_empty());
        assert!(words("").is_empty());
    }

    #[test]
    fn test_in_word_punctuation() {
        assert_eq!(words("can't stop"), vec!["can't", "stop"]);
        assert_eq!(words("pi is 3.14"), vec!["pi", "is", "3.14"]);
    }

    #[test]
    fn test_spans_and_positions() {
        let tokens: Vec<Token> = UnicodeWordTokenizer::new()
            .tokenize("lorem, ipsum")
            .unwrap()
            .collect();

        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].span, 7..12);
    }
}
