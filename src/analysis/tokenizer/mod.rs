//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split a field value (or a query string) into raw tokens. The
//! same tokenizer runs at index time and at query time, so whatever it emits
//! defines what a query can match.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Emits every match of a regex (`\w+` by default)
//! - [`prefix::PrefixTokenizer`] - Emits every prefix of every word, for search-as-you-type
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries (UAX #29)
//!
//! Any closure `Fn(&str) -> Result<Vec<String>>` is a tokenizer as well.
//!
//! # Examples
//!
//! ```
//! use scour::analysis::tokenizer::Tokenizer;
//! use scour::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::default();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::{IntoTokenStream, TokenStream};
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so an engine holding tokenizers can be
/// shared behind a lock.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use scour::analysis::token::{Token, TokenStream};
/// use scour::analysis::tokenizer::Tokenizer;
/// use scour::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<TokenStream> {
///         let tokens: Vec<Token> = text
///             .split(',')
///             .enumerate()
///             .map(|(i, s)| Token::new(s.trim(), i))
///             .collect();
///         Ok(Box::new(tokens.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Result<Vec<String>> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(self(text)?.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "custom"
    }
}

// Individual tokenizer modules
pub mod prefix;
pub mod regex;
pub mod unicode_word;

// Re-export all tokenizers for convenient access
pub use prefix::PrefixTokenizer;
pub use self::regex::{RegexTokenizer, full_word_split};
pub use unicode_word::UnicodeWordTokenizer;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_closure_tokenizer() {
        let tokenizer = |text: &str| -> Result<Vec<String>> {
            Ok(text.split('|').map(str::to_string).collect())
        };
        let tokens: Vec<Token> = tokenizer.tokenize("a|b|c").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].text, "c");
        assert_eq!(tokens[2].position, 2);
        assert_eq!(Tokenizer::name(&tokenizer), "custom");
    }

    #[test]
    fn test_closure_tokenizer_error_propagates() {
        let tokenizer = |_: &str| -> Result<Vec<String>> {
            Err(crate::error::ScourError::analysis("boom"))
        };

        assert!(tokenizer.tokenize("anything").is_err());
    }
}
