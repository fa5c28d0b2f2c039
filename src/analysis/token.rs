//! Tokens emitted by tokenizers.
//!
//! Only a token's `text` becomes an index key, after normalization. The
//! position and byte span let custom strategies relate a token back to the
//! string it was cut from.
//!
//! ```
//! use scour::analysis::token::Token;
//!
//! let source = "hello world";
//! let token = Token::at("world", 1, 6..11);
//! assert_eq!(&source[token.span.clone()], token.text);
//! ```

use std::fmt;
use std::ops::Range;

/// One unit of text cut from a field value or a query.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token text, before normalization.
    pub text: String,

    /// Index of the token in its stream.
    pub position: usize,

    /// Byte range of the token in the source text. Empty when the token was
    /// not cut directly from a source string.
    pub span: Range<usize>,
}

impl Token {
    /// A token with no known source span.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token::at(text, position, 0..0)
    }

    /// A token cut from `span` of the source text.
    pub fn at<S: Into<String>>(text: S, position: usize, span: Range<usize>) -> Self {
        Token {
            text: text.into(),
            position,
            span,
        }
    }

    /// Consume the token, keeping only its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.text
    }
}

/// Boxed iterator of tokens, as returned by every tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Conversion into a [`TokenStream`].
pub trait IntoTokenStream {
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}

/// Plain strings are numbered in order and get no span.
impl IntoTokenStream for Vec<String> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(
            self.into_iter()
                .enumerate()
                .map(|(position, text)| Token::new(text, position)),
        )
    }
}
