//! Prefix tokenizer for search-as-you-type.
//!
//! Indexing every prefix of every word lets the regular AND-of-terms matcher
//! answer partial queries: with this tokenizer configured, the query `"do"`
//! matches a document containing `"dog"`.
//!
//! # Examples
//!
//! ```
//! use scour::analysis::tokenizer::Tokenizer;
//! use scour::analysis::tokenizer::prefix::PrefixTokenizer;
//!
//! let tokenizer = PrefixTokenizer::new();
//! let prefixes: Vec<_> = tokenizer.tokenize("dog").unwrap().map(|t| t.text).collect();
//! assert_eq!(prefixes, vec!["d", "do", "dog"]);
//! ```

use ahash::AHashSet;

use super::Tokenizer;
use super::regex::RegexTokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that emits every non-empty prefix of every word.
///
/// Words are found with a [`RegexTokenizer`] (word characters by default).
/// Prefixes are cut on `char` boundaries and deduplicated across the whole
/// input, in first-seen order.
#[derive(Clone, Debug)]
pub struct PrefixTokenizer {
    words: RegexTokenizer,
    min_length: usize,
}

impl PrefixTokenizer {
    /// Create a prefix tokenizer over word-character runs.
    pub fn new() -> Self {
        PrefixTokenizer {
            words: RegexTokenizer::new(),
            min_length: 1,
        }
    }

    /// Use a different tokenizer to find the words to expand.
    pub fn with_word_tokenizer(mut self, words: RegexTokenizer) -> Self {
        self.words = words;
        self
    }

    /// Skip prefixes shorter than `min_length` characters.
    ///
    /// Words shorter than `min_length` are still emitted whole.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length.max(1);
        self
    }

    /// Minimum prefix length in characters.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Default for PrefixTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for PrefixTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut seen = AHashSet::new();
        let mut tokens = Vec::new();

        for word in self.words.tokenize(text)? {
            if word.text.is_empty() {
                continue;
            }
            let ends: Vec<usize> = word
                .text
                .char_indices()
                .skip(1)
                .map(|(idx, _)| idx)
                .chain(std::iter::once(word.text.len()))
                .collect();
            let first = self.min_length.min(ends.len()).saturating_sub(1);

            for &end in &ends[first..] {
                let prefix = &word.text[..end];
                if seen.insert(prefix.to_string()) {
                    let span = word.span.start..word.span.start + end;
                    tokens.push(Token::at(prefix, tokens.len(), span));
                }
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "prefix"
    }
}
