//! Configuration for the search engine.
//!
//! [`EngineConfig`] bundles the pluggable strategies (identifier, tokenizer,
//! normalizer, searcher) and the list of fields to index. It is built in
//! code with [`EngineConfig::builder`], or from the declarative
//! [`EngineSettings`], which can be loaded from JSON.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::{IdentityNormalizer, LowercaseTrimNormalizer, Normalizer};
use crate::analysis::tokenizer::{PrefixTokenizer, RegexTokenizer, Tokenizer, UnicodeWordTokenizer};
use crate::document::identifier::{IdField, Identifier};
use crate::document::path::PropPath;
use crate::error::{Result, ScourError};
use crate::lexical::search::{MatchAllTerms, Searcher};

/// Strategies and indexed fields for a [`SearchEngine`](super::SearchEngine).
///
/// Every option has a default: documents are identified by their `id` field,
/// text is split into word-character runs, tokens are trimmed and lowercased,
/// queries require all terms, and no fields are indexed.
///
/// # Example
///
/// ```
/// use scour::analysis::tokenizer::PrefixTokenizer;
/// use scour::lexical::engine::config::EngineConfig;
///
/// let config = EngineConfig::builder()
///     .tokenizer(PrefixTokenizer::new())
///     .field("title")
///     .field("author.name")
///     .build();
///
/// assert_eq!(config.fields.len(), 2);
/// assert_eq!(config.tokenizer.name(), "prefix");
/// ```
#[derive(Clone)]
pub struct EngineConfig {
    /// Extracts the id of each document.
    pub identifier: Arc<dyn Identifier>,

    /// Splits field values and queries into tokens.
    pub tokenizer: Arc<dyn Tokenizer>,

    /// Maps each token to its index key.
    pub normalizer: Arc<dyn Normalizer>,

    /// Matches queries against the index.
    pub searcher: Arc<dyn Searcher>,

    /// Fields whose values are indexed.
    pub fields: Vec<PropPath>,
}

impl EngineConfig {
    /// Create a new builder for EngineConfig.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    /// Build a configuration from declarative settings.
    ///
    /// Fails with [`ScourError::Config`] if the identifier field names no key
    /// (no segments, or only empty ones) or the prefix length is zero, and
    /// with [`ScourError::Analysis`] if a regex tokenizer pattern does not
    /// compile.
    pub fn from_settings(settings: &EngineSettings) -> Result<Self> {
        if settings
            .identifier_field
            .segments()
            .iter()
            .all(String::is_empty)
        {
            return Err(ScourError::config("identifier_field must name a field"));
        }

        let tokenizer: Arc<dyn Tokenizer> = match &settings.tokenizer {
            TokenizerSettings::FullWord => Arc::new(RegexTokenizer::new()),
            TokenizerSettings::Prefix { min_length: 0 } => {
                return Err(ScourError::config("prefix min_length must be at least 1"));
            }
            TokenizerSettings::Prefix { min_length } => {
                Arc::new(PrefixTokenizer::new().with_min_length(*min_length))
            }
            TokenizerSettings::UnicodeWord => Arc::new(UnicodeWordTokenizer::new()),
            TokenizerSettings::Regex { pattern } => Arc::new(RegexTokenizer::with_pattern(pattern)?),
        };
        let normalizer: Arc<dyn Normalizer> = match settings.normalizer {
            NormalizerSettings::LowercaseTrim => Arc::new(LowercaseTrimNormalizer::new()),
            NormalizerSettings::Identity => Arc::new(IdentityNormalizer::new()),
        };

        Ok(EngineConfig {
            identifier: Arc::new(IdField::new(settings.identifier_field.clone())),
            tokenizer,
            normalizer,
            searcher: Arc::new(MatchAllTerms::new().with_smallest_first(settings.smallest_first)),
            fields: settings.fields.clone(),
        })
    }

    /// Tokenize `text` and normalize every token.
    ///
    /// Documents and queries both go through this, which is what makes a
    /// query token line up with an index key.
    pub fn analyze(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .tokenizer
            .tokenize(text)?
            .map(|token| self.normalizer.normalize(&token.text))
            .collect())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfigBuilder::new().build()
    }
}

impl TryFrom<EngineSettings> for EngineConfig {
    type Error = ScourError;

    fn try_from(settings: EngineSettings) -> Result<Self> {
        EngineConfig::from_settings(&settings)
    }
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("identifier", &self.identifier.name())
            .field("tokenizer", &self.tokenizer.name())
            .field("normalizer", &self.normalizer.name())
            .field("searcher", &self.searcher.name())
            .field("fields", &self.fields)
            .finish()
    }
}

/// Builder for EngineConfig.
///
/// Options that are never set fall back to the defaults described on
/// [`EngineConfig`].
#[derive(Default)]
pub struct EngineConfigBuilder {
    identifier: Option<Arc<dyn Identifier>>,
    tokenizer: Option<Arc<dyn Tokenizer>>,
    normalizer: Option<Arc<dyn Normalizer>>,
    searcher: Option<Arc<dyn Searcher>>,
    fields: Vec<PropPath>,
}

impl EngineConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier strategy.
    pub fn identifier<I: Identifier + 'static>(mut self, identifier: I) -> Self {
        self.identifier = Some(Arc::new(identifier));
        self
    }

    /// Set the tokenizer.
    pub fn tokenizer<T: Tokenizer + 'static>(mut self, tokenizer: T) -> Self {
        self.tokenizer = Some(Arc::new(tokenizer));
        self
    }

    /// Set the normalizer.
    pub fn normalizer<N: Normalizer + 'static>(mut self, normalizer: N) -> Self {
        self.normalizer = Some(Arc::new(normalizer));
        self
    }

    /// Set the searcher.
    pub fn searcher<S: Searcher + 'static>(mut self, searcher: S) -> Self {
        self.searcher = Some(Arc::new(searcher));
        self
    }

    /// Index one more field.
    pub fn field<P: Into<PropPath>>(mut self, path: P) -> Self {
        self.fields.push(path.into());
        self
    }

    /// Replace the list of indexed fields.
    pub fn fields<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PropPath>,
    {
        self.fields = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Build the EngineConfig.
    pub fn build(self) -> EngineConfig {
        EngineConfig {
            identifier: self
                .identifier
                .unwrap_or_else(|| Arc::new(IdField::default())),
            tokenizer: self
                .tokenizer
                .unwrap_or_else(|| Arc::new(RegexTokenizer::new())),
            normalizer: self
                .normalizer
                .unwrap_or_else(|| Arc::new(LowercaseTrimNormalizer::new())),
            searcher: self
                .searcher
                .unwrap_or_else(|| Arc::new(MatchAllTerms::new())),
            fields: self.fields,
        }
    }
}

/// Declarative engine configuration.
///
/// Unlike [`EngineConfig`], settings only name built-in strategies and can be
/// stored as JSON. Missing keys take their defaults.
///
/// ```
/// use scour::lexical::engine::config::{EngineSettings, TokenizerSettings};
///
/// let settings = EngineSettings::from_json(r#"{
///     "identifier_field": "slug",
///     "fields": ["title", ["tags", 0]],
///     "tokenizer": { "type": "prefix", "min_length": 2 }
/// }"#).unwrap();
///
/// assert_eq!(settings.tokenizer, TokenizerSettings::Prefix { min_length: 2 });
/// assert_eq!(settings.fields[1].to_string(), "tags.0");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Field holding each document's id.
    pub identifier_field: PropPath,

    /// Fields whose values are indexed.
    pub fields: Vec<PropPath>,

    /// Built-in tokenizer to use.
    pub tokenizer: TokenizerSettings,

    /// Built-in normalizer to use.
    pub normalizer: NormalizerSettings,

    /// Intersect the smallest posting sets first when matching.
    pub smallest_first: bool,
}

impl EngineSettings {
    /// Parse settings from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            identifier_field: PropPath::parse("id"),
            fields: Vec::new(),
            tokenizer: TokenizerSettings::default(),
            normalizer: NormalizerSettings::default(),
            smallest_first: false,
        }
    }
}

/// Built-in tokenizers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenizerSettings {
    /// Runs of word characters.
    #[default]
    FullWord,
    /// Every prefix of every word.
    Prefix {
        /// Shortest prefix to emit, in characters.
        #[serde(default = "default_min_length")]
        min_length: usize,
    },
    /// Unicode word boundaries.
    UnicodeWord,
    /// Every match of a custom pattern.
    Regex {
        /// The regex pattern.
        pattern: String,
    },
}

fn default_min_length() -> usize {
    1
}

/// Built-in normalizers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizerSettings {
    /// Trim and lowercase.
    #[default]
    LowercaseTrim,
    /// Keep tokens as they are.
    Identity,
}
