//! Query matching strategies.
//!
//! A [`Searcher`] turns a raw query string into the set of matching
//! document ids. The default, [`MatchAllTerms`], runs the query through the
//! engine's own tokenizer and normalizer and keeps only the documents that
//! contain every resulting token.

use std::borrow::Cow;

use log::trace;

use crate::error::Result;
use crate::lexical::engine::config::EngineConfig;
use crate::lexical::inverted_index::{DocIdSet, InvertedIndex};
use crate::util::intersect::intersect;

/// Trait for query matching strategies.
///
/// `config` is the configuration the index was built with, so a searcher can
/// analyze the query exactly the way documents were analyzed. The returned
/// set may borrow from `index` when no new set needs to be built.
///
/// Any function `fn(&InvertedIndex, &str, &EngineConfig) -> Result<Cow<DocIdSet>>`
/// is a searcher too.
pub trait Searcher: Send + Sync {
    /// Find the ids of documents matching `term`.
    fn search<'a>(
        &self,
        index: &'a InvertedIndex,
        term: &str,
        config: &EngineConfig,
    ) -> Result<Cow<'a, DocIdSet>>;

    /// Get the name of this searcher (for debugging and configuration).
    fn name(&self) -> &'static str;
}

impl<F> Searcher for F
where
    F: for<'a> Fn(&'a InvertedIndex, &str, &EngineConfig) -> Result<Cow<'a, DocIdSet>>
        + Send
        + Sync,
{
    fn search<'a>(
        &self,
        index: &'a InvertedIndex,
        term: &str,
        config: &EngineConfig,
    ) -> Result<Cow<'a, DocIdSet>> {
        self(index, term, config)
    }

    fn name(&self) -> &'static str {
        "custom"
    }
}

/// AND-of-all-terms matching.
///
/// - An empty query, or an empty index, matches nothing.
/// - A query that analyzes to no tokens matches nothing.
/// - A query token missing from the index empties the whole result.
///
/// Results follow the id order of the first query token's posting set. With
/// [`MatchAllTerms::with_smallest_first`] the posting sets are intersected
/// smallest first instead, which is cheaper for skewed queries but orders
/// results by the rarest token.
///
/// # Examples
///
/// ```
/// use scour::lexical::engine::config::EngineConfig;
/// use scour::lexical::inverted_index::InvertedIndex;
/// use scour::lexical::search::{MatchAllTerms, Searcher};
///
/// let index: InvertedIndex = vec![
///     ("lorem", vec![1_u64, 2, 3]),
///     ("amet", vec![3_u64, 4]),
/// ]
/// .into_iter()
/// .collect();
/// let config = EngineConfig::default();
///
/// let ids = MatchAllTerms::new().search(&index, "Lorem. amet?", &config).unwrap();
/// assert_eq!(ids.len(), 1);
/// assert!(ids.contains("3"));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchAllTerms {
    smallest_first: bool,
}

impl MatchAllTerms {
    /// Create a searcher that intersects in query order.
    pub fn new() -> Self {
        MatchAllTerms {
            smallest_first: false,
        }
    }

    /// Intersect the smallest posting sets first.
    pub fn with_smallest_first(mut self, smallest_first: bool) -> Self {
        self.smallest_first = smallest_first;
        self
    }

    /// Whether posting sets are reordered by size before intersecting.
    pub fn smallest_first(&self) -> bool {
        self.smallest_first
    }
}

impl Searcher for MatchAllTerms {
    fn search<'a>(
        &self,
        index: &'a InvertedIndex,
        term: &str,
        config: &EngineConfig,
    ) -> Result<Cow<'a, DocIdSet>> {
        if term.is_empty() || index.is_empty() {
            return Ok(Cow::Owned(DocIdSet::new()));
        }

        let tokens = config.analyze(term)?;
        let mut matches: Vec<Option<&DocIdSet>> =
            tokens.iter().map(|token| index.get(token)).collect();
        if self.smallest_first {
            matches.sort_by_key(|ids| ids.map_or(0, |ids| ids.len()));
        }

        let ids = intersect(&matches);
        trace!("query {term:?} -> tokens {tokens:?} -> {} ids", ids.len());
        Ok(ids)
    }

    fn name(&self) -> &'static str {
        "match_all_terms"
    }
}
