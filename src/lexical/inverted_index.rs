//! In-memory inverted index.
//!
//! Maps each normalized token to the set of ids of the documents that
//! produced it. Posting sets are [`OrderedSet`]s, so lookups are hash-based
//! while iteration follows the order documents were indexed in.

use ahash::AHashMap;

use crate::document::DocId;
use crate::lexical::dump::IndexDump;
use crate::util::ordered_set::OrderedSet;

/// Set of document ids stored under one token.
pub type DocIdSet = OrderedSet<DocId>;

/// Token -> document id set.
///
/// # Examples
///
/// ```
/// use scour::document::DocId;
/// use scour::lexical::inverted_index::InvertedIndex;
///
/// let mut index = InvertedIndex::new();
/// index.insert("lorem", DocId::from("1"));
/// index.insert("lorem", DocId::from("2"));
/// index.insert("lorem", DocId::from("1"));
///
/// assert_eq!(index.len(), 1);
/// assert_eq!(index.get("lorem").unwrap().len(), 2);
/// assert!(index.get("ipsum").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct InvertedIndex {
    postings: AHashMap<String, DocIdSet>,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        InvertedIndex {
            postings: AHashMap::new(),
        }
    }

    /// Record that document `id` contains `token`.
    ///
    /// Returns `false` if the pair was already present.
    pub fn insert<S: Into<String>>(&mut self, token: S, id: DocId) -> bool {
        self.postings.entry(token.into()).or_default().insert(id)
    }

    /// Get the ids of documents containing `token`.
    pub fn get(&self, token: &str) -> Option<&DocIdSet> {
        self.postings.get(token)
    }

    /// Check whether any document produced `token`.
    pub fn contains_term(&self, token: &str) -> bool {
        self.postings.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Check if the index has no tokens.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Iterate over all tokens, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Iterate over `(token, ids)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocIdSet)> {
        self.postings
            .iter()
            .map(|(token, ids)| (token.as_str(), ids))
    }

    /// Take a snapshot of the index in its serializable form.
    pub fn dump(&self) -> IndexDump {
        self.iter()
            .map(|(token, ids)| (token.to_string(), ids.to_vec()))
            .collect()
    }

    /// Rebuild an index from a dump. Duplicate ids under a token collapse.
    pub fn from_dump(dump: IndexDump) -> Self {
        dump.into_iter().collect()
    }
}

impl From<IndexDump> for InvertedIndex {
    fn from(dump: IndexDump) -> Self {
        InvertedIndex::from_dump(dump)
    }
}

impl<K, I> FromIterator<(K, I)> for InvertedIndex
where
    K: Into<String>,
    I: IntoIterator,
    I::Item: Into<DocId>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut index = InvertedIndex::new();
        for (token, ids) in iter {
            let set = index.postings.entry(token.into()).or_default();
            set.extend(ids.into_iter().map(Into::into));
        }
        index
    }
}
