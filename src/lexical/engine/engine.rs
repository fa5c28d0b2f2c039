//! High-level search engine that combines indexing and searching.
//!
//! This module provides the core `SearchEngine` implementation.

use std::borrow::Cow;

use ahash::AHashMap;
use log::debug;

use crate::document::{DocId, Document, value_text};
use crate::error::Result;
use crate::lexical::dump::IndexDump;
use crate::lexical::engine::config::EngineConfig;
use crate::lexical::inverted_index::{DocIdSet, InvertedIndex};

/// An in-memory search engine over JSON documents.
///
/// The `SearchEngine` owns an [`InvertedIndex`] and a store of the documents
/// it was given, keyed by id. Documents are analyzed with the strategies of
/// its [`EngineConfig`], and queries are answered by the configured searcher.
///
/// # Usage Example
///
/// ```rust
/// use scour::lexical::engine::SearchEngine;
/// use scour::lexical::engine::config::EngineConfig;
/// use serde_json::json;
///
/// let config = EngineConfig::builder().field("text").build();
/// let mut engine = SearchEngine::new(config);
///
/// engine.add(vec![
///     json!({ "id": 1, "text": "Lorem ipsum dolor" }),
///     json!({ "id": 2, "text": "Dolor sit amet" }),
/// ]).unwrap();
///
/// let hits = engine.search("dolor amet").unwrap();
/// assert_eq!(hits, vec![&json!({ "id": 2, "text": "Dolor sit amet" })]);
/// ```
///
/// # Re-adding documents
///
/// Adding a document whose id is already stored replaces the stored
/// document, but the tokens of the previous version stay in the index. A
/// query matching only the old text still returns the new document.
#[derive(Debug, Default)]
pub struct SearchEngine {
    config: EngineConfig,
    index: InvertedIndex,
    documents: AHashMap<DocId, Document>,
}

impl SearchEngine {
    /// Create an empty engine.
    pub fn new(config: EngineConfig) -> Self {
        SearchEngine::with_index(config, InvertedIndex::new())
    }

    /// Create an engine over an existing index, with an empty document store.
    ///
    /// Useful when only ids are needed: [`SearchEngine::search_ids`] works
    /// without any stored documents.
    pub fn with_index(config: EngineConfig, index: InvertedIndex) -> Self {
        SearchEngine {
            config,
            index,
            documents: AHashMap::new(),
        }
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the inverted index.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if no documents are stored.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Get a stored document by id.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.get(id)
    }

    /// Index and store documents.
    ///
    /// Stops at the first document the identifier rejects. Documents before
    /// it stay indexed and stored.
    pub fn add<I>(&mut self, documents: I) -> Result<()>
    where
        I: IntoIterator<Item = Document>,
    {
        let mut added = 0;
        for document in documents {
            let id = self.config.identifier.identify(&document)?;
            self.index_document(&id, &document)?;
            self.documents.insert(id, document);
            added += 1;
        }

        debug!(
            "added {added} documents ({} stored, {} tokens)",
            self.documents.len(),
            self.index.len()
        );
        Ok(())
    }

    fn index_document(&mut self, id: &DocId, document: &Document) -> Result<()> {
        for path in &self.config.fields {
            let Some(text) = path.resolve(document).and_then(value_text) else {
                continue;
            };
            for token in self.config.analyze(&text)? {
                self.index.insert(token, id.clone());
            }
        }
        Ok(())
    }

    /// Find the documents matching `term`.
    ///
    /// Ids without a stored document (for instance, from an index loaded
    /// with [`SearchEngine::with_index`]) are left out.
    pub fn search(&self, term: &str) -> Result<Vec<&Document>> {
        let ids = self.search_ids(term)?;
        Ok(ids.iter().filter_map(|id| self.documents.get(id)).collect())
    }

    /// Find the ids of the documents matching `term`.
    pub fn search_ids(&self, term: &str) -> Result<Cow<'_, DocIdSet>> {
        self.config.searcher.search(&self.index, term, &self.config)
    }

    /// Take a serializable snapshot of the index.
    pub fn dump(&self) -> IndexDump {
        let dump = self.index.dump();
        debug!("dumped {} tokens", dump.len());
        dump
    }

    /// Replace the index and the document store.
    ///
    /// The index is taken from `dump` as-is; documents are not re-analyzed.
    /// The store is rebuilt by identifying each of `documents`. If any
    /// document cannot be identified the engine is left unchanged.
    pub fn hydrate<I>(&mut self, dump: IndexDump, documents: I) -> Result<()>
    where
        I: IntoIterator<Item = Document>,
    {
        let mut store = AHashMap::new();
        for document in documents {
            let id = self.config.identifier.identify(&document)?;
            store.insert(id, document);
        }

        self.index = InvertedIndex::from_dump(dump);
        self.documents = store;
        debug!(
            "hydrated {} tokens and {} documents",
            self.index.len(),
            self.documents.len()
        );
        Ok(())
    }
}
