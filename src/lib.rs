//! # Scour
//!
//! A small in-memory full-text search library for JSON documents.
//!
//! ## Features
//!
//! - Index any fields of arbitrarily nested `serde_json::Value` documents
//! - AND-of-all-terms queries over an inverted index
//! - Pluggable identifier, tokenizer, normalizer and searcher strategies
//! - Prefix tokenization for search-as-you-type
//! - JSON index dumps that can be stored and hydrated later
//!
//! ## Example
//!
//! ```
//! use scour::{EngineConfig, SearchEngine};
//! use serde_json::json;
//!
//! let mut engine = SearchEngine::new(EngineConfig::builder().field("title").build());
//! engine.add(vec![
//!     json!({ "id": "a", "title": "The quick brown fox" }),
//!     json!({ "id": "b", "title": "A quick brown dog" }),
//! ]).unwrap();
//!
//! assert_eq!(engine.search("quick fox").unwrap().len(), 1);
//! assert_eq!(engine.search("brown").unwrap().len(), 2);
//! ```

pub mod analysis;
pub mod document;
pub mod error;
pub mod lexical;
pub mod util;

pub use document::{DocId, Document, PropPath};
pub use error::{Result, ScourError};
pub use lexical::{EngineConfig, EngineSettings, IndexDump, InvertedIndex, SearchEngine};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
