//! Lexical search over an in-memory inverted index.
//!
//! Documents are indexed by the tokens of their configured fields, and
//! queries match the documents that contain every query token.

pub mod dump;
pub mod engine;
pub mod inverted_index;
pub mod search;

// Re-export commonly used types
pub use dump::IndexDump;
pub use engine::{EngineConfig, EngineConfigBuilder, EngineSettings, SearchEngine};
pub use inverted_index::{DocIdSet, InvertedIndex};
pub use search::{MatchAllTerms, Searcher};
