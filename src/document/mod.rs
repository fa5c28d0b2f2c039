//! Document model.
//!
//! Documents are externally owned JSON records ([`serde_json::Value`]) of any
//! shape. The engine reads configured fields out of them and assigns each an
//! id, but never mutates them.

pub mod doc_id;
pub mod identifier;
pub mod path;
pub mod value;

/// A document: an arbitrarily nested JSON record.
pub type Document = serde_json::Value;

// Re-export commonly used types
pub use doc_id::DocId;
pub use identifier::{IdField, Identifier, id_prop};
pub use path::{PropPath, unwrap};
pub use value::value_text;
