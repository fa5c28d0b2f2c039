//! Document identifier strategies.
//!
//! An [`Identifier`] extracts the [`DocId`] a document is stored under. The
//! default reads the `id` field; [`IdField`] can read any (nested) field, and
//! any closure `Fn(&Document) -> Result<DocId>` works too.

use crate::document::path::PropPath;
use crate::document::value::scalar_text;
use crate::document::{DocId, Document};
use crate::error::{Result, ScourError};

/// Trait for strategies that assign ids to documents.
///
/// Ids must be stable: the same document must always produce the same id,
/// since `hydrate` re-runs the identifier to rebuild the document store.
pub trait Identifier: Send + Sync {
    /// Compute the id of `document`.
    fn identify(&self, document: &Document) -> Result<DocId>;

    /// Get the name of this identifier (for debugging and configuration).
    fn name(&self) -> &'static str;
}

impl<F> Identifier for F
where
    F: Fn(&Document) -> Result<DocId> + Send + Sync,
{
    fn identify(&self, document: &Document) -> Result<DocId> {
        self(document)
    }

    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Identifies documents by the value of a field.
///
/// String values are used as-is; numbers and booleans are stringified. A
/// missing field, `null`, an array or an object is an
/// [`ScourError::Identifier`] error.
///
/// # Examples
///
/// ```
/// use scour::document::identifier::{IdField, Identifier};
/// use serde_json::json;
///
/// let identifier = IdField::new("prop2");
/// let id = identifier.identify(&json!({ "prop1": "a", "prop2": "b" })).unwrap();
/// assert_eq!(id.as_str(), "b");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct IdField {
    path: PropPath,
}

impl IdField {
    /// Identify documents by the field at `path`.
    pub fn new<P: Into<PropPath>>(path: P) -> Self {
        IdField { path: path.into() }
    }

    /// The field path read by this identifier.
    pub fn path(&self) -> &PropPath {
        &self.path
    }
}

impl Default for IdField {
    fn default() -> Self {
        IdField::new("id")
    }
}

impl Identifier for IdField {
    fn identify(&self, document: &Document) -> Result<DocId> {
        self.path
            .resolve(document)
            .and_then(scalar_text)
            .map(DocId::from)
            .ok_or_else(|| {
                ScourError::identifier(format!(
                    "document has no string, number or boolean at `{}`",
                    self.path
                ))
            })
    }

    fn name(&self) -> &'static str {
        "id_field"
    }
}

/// Shorthand for [`IdField::new`].
pub fn id_prop<P: Into<PropPath>>(path: P) -> IdField {
    IdField::new(path)
}
