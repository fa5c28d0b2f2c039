//! Document identifiers.

use std::borrow::Borrow;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::document::value::scalar_text;

/// A string identifying one document within one engine.
///
/// Uniqueness is up to the caller: adding a second document with the same id
/// replaces the stored document. Serializes as a plain JSON string, and
/// deserializes from a string, number or boolean, stringified the same way
/// [`IdField`](crate::document::IdField) stringifies id fields.
///
/// # Examples
///
/// ```
/// use scour::document::DocId;
///
/// let id = DocId::from("42");
/// assert_eq!(id.as_str(), "42");
/// assert_eq!(DocId::from(42_u64), id);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    /// Create a new document id.
    pub fn new<S: Into<String>>(id: S) -> Self {
        DocId(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for DocId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        scalar_text(&value).map(DocId).ok_or_else(|| {
            D::Error::custom(format!(
                "invalid document id `{value}`, expected a string, number or boolean"
            ))
        })
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        DocId(id.to_string())
    }
}

impl From<String> for DocId {
    fn from(id: String) -> Self {
        DocId(id)
    }
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        DocId(id.to_string())
    }
}

impl Borrow<str> for DocId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_id_conversions() {
        assert_eq!(DocId::new("a").as_str(), "a");
        assert_eq!(DocId::from(String::from("b")).into_inner(), "b");
        assert_eq!(DocId::from(7_u64).to_string(), "7");
    }

    #[test]
    fn test_doc_id_serializes_as_string() {
        let json = serde_json::to_string(&DocId::from("doc-1")).unwrap();
        assert_eq!(json, r#""doc-1""#);

        let id: DocId = serde_json::from_str(r#""doc-2""#).unwrap();
        assert_eq!(id, DocId::from("doc-2"));
    }

    #[test]
    fn test_doc_id_deserializes_from_scalars() {
        let ids: Vec<DocId> = serde_json::from_str(r#"[1, "2", 3.0, true]"#).unwrap();
        assert_eq!(
            ids,
            vec![
                DocId::from("1"),
                DocId::from("2"),
                DocId::from("3"),
                DocId::from("true")
            ]
        );

        assert!(serde_json::from_str::<DocId>("null").is_err());
        assert!(serde_json::from_str::<DocId>(r#"{"id": 1}"#).is_err());
        assert!(serde_json::from_str::<DocId>("[1]").is_err());
    }
}
