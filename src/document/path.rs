//! Field paths and nested field lookup.
//!
//! A [`PropPath`] names a possibly nested field inside a JSON document,
//! either as a dot string (`"author.name"`) or as an explicit list of
//! segments. [`unwrap`] walks a document along a path.
//!
//! # Examples
//!
//! ```
//! use scour::document::path::{PropPath, unwrap};
//! use serde_json::json;
//!
//! let doc = json!({ "a": { "b": "v" } });
//!
//! assert_eq!(unwrap(&doc, &PropPath::parse("a.b")), Some(&json!("v")));
//! assert_eq!(unwrap(&doc, &PropPath::from(["a", "b"])), Some(&json!("v")));
//! assert_eq!(unwrap(&doc, &PropPath::parse("a.missing.x")), None);
//! ```

use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Path to a field inside a nested document.
///
/// Every segment is a plain string key. Numeric-looking segments are not
/// special: `"items.0"` and `PropPath::new().key("items").key(0)` are the
/// same path, and both index into a JSON array or look up the `"0"` key of a
/// JSON object, whichever the document holds at that point.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PropPath {
    segments: Vec<String>,
}

impl PropPath {
    /// Create an empty path, to be extended with [`PropPath::key`].
    pub fn new() -> Self {
        PropPath {
            segments: Vec::new(),
        }
    }

    /// Parse a dot-separated path such as `"nested.deep.2.deeper"`.
    pub fn parse(dotted: &str) -> Self {
        PropPath {
            segments: dotted.split('.').map(str::to_string).collect(),
        }
    }

    /// Build a path from explicit segments. Dots inside a segment are kept.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        PropPath {
            segments: segments.into_iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Append one segment.
    pub fn key<S: ToString>(mut self, segment: S) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// The path segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Check if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Resolve this path against a document. See [`unwrap`].
    pub fn resolve<'a>(&self, document: &'a Value) -> Option<&'a Value> {
        unwrap(document, self)
    }
}

/// Read a possibly nested value out of `document`.
///
/// Descends one segment at a time. Returns `None` as soon as the current
/// value is `null`, is not an object or array, or lacks the segment. Array
/// segments must be a canonical decimal index (`"2"`, not `"02"`). An
/// explicit `null` at the end of the path is returned as `Some(&Value::Null)`.
/// An empty path returns the document itself.
pub fn unwrap<'a>(document: &'a Value, path: &PropPath) -> Option<&'a Value> {
    let mut current = document;

    for segment in &path.segments {
        current = match current {
            Value::Object(map) => map.get(segment.as_str())?,
            Value::Array(items) => items.get(array_index(segment)?)?,
            _ => return None,
        };
    }

    Some(current)
}

fn array_index(segment: &str) -> Option<usize> {
    let index: usize = segment.parse().ok()?;
    (index.to_string() == segment).then_some(index)
}

impl fmt::Display for PropPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl From<&str> for PropPath {
    fn from(dotted: &str) -> Self {
        PropPath::parse(dotted)
    }
}

impl From<String> for PropPath {
    fn from(dotted: String) -> Self {
        PropPath::parse(&dotted)
    }
}

impl<S: ToString> From<Vec<S>> for PropPath {
    fn from(segments: Vec<S>) -> Self {
        PropPath::from_segments(segments)
    }
}

impl<S: ToString, const N: usize> From<[S; N]> for PropPath {
    fn from(segments: [S; N]) -> Self {
        PropPath::from_segments(segments)
    }
}

/// Serialized form: a dot string, or a list of string/integer segments.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPath {
    Dotted(String),
    Segments(Vec<RawSegment>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSegment {
    Key(String),
    Index(u64),
}

impl Serialize for PropPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.segments.iter().any(|segment| segment.contains('.')) {
            serializer.collect_seq(&self.segments)
        } else {
            serializer.serialize_str(&self.to_string())
        }
    }
}

impl<'de> Deserialize<'de> for PropPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawPath::deserialize(deserializer)? {
            RawPath::Dotted(dotted) => PropPath::parse(&dotted),
            RawPath::Segments(segments) => {
                PropPath::from_segments(segments.into_iter().map(|segment| match segment {
                    RawSegment::Key(key) => key,
                    RawSegment::Index(index) => index.to_string(),
                }))
            }
        })
    }
}
