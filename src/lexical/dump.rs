//! Serializable index snapshots.
//!
//! An [`IndexDump`] is the exchange format of an inverted index: a JSON
//! object mapping each token to an array of document ids. Sets are not a
//! JSON type, so each posting set becomes an array; the order inside an
//! array carries no meaning, only membership does.
//!
//! ```text
//! {
//!   "amet": ["3"],
//!   "ipsum": ["1", "2"],
//!   "lorem": ["1", "2", "3"]
//! }
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::document::DocId;
use crate::error::Result;

/// A token -> ids snapshot of an inverted index.
///
/// Tokens are kept sorted, so two dumps of the same index serialize to the
/// same bytes.
///
/// # Examples
///
/// ```
/// use scour::document::DocId;
/// use scour::lexical::dump::IndexDump;
///
/// let dump = IndexDump::from_json(r#"{ "lorem": ["1", "2"] }"#).unwrap();
/// assert_eq!(dump.get("lorem").unwrap(), &[DocId::from("1"), DocId::from("2")]);
/// assert_eq!(dump.to_json().unwrap(), r#"{"lorem":["1","2"]}"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexDump {
    entries: BTreeMap<String, Vec<DocId>>,
}

impl IndexDump {
    /// Create an empty dump.
    pub fn new() -> Self {
        IndexDump {
            entries: BTreeMap::new(),
        }
    }

    /// Ids recorded for `token`.
    pub fn get(&self, token: &str) -> Option<&[DocId]> {
        self.entries.get(token).map(Vec::as_slice)
    }

    /// Number of tokens in the dump.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dump has no tokens.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(token, ids)` pairs in token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DocId])> {
        self.entries
            .iter()
            .map(|(token, ids)| (token.as_str(), ids.as_slice()))
    }

    /// Serialize to a compact JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to an indented JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a dump from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the dump as JSON to `writer`.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    /// Read a JSON dump from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl FromIterator<(String, Vec<DocId>)> for IndexDump {
    fn from_iter<T: IntoIterator<Item = (String, Vec<DocId>)>>(iter: T) -> Self {
        IndexDump {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for IndexDump {
    type Item = (String, Vec<DocId>);
    type IntoIter = btree_map::IntoIter<String, Vec<DocId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
