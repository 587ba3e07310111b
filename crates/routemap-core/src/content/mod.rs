//! Content registry: the ordered set of addressable content records.
//!
//! Records are built once (usually by loading a JSON registry) and never
//! mutated afterwards. Registry order only matters as a tie-break: the first
//! record that satisfies a lookup wins.

mod ambiguity;
mod load;

pub use ambiguity::Ambiguity;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::resolver::{self, Match, NotFound};

/// One piece of addressable content: its route plus the type that selects a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Canonical route as authored. No leading/trailing slash convention is implied.
    pub path: String,
    /// Content type; selects the layout module used to render this record.
    #[serde(rename = "type")]
    pub kind: String,
    /// Remaining authored fields, kept verbatim for the render hand-off.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ContentRecord {
    pub fn new(path: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: kind.into(),
            fields: Map::new(),
        }
    }
}

/// Ordered, immutable sequence of content records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Registry {
    records: Vec<ContentRecord>,
}

impl Registry {
    pub fn new(records: Vec<ContentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose `path + suffix` equals `path` exactly.
    pub fn lookup(&self, path: &str, suffix: &str) -> Option<&ContentRecord> {
        resolver::lookup(&self.records, path, suffix)
    }

    /// Resolve a request path against this registry.
    pub fn resolve(&self, request_path: &str) -> Result<Match<'_>, NotFound> {
        resolver::resolve(request_path, &self.records)
    }
}

impl FromIterator<ContentRecord> for Registry {
    fn from_iter<I: IntoIterator<Item = ContentRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a ContentRecord;
    type IntoIter = std::slice::Iter<'a, ContentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
