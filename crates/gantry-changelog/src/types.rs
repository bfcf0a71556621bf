//! Changelog tree types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Version label of the release collecting commits above the newest tag
pub const UNRELEASED: &str = "Unreleased";

/// One entry in a release's change buckets
///
/// A single commit yields zero, one or many changes depending on the
/// grammar and the configured message hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Parsed change type, the grouping key within a release
    pub change_type: String,
    /// Change description
    pub message: String,
    /// Scope, when the grammar captured one
    pub scope: Option<String>,
    /// Breaking marker, when declared in title or body
    pub breaking: Option<String>,
    /// Hash of the originating commit
    pub hash: String,
    /// Parent hashes of the originating commit
    pub parents: Vec<String>,
    /// Author name
    pub author: String,
    /// Author email
    pub author_email: String,
}

/// A release node of the changelog tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Tag name of the release, or [`UNRELEASED`]
    pub version: String,
    /// Tag date, empty when unanchored
    pub date: String,
    /// Change buckets keyed by displayed change type, in encounter order
    pub changes: IndexMap<String, Vec<Change>>,
}

impl Release {
    /// Create an empty release node
    pub fn new(version: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: date.into(),
            changes: IndexMap::new(),
        }
    }

    /// Create an empty unreleased node
    pub fn unreleased() -> Self {
        Self::new(UNRELEASED, "")
    }

    /// Whether no change bucket holds any entry
    pub fn is_empty(&self) -> bool {
        self.changes.values().all(|bucket| bucket.is_empty())
    }

    /// Total number of changes across all buckets
    pub fn change_count(&self) -> usize {
        self.changes.values().map(|bucket| bucket.len()).sum()
    }
}
