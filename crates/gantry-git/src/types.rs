//! Git history types

use serde::{Deserialize, Serialize};

/// A commit as reported by the history reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit hash (full)
    pub hash: String,
    /// Short hash (first 7 characters)
    pub short_hash: String,
    /// Commit message title line
    pub message: String,
    /// Commit message body, empty when the message has no body
    pub body: String,
    /// Author name
    pub author: String,
    /// Author email
    pub author_email: String,
    /// Parent commit hashes, in parent order
    pub parents: Vec<String>,
}

impl Commit {
    /// Create a new Commit
    pub fn new(
        hash: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
        author_email: impl Into<String>,
    ) -> Self {
        let hash = hash.into();
        let short_hash = hash.chars().take(7).collect();

        Self {
            hash,
            short_hash,
            message: message.into(),
            body: String::new(),
            author: author.into(),
            author_email: author_email.into(),
            parents: Vec::new(),
        }
    }

    /// Set the commit body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the parent hashes
    pub fn with_parents<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parents = parents.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this commit merges more than one parent
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}

/// A tag as reported by the history reader
///
/// Two tags are equal only when name, target and date all agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name
    pub name: String,
    /// Commit hash the tag points to
    pub commit_hash: String,
    /// Formatted tag date as supplied by the reader
    pub date: String,
}

impl Tag {
    /// Create a new Tag
    pub fn new(
        name: impl Into<String>,
        commit_hash: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            commit_hash: commit_hash.into(),
            date: date.into(),
        }
    }
}
