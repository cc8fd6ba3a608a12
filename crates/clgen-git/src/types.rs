//! Commit and tag records read from the repository

use serde::{Deserialize, Serialize};

/// A commit as the changelog sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Abbreviated object id, for diagnostics
    pub short_hash: String,
    /// Raw message, subject line first
    pub message: String,
}

impl CommitInfo {
    pub fn new(hash: &str, message: impl Into<String>) -> Self {
        Self {
            short_hash: hash.chars().take(7).collect(),
            message: message.into(),
        }
    }

    /// First line of the message
    pub fn subject(&self) -> &str {
        self.lines().next().unwrap_or_default()
    }

    /// Every line of the message, subject and blank lines included
    pub fn lines(&self) -> impl Iterator<Item = &str> + Clone {
        self.message.split('\n')
    }
}

/// A tag resolved to the commit it marks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    /// Short tag name, without `refs/tags/`
    pub name: String,
    /// Id of the tagged commit
    pub commit_hash: String,
}

impl TagInfo {
    pub fn new(name: impl Into<String>, commit_hash: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commit_hash: commit_hash.into(),
        }
    }
}
