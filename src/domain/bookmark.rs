// src/domain/bookmark.rs
use std::path::Path;

use chrono::{DateTime, Utc};

/// A directory bookmark: one alias naming one absolute path.
///
/// The path is stored exactly as captured at creation time. It is never
/// canonicalized, never tilde-expanded and never checked for trailing
/// separators, so what the user bookmarked is what `tp` jumps back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub alias: String,
    pub path: String,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Creates a bookmark stamped with the current time.
    pub fn new(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            path: path.into(),
            created_at: Utc::now(),
        }
    }

    /// Reassigns the alias, keeping path and creation time.
    pub fn rename(&mut self, alias: impl Into<String>) {
        self.alias = alias.into();
    }

    /// Whether the bookmarked path still exists on the filesystem.
    pub fn path_exists(&self) -> bool {
        Path::new(&self.path).exists()
    }
}
