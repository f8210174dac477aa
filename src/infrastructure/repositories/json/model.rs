// src/infrastructure/repositories/json/model.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::bookmark::Bookmark;

/// Wire form of a bookmark in the JSON store.
///
/// Field names are camelCase and the timestamp is integer epoch
/// milliseconds, so stores written by earlier releases load unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRecord {
    pub alias: String,
    pub path: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl From<&Bookmark> for BookmarkRecord {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            alias: bookmark.alias.clone(),
            path: bookmark.path.clone(),
            created_at: bookmark.created_at,
        }
    }
}

impl From<BookmarkRecord> for Bookmark {
    fn from(record: BookmarkRecord) -> Self {
        Self {
            alias: record.alias,
            path: record.path,
            created_at: record.created_at,
        }
    }
}
