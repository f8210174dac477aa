// src/infrastructure/repositories/json/repository.rs
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use crate::domain::bookmark::Bookmark;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::repository::BookmarkRepository;
use crate::infrastructure::repositories::json::model::BookmarkRecord;

/// Content of a freshly initialized store.
const EMPTY_STORE: &str = "[]";

/// Bookmark store backed by a single JSON file.
///
/// The file is rewritten whole on every save via a temp file in the same
/// directory followed by a rename, so readers never observe a partially
/// written store.
#[derive(Debug, Clone)]
pub struct JsonBookmarkRepository {
    data_file: PathBuf,
}

impl JsonBookmarkRepository {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Creates the data directory and an empty store file on first use.
    /// Existing files are left untouched.
    #[instrument(skip(self), level = "debug")]
    pub fn ensure_initialized(&self) -> DomainResult<()> {
        self.ensure_parent_dir()?;
        if !self.data_file.exists() {
            debug!("Initializing empty store at {}", self.data_file.display());
            fs::write(&self.data_file, EMPTY_STORE)?;
        }
        Ok(())
    }

    fn ensure_parent_dir(&self) -> DomainResult<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn temp_dir(&self) -> &Path {
        match self.data_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl BookmarkRepository for JsonBookmarkRepository {
    #[instrument(skip(self), level = "debug")]
    fn load(&self) -> DomainResult<Vec<Bookmark>> {
        self.ensure_initialized()?;

        let content = fs::read_to_string(&self.data_file)?;
        let records: Vec<BookmarkRecord> = serde_json::from_str(&content).map_err(|e| {
            DomainError::SerializationError(format!(
                "Failed to parse {}: {}",
                self.data_file.display(),
                e
            ))
        })?;

        Ok(records.into_iter().map(Bookmark::from).collect())
    }

    #[instrument(skip(self, bookmarks), level = "debug", fields(count = bookmarks.len()))]
    fn save(&self, bookmarks: &[Bookmark]) -> DomainResult<()> {
        let records: Vec<BookmarkRecord> = bookmarks.iter().map(BookmarkRecord::from).collect();
        let content = serde_json::to_string_pretty(&records).map_err(|e| {
            DomainError::SerializationError(format!("Failed to serialize bookmarks: {}", e))
        })?;

        self.ensure_parent_dir()?;

        let mut temp_file = NamedTempFile::new_in(self.temp_dir())?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(&self.data_file).map_err(|e| {
            DomainError::RepositoryError(format!(
                "Failed to replace {}: {}",
                self.data_file.display(),
                e.error
            ))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn repository_in(temp_dir: &TempDir) -> JsonBookmarkRepository {
        JsonBookmarkRepository::new(temp_dir.path().join("bookmarks.json"))
    }

    fn bookmark_at(alias: &str, path: &str, millis: i64) -> Bookmark {
        Bookmark {
            alias: alias.to_string(),
            path: path.to_string(),
            created_at: Utc.timestamp_millis_opt(millis).single().unwrap(),
        }
    }

    #[test]
    fn given_missing_file_when_ensure_initialized_then_writes_empty_array() -> DomainResult<()> {
        let temp_dir = TempDir::new()?;
        let repository =
            JsonBookmarkRepository::new(temp_dir.path().join("nested").join("bookmarks.json"));

        repository.ensure_initialized()?;

        assert_eq!(fs::read_to_string(repository.data_file())?, "[]");
        Ok(())
    }

    #[test]
    fn given_existing_file_when_ensure_initialized_then_content_is_untouched() -> DomainResult<()> {
        let temp_dir = TempDir::new()?;
        let repository = repository_in(&temp_dir);
        fs::write(repository.data_file(), "custom content")?;

        repository.ensure_initialized()?;

        assert_eq!(fs::read_to_string(repository.data_file())?, "custom content");
        Ok(())
    }

    #[test]
    fn given_fresh_store_when_load_then_returns_empty_list() -> DomainResult<()> {
        let temp_dir = TempDir::new()?;
        let repository = repository_in(&temp_dir);

        let bookmarks = repository.load()?;

        assert!(bookmarks.is_empty());
        assert!(repository.data_file().exists());
        Ok(())
    }

    #[test]
    fn given_saved_bookmarks_when_load_then_order_and_fields_survive() -> DomainResult<()> {
        let temp_dir = TempDir::new()?;
        let repository = repository_in(&temp_dir);
        let bookmarks = vec![
            bookmark_at("newest", "/srv/new", 2_000),
            bookmark_at("oldest", "/srv/old", 1_000),
        ];

        repository.save(&bookmarks)?;
        let loaded = repository.load()?;

        assert_eq!(loaded, bookmarks);
        Ok(())
    }

    #[test]
    fn given_one_bookmark_when_save_then_file_is_pretty_printed_camel_case() -> DomainResult<()> {
        let temp_dir = TempDir::new()?;
        let repository = repository_in(&temp_dir);
        let bookmarks = vec![bookmark_at("proj", "/home/user/proj", 1_700_000_000_000)];

        repository.save(&bookmarks)?;

        let expected = "[\n  {\n    \"alias\": \"proj\",\n    \"path\": \"/home/user/proj\",\n    \"createdAt\": 1700000000000\n  }\n]";
        assert_eq!(fs::read_to_string(repository.data_file())?, expected);
        Ok(())
    }

    #[test]
    fn given_no_bookmarks_when_save_then_file_holds_empty_array() -> DomainResult<()> {
        let temp_dir = TempDir::new()?;
        let repository = repository_in(&temp_dir);

        repository.save(&[])?;

        assert_eq!(fs::read_to_string(repository.data_file())?, "[]");
        Ok(())
    }

    #[test]
    fn given_store_written_by_earlier_release_when_load_and_save_then_bytes_identical(
    ) -> DomainResult<()> {
        let temp_dir = TempDir::new()?;
        let repository = repository_in(&temp_dir);
        let legacy = "[\n  {\n    \"alias\": \"docs\",\n    \"path\": \"/home/user/Documents\",\n    \"createdAt\": 1690000000123\n  },\n  {\n    \"alias\": \"dl\",\n    \"path\": \"/home/user/Downloads\",\n    \"createdAt\": 1680000000456\n  }\n]";
        fs::write(repository.data_file(), legacy)?;

        let loaded = repository.load()?;
        repository.save(&loaded)?;

        assert_eq!(fs::read_to_string(repository.data_file())?, legacy);
        Ok(())
    }

    #[test]
    fn given_fresh_bookmark_when_saved_and_reloaded_then_millis_precision_kept(
    ) -> DomainResult<()> {
        let temp_dir = TempDir::new()?;
        let repository = repository_in(&temp_dir);
        let bookmark = Bookmark::new("now", "/tmp");

        repository.save(std::slice::from_ref(&bookmark))?;
        let loaded = repository.load()?;

        assert_eq!(
            loaded[0].created_at.timestamp_millis(),
            bookmark.created_at.timestamp_millis()
        );
        Ok(())
    }

    #[test]
    fn given_corrupt_file_when_load_then_serialization_error() -> DomainResult<()> {
        let temp_dir = TempDir::new()?;
        let repository = repository_in(&temp_dir);
        fs::write(repository.data_file(), "this is not json")?;

        let result = repository.load();

        assert!(matches!(result, Err(DomainError::SerializationError(_))));
        Ok(())
    }

    #[test]
    fn given_json_object_instead_of_array_when_load_then_serialization_error() -> DomainResult<()> {
        let temp_dir = TempDir::new()?;
        let repository = repository_in(&temp_dir);
        fs::write(repository.data_file(), r#"{"alias": "a"}"#)?;

        let result = repository.load();

        assert!(matches!(result, Err(DomainError::SerializationError(_))));
        Ok(())
    }
}
