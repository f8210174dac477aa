// src/application/services/factory.rs
use std::path::Path;
use std::sync::Arc;

use tracing::instrument;

use crate::application::services::bookmark_service::BookmarkService;
use crate::application::services::bookmark_service_impl::BookmarkServiceImpl;
use crate::config::Settings;
use crate::domain::matching::AliasMatching;
use crate::infrastructure::repositories::json::repository::JsonBookmarkRepository;

/// Wires a bookmark service to the JSON store at `data_file`.
///
/// Command handlers resolve the data directory and settings once at the
/// process boundary and inject them here.
#[instrument(skip(settings), level = "debug")]
pub fn create_bookmark_service(data_file: &Path, settings: &Settings) -> Arc<dyn BookmarkService> {
    let repository = Arc::new(JsonBookmarkRepository::new(data_file));
    Arc::new(BookmarkServiceImpl::new(
        repository,
        AliasMatching::from_case_sensitive(settings.case_sensitive),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_data_file_when_create_service_then_operations_hit_that_store() {
        let temp_dir = TempDir::new().unwrap();
        let data_file = temp_dir.path().join("bookmarks.json");

        let service = create_bookmark_service(&data_file, &Settings::default());
        service.add_bookmark("proj", "/srv/proj").unwrap();

        assert!(data_file.exists());
        let listing = service.list_bookmarks().unwrap();
        assert!(listing.contains("proj"));
    }

    #[test]
    fn given_case_sensitive_settings_when_create_service_then_matching_is_exact() {
        let temp_dir = TempDir::new().unwrap();
        let data_file = temp_dir.path().join("bookmarks.json");
        let settings = Settings {
            case_sensitive: true,
        };

        let service = create_bookmark_service(&data_file, &settings);
        service.add_bookmark("Work", "/srv/a").unwrap();

        // Exact matching treats the variant as a distinct alias
        service.add_bookmark("work", "/srv/b").unwrap();
        assert_eq!(service.completion_aliases().unwrap(), "work\nWork");
    }
}
