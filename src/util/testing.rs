// src/util/testing.rs

use std::sync::Arc;

use tempfile::TempDir;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::services::bookmark_service::BookmarkService;
use crate::application::services::factory::create_bookmark_service;
use crate::config::{self, Settings};

/// Logging setup only runs once; subsequent calls do nothing if `tracing` is
/// already set.
pub fn setup_test_logging() {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    subscriber.try_init().unwrap_or_else(|e| {
        eprintln!("Error: Failed to set up logging: {}", e);
    });
}

/// Creates a bookmark service wired to a store inside a fresh temp
/// directory. The returned [`TempDir`] must outlive the service.
pub fn temp_service() -> (TempDir, Arc<dyn BookmarkService>) {
    temp_service_with_settings(&Settings::default())
}

/// Same as [`temp_service`], with explicit settings.
pub fn temp_service_with_settings(settings: &Settings) -> (TempDir, Arc<dyn BookmarkService>) {
    setup_test_logging();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data_file = config::bookmarks_file(temp_dir.path());
    let service = create_bookmark_service(&data_file, settings);
    (temp_dir, service)
}
