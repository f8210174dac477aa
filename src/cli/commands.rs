// src/cli/commands.rs
use std::env;
use std::path::Path;

use tracing::instrument;

use crate::application::services::factory::create_bookmark_service;
use crate::cli::error::CliResult;
use crate::config::Settings;

#[instrument(skip(settings), level = "debug")]
pub fn add(alias: Option<String>, data_file: &Path, settings: &Settings) -> CliResult<()> {
    let current_dir = env::current_dir()?;
    let service = create_bookmark_service(data_file, settings);
    let message = service.add_bookmark(
        alias.as_deref().unwrap_or_default(),
        &current_dir.to_string_lossy(),
    )?;
    println!("{}", message);
    Ok(())
}

#[instrument(skip(settings), level = "debug")]
pub fn delete(alias: Option<String>, data_file: &Path, settings: &Settings) -> CliResult<()> {
    let service = create_bookmark_service(data_file, settings);
    let message = service.delete_bookmark(alias.as_deref().unwrap_or_default())?;
    println!("{}", message);
    Ok(())
}

#[instrument(skip(settings), level = "debug")]
pub fn rename(
    old_alias: Option<String>,
    new_alias: Option<String>,
    data_file: &Path,
    settings: &Settings,
) -> CliResult<()> {
    let service = create_bookmark_service(data_file, settings);
    let message = service.rename_alias(
        old_alias.as_deref().unwrap_or_default(),
        new_alias.as_deref().unwrap_or_default(),
    )?;
    println!("{}", message);
    Ok(())
}

#[instrument(skip(settings), level = "debug")]
pub fn garbage_collect(data_file: &Path, settings: &Settings) -> CliResult<()> {
    let service = create_bookmark_service(data_file, settings);
    let message = service.garbage_collect()?;
    println!("{}", message);
    Ok(())
}

/// Resolves an alias and prints the sentinel line the shell wrapper turns
/// into a `cd`.
#[instrument(skip(settings), level = "debug")]
pub fn go(alias: &str, data_file: &Path, settings: &Settings) -> CliResult<()> {
    let service = create_bookmark_service(data_file, settings);
    let message = service.resolve_alias(alias)?;
    println!("{}", message);
    Ok(())
}

#[instrument(skip(settings), level = "debug")]
pub fn list(data_file: &Path, settings: &Settings) -> CliResult<()> {
    let service = create_bookmark_service(data_file, settings);
    let message = service.list_bookmarks()?;
    println!("{}", message);
    Ok(())
}

/// Prints the raw alias list for completion engines. Nothing at all is
/// printed for an empty store, so scripts see an empty word list.
#[instrument(skip(settings), level = "debug")]
pub fn completions(data_file: &Path, settings: &Settings) -> CliResult<()> {
    let service = create_bookmark_service(data_file, settings);
    let aliases = service.completion_aliases()?;
    if !aliases.is_empty() {
        println!("{}", aliases);
    }
    Ok(())
}
