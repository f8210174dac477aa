// src/application/services/bookmark_service.rs
use std::fmt::Debug;

use crate::application::error::CommandResult;

/// Prefix that tells the shell wrapper to change directory instead of
/// printing. Everything after the colon is the target path, verbatim.
pub const CD_SENTINEL: &str = "__TP_CD__:";

/// The bookmark command engine.
///
/// Every operation loads the store, validates its input, mutates or queries
/// the list, persists when something changed, and returns the message to
/// print. Validation failures surface as [`CommandError`] values before any
/// write happens, so a failed command never alters the store.
///
/// [`CommandError`]: crate::application::error::CommandError
pub trait BookmarkService: Send + Sync + Debug {
    /// Bookmarks `path` under `alias`. New entries go to the front of the
    /// list so listings read newest first.
    fn add_bookmark(&self, alias: &str, path: &str) -> CommandResult<String>;

    /// Removes the bookmark matching `alias`.
    fn delete_bookmark(&self, alias: &str) -> CommandResult<String>;

    /// Renames `old_alias` to `new_alias`. When both aliases point to the
    /// same directory the duplicate is merged away instead.
    fn rename_alias(&self, old_alias: &str, new_alias: &str) -> CommandResult<String>;

    /// Drops every bookmark whose directory no longer exists and reports
    /// what was removed.
    fn garbage_collect(&self) -> CommandResult<String>;

    /// Resolves `alias` to the sentinel-prefixed cd line consumed by the
    /// shell wrapper.
    fn resolve_alias(&self, alias: &str) -> CommandResult<String>;

    /// Renders all bookmarks, newest first.
    fn list_bookmarks(&self) -> CommandResult<String>;

    /// All aliases, one per line, for shell completion engines.
    fn completion_aliases(&self) -> CommandResult<String>;
}
