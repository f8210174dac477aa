// src/application/services/bookmark_service_impl.rs
use std::sync::Arc;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::error::{CommandError, CommandResult};
use crate::application::services::bookmark_service::{BookmarkService, CD_SENTINEL};
use crate::domain::bookmark::Bookmark;
use crate::domain::matching::AliasMatching;
use crate::domain::repositories::repository::BookmarkRepository;

const ADD_USAGE: &str = "tp add <alias>";
const DEL_USAGE: &str = "tp del <alias>";
const CH_USAGE: &str = "tp ch <old_alias> <new_alias>";
const GO_USAGE: &str = "tp <alias>";

/// Width of the alias column in listings.
const ALIAS_COLUMN: usize = 15;

#[derive(Debug)]
pub struct BookmarkServiceImpl<R: BookmarkRepository> {
    repository: Arc<R>,
    matching: AliasMatching,
}

impl<R: BookmarkRepository> BookmarkServiceImpl<R> {
    pub fn new(repository: Arc<R>, matching: AliasMatching) -> Self {
        Self {
            repository,
            matching,
        }
    }

    fn position_of(&self, bookmarks: &[Bookmark], alias: &str) -> Option<usize> {
        bookmarks
            .iter()
            .position(|b| self.matching.matches(&b.alias, alias))
    }

    fn format_line(bookmark: &Bookmark) -> String {
        format!(
            "  {:<width$} -> {}",
            bookmark.alias,
            bookmark.path,
            width = ALIAS_COLUMN
        )
    }
}

impl<R: BookmarkRepository> BookmarkService for BookmarkServiceImpl<R> {
    #[instrument(skip(self), level = "debug")]
    fn add_bookmark(&self, alias: &str, path: &str) -> CommandResult<String> {
        if alias.is_empty() {
            return Err(CommandError::Usage(ADD_USAGE));
        }

        let mut bookmarks = self.repository.load()?;

        if self.position_of(&bookmarks, alias).is_some() {
            return Err(CommandError::DuplicateAlias(alias.to_string()));
        }
        if let Some(existing) = bookmarks.iter().find(|b| b.path == path) {
            return Err(CommandError::DuplicatePath(existing.alias.clone()));
        }

        let bookmark = Bookmark::new(alias, path);
        let message = format!("Added: {} -> {}", bookmark.alias, bookmark.path);

        // Newest entries live at the front of the list
        bookmarks.insert(0, bookmark);
        self.repository.save(&bookmarks)?;

        Ok(message)
    }

    #[instrument(skip(self), level = "debug")]
    fn delete_bookmark(&self, alias: &str) -> CommandResult<String> {
        if alias.is_empty() {
            return Err(CommandError::Usage(DEL_USAGE));
        }

        let mut bookmarks = self.repository.load()?;

        let index = self
            .position_of(&bookmarks, alias)
            .ok_or_else(|| CommandError::AliasNotFound(alias.to_string()))?;

        bookmarks.remove(index);
        self.repository.save(&bookmarks)?;

        // The message echoes the alias as the user typed it, not as stored
        Ok(format!("Deleted: {}", alias))
    }

    #[instrument(skip(self), level = "debug")]
    fn rename_alias(&self, old_alias: &str, new_alias: &str) -> CommandResult<String> {
        if old_alias.is_empty() || new_alias.is_empty() {
            return Err(CommandError::Usage(CH_USAGE));
        }
        if self.matching.matches(old_alias, new_alias) {
            return Err(CommandError::SameAlias);
        }

        let mut bookmarks = self.repository.load()?;

        let index = self
            .position_of(&bookmarks, old_alias)
            .ok_or_else(|| CommandError::AliasNotFound(old_alias.to_string()))?;

        match self.position_of(&bookmarks, new_alias) {
            Some(target) => {
                if bookmarks[target].path != bookmarks[index].path {
                    return Err(CommandError::ConflictingAlias(new_alias.to_string()));
                }

                // Both aliases name the same directory: merge by dropping the
                // old one and keeping the target record as is
                let path = bookmarks[target].path.clone();
                debug!("Merging duplicate alias '{}' into '{}'", old_alias, new_alias);
                bookmarks.remove(index);
                self.repository.save(&bookmarks)?;

                Ok(format!(
                    "'{}' and '{}' point to the same directory: {}\nRemoved duplicate alias '{}'. Keeping '{}'.",
                    old_alias, new_alias, path, old_alias, new_alias
                ))
            }
            None => {
                bookmarks[index].rename(new_alias);
                self.repository.save(&bookmarks)?;

                Ok(format!("Renamed: '{}' -> '{}'", old_alias, new_alias))
            }
        }
    }

    #[instrument(skip(self), level = "debug")]
    fn garbage_collect(&self) -> CommandResult<String> {
        let bookmarks = self.repository.load()?;

        let (valid, invalid): (Vec<Bookmark>, Vec<Bookmark>) =
            bookmarks.into_iter().partition(Bookmark::path_exists);

        if invalid.is_empty() {
            return Ok("No invalid bookmarks found. All directories exist.".to_string());
        }

        let mut lines = vec![format!("Found {} invalid bookmark(s):\n", invalid.len())];
        for bookmark in &invalid {
            lines.push(Self::format_line(bookmark));
        }

        self.repository.save(&valid)?;
        lines.push(format!("\nRemoved {} invalid bookmark(s).", invalid.len()));

        Ok(lines.join("\n"))
    }

    #[instrument(skip(self), level = "debug")]
    fn resolve_alias(&self, alias: &str) -> CommandResult<String> {
        if alias.is_empty() {
            return Err(CommandError::Usage(GO_USAGE));
        }

        let bookmarks = self.repository.load()?;

        let bookmark = bookmarks
            .iter()
            .find(|b| self.matching.matches(&b.alias, alias))
            .ok_or_else(|| CommandError::AliasNotFound(alias.to_string()))?;

        if !bookmark.path_exists() {
            return Err(CommandError::StaleDirectory(bookmark.path.clone()));
        }

        Ok(format!("{}{}", CD_SENTINEL, bookmark.path))
    }

    #[instrument(skip(self), level = "debug")]
    fn list_bookmarks(&self) -> CommandResult<String> {
        let bookmarks = self.repository.load()?;

        if bookmarks.is_empty() {
            return Ok("No bookmarks yet. Use 'tp add <alias>' to add one.".to_string());
        }

        let mut lines = vec!["Bookmarks (newest first):\n".to_string()];
        for bookmark in &bookmarks {
            lines.push(Self::format_line(bookmark));
        }

        Ok(lines.join("\n"))
    }

    #[instrument(skip(self), level = "debug")]
    fn completion_aliases(&self) -> CommandResult<String> {
        let bookmarks = self.repository.load()?;

        Ok(bookmarks.iter().map(|b| b.alias.as_str()).join("\n"))
    }
}
