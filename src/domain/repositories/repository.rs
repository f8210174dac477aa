// src/domain/repositories/repository.rs
use crate::domain::bookmark::Bookmark;
use crate::domain::error::DomainResult;

/// Persistence boundary for the bookmark list.
///
/// The list is small enough to treat as a single document: implementations
/// read and write it whole, and the order handed to `save` is the order
/// `load` returns later. Newest-first ordering is maintained by the caller,
/// not the repository.
pub trait BookmarkRepository: Send + Sync + std::fmt::Debug {
    /// Loads all bookmarks in stored order.
    fn load(&self) -> DomainResult<Vec<Bookmark>>;

    /// Replaces the stored list with `bookmarks`, atomically.
    fn save(&self, bookmarks: &[Bookmark]) -> DomainResult<()>;
}
