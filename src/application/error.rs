// src/application/error.rs
use crate::domain::error::DomainError;
use thiserror::Error;

/// Failures of the bookmark commands.
///
/// The Display string of each variant is the exact message shown to the
/// user, so shell wrappers and tests can rely on the wording.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Alias '{0}' already exists. Use 'tp del {0}' first.")]
    DuplicateAlias(String),

    #[error("This path is already registered as '{0}'.")]
    DuplicatePath(String),

    #[error("Alias '{0}' not found.")]
    AliasNotFound(String),

    #[error("Old alias and new alias are the same.")]
    SameAlias,

    #[error("Alias '{0}' already exists with a different path.")]
    ConflictingAlias(String),

    #[error("Directory no longer exists: {0}")]
    StaleDirectory(String),

    #[error("Store error: {0}")]
    Domain(#[from] DomainError),
}

impl CommandError {
    /// Usage errors are reported with a dedicated exit code at the process
    /// boundary.
    pub fn is_usage(&self) -> bool {
        matches!(self, CommandError::Usage(_))
    }
}

pub type CommandResult<T> = Result<T, CommandError>;
