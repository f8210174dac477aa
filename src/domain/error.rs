// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
