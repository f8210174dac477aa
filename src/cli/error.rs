// src/cli/error.rs
use std::io;

use thiserror::Error;

use crate::application::error::CommandError;
use crate::exitcode;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Command(#[from] CommandError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Exit code reported to the shell for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Command(e) if e.is_usage() => exitcode::USAGE,
            _ => exitcode::FAILURE,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
