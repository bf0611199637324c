//! Error types
//!
//! [`SourceError`] is recorded per source and never stops a run.
//! [`CatError`] is fatal: the output sink itself is broken.

use mycat_vfs::{describe_io_error, VfsError};
use std::io;
use thiserror::Error;

/// Failure of a single source. `Display` yields `<name>: <message>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Missing, a directory, or unreadable; found before opening.
    #[error("{name}: {source}")]
    Unavailable { name: String, source: VfsError },

    /// Opening failed even though the access check passed.
    #[error("{name}: {source}")]
    OpenFailure { name: String, source: VfsError },

    /// IO error part way through the source.
    #[error("{name}: Read error: {reason}")]
    ReadFailure { name: String, reason: String },
}

impl SourceError {
    pub fn read_failure(name: impl Into<String>, err: &io::Error) -> Self {
        SourceError::ReadFailure {
            name: name.into(),
            reason: describe_io_error(err),
        }
    }

    /// Name of the source that failed
    pub fn name(&self) -> &str {
        match self {
            SourceError::Unavailable { name, .. }
            | SourceError::OpenFailure { name, .. }
            | SourceError::ReadFailure { name, .. } => name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SourceError::Unavailable { .. } => "unavailable",
            SourceError::OpenFailure { .. } => "open",
            SourceError::ReadFailure { .. } => "read",
        }
    }
}

/// Error that aborts the whole run.
#[derive(Error, Debug)]
pub enum CatError {
    #[error("write error: {}", describe_io_error(.0))]
    Write(#[source] io::Error),
}
