//! VFS Error Types

use std::io;
use std::path::Path;
use thiserror::Error;

/// Result type for VFS operations
pub type VfsResult<T> = Result<T, VfsError>;

/// Error type for VFS operations
///
/// `Display` renders only the cause, in the wording of the C library's
/// `strerror`, because callers prefix it with the program and source name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    /// File or directory not found
    #[error("No such file or directory")]
    NotFound { path: String },

    /// Permission denied
    #[error("Permission denied")]
    PermissionDenied { path: String },

    /// A directory was given where a file is required
    #[error("Is a directory")]
    IsADirectory { path: String },

    /// Any other IO error
    #[error("{message}")]
    Io { path: String, message: String },
}

impl VfsError {
    /// Classify an OS error raised while touching `path`.
    pub fn from_io(path: &Path, err: &io::Error) -> Self {
        let path = path.to_string_lossy().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => VfsError::NotFound { path },
            io::ErrorKind::PermissionDenied => VfsError::PermissionDenied { path },
            _ => VfsError::Io {
                path,
                message: describe_io_error(err),
            },
        }
    }
}

/// Render an IO error without the trailing ` (os error N)`.
pub fn describe_io_error(err: &io::Error) -> String {
    let text = err.to_string();
    match text.rfind(" (os error ") {
        Some(idx) => text[..idx].to_string(),
        None => text,
    }
}
