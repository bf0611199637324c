//! VirtualFileSystem trait definition

use crate::error::VfsResult;
use std::io::BufRead;
use std::path::Path;

/// Kind of an existing file system entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Virtual File System trait
///
/// Provides a read-only interface for the operations a source needs,
/// decoupling the stream processor from the OS file system.
///
/// # Implementations
/// - `MemoryFileSystem`: In-memory file system
/// - `NativeFileSystem`: Native OS file system
pub trait VirtualFileSystem: Send + Sync {
    /// Look up an entry without opening it
    ///
    /// # Returns
    /// The entry kind, or `NotFound` / `PermissionDenied` / `Io`
    fn stat(&self, path: &Path) -> VfsResult<EntryKind>;

    /// Check that the entry can be opened for reading
    fn check_readable(&self, path: &Path) -> VfsResult<()>;

    /// Open a file for sequential reading
    ///
    /// The returned reader owns the underlying handle; dropping it
    /// releases the file.
    fn open(&self, path: &Path) -> VfsResult<Box<dyn BufRead + '_>>;

    /// Check if path exists
    fn exists(&self, path: &Path) -> bool {
        self.stat(path).is_ok()
    }

    /// Check if path exists and is a file
    fn is_file(&self, path: &Path) -> bool {
        matches!(self.stat(path), Ok(EntryKind::File))
    }

    /// Check if path exists and is a directory
    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.stat(path), Ok(EntryKind::Directory))
    }
}
