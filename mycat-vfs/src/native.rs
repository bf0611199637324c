//! Native file system implementation

use crate::error::{VfsError, VfsResult};
use crate::{EntryKind, VirtualFileSystem};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A native OS file system implementation.
///
/// This wraps `std::fs` operations and provides the `VirtualFileSystem`
/// interface for local file access.
///
/// # Example
/// ```
/// use mycat_vfs::{NativeFileSystem, VirtualFileSystem};
/// use std::path::Path;
///
/// let fs = NativeFileSystem::new();
/// assert!(!fs.is_file(Path::new("/definitely/not/here.txt")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NativeFileSystem {}

impl NativeFileSystem {
    /// Create a new native file system.
    pub fn new() -> Self {
        Self {}
    }
}

impl VirtualFileSystem for NativeFileSystem {
    fn stat(&self, path: &Path) -> VfsResult<EntryKind> {
        let metadata = std::fs::metadata(path).map_err(|e| VfsError::from_io(path, &e))?;
        if metadata.is_dir() {
            Ok(EntryKind::Directory)
        } else {
            Ok(EntryKind::File)
        }
    }

    /// Ask the kernel with `access(R_OK)`; the file is never opened, so a
    /// FIFO keeps its writer for the real open.
    #[cfg(unix)]
    fn check_readable(&self, path: &Path) -> VfsResult<()> {
        use std::ffi::CString;
        use std::os::unix::ffi::OsStrExt;

        let c_path = CString::new(path.as_os_str().as_bytes()).map_err(|_| VfsError::Io {
            path: path.to_string_lossy().to_string(),
            message: String::from("Invalid argument"),
        })?;

        // SAFETY: c_path is a valid NUL-terminated string for the whole call.
        if unsafe { libc::access(c_path.as_ptr(), libc::R_OK) } == 0 {
            Ok(())
        } else {
            Err(VfsError::from_io(path, &std::io::Error::last_os_error()))
        }
    }

    /// Without `access(2)` only existence is checked here; an unreadable
    /// file is reported when it is opened.
    #[cfg(not(unix))]
    fn check_readable(&self, path: &Path) -> VfsResult<()> {
        std::fs::metadata(path)
            .map(drop)
            .map_err(|e| VfsError::from_io(path, &e))
    }

    fn open(&self, path: &Path) -> VfsResult<Box<dyn BufRead + '_>> {
        // Opening a directory succeeds on Unix; reject it up front.
        if self.stat(path)? == EntryKind::Directory {
            return Err(VfsError::IsADirectory {
                path: path.to_string_lossy().to_string(),
            });
        }
        let file = File::open(path).map_err(|e| VfsError::from_io(path, &e))?;
        Ok(Box::new(BufReader::new(file)))
    }
}
