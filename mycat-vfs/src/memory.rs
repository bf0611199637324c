//! In-memory file system implementation

use crate::error::{VfsError, VfsResult};
use crate::{EntryKind, VirtualFileSystem};
use std::collections::BTreeMap;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Message reported by a file created with [`MemoryFileSystem::write_failing`].
pub const INJECTED_READ_ERROR: &str = "Input/output error";

#[derive(Debug, Clone)]
enum Entry {
    File {
        content: Vec<u8>,
        readable: bool,
        /// Reading fails with an IO error once `content` is exhausted.
        fails: bool,
    },
    Directory,
}

/// An in-memory file system implementation.
///
/// All entries are stored in memory using a `BTreeMap`, making it suitable
/// for testing and scenarios where disk access is not desired. Besides
/// regular files it can hold directories, unreadable files and files whose
/// reads fail part way through.
///
/// # Example
/// ```
/// use mycat_vfs::{MemoryFileSystem, VirtualFileSystem};
/// use std::io::Read;
/// use std::path::Path;
///
/// let fs = MemoryFileSystem::new();
/// fs.write_file(Path::new("/test.txt"), b"hello");
/// let mut content = Vec::new();
/// fs.open(Path::new("/test.txt")).unwrap().read_to_end(&mut content).unwrap();
/// assert_eq!(content, b"hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    entries: Arc<RwLock<BTreeMap<String, Entry>>>,
}

impl MemoryFileSystem {
    /// Create a new empty memory file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new memory file system pre-populated with files.
    ///
    /// # Arguments
    /// * `files` - Iterator of (path, content) tuples
    pub fn with_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<u8>)>,
        S: AsRef<str>,
    {
        let fs = Self::new();
        for (path, content) in files {
            fs.write_file(Path::new(path.as_ref()), &content);
        }
        fs
    }

    /// Create or replace a regular, readable file.
    pub fn write_file(&self, path: &Path, content: &[u8]) {
        self.insert(
            path,
            Entry::File {
                content: content.to_vec(),
                readable: true,
                fails: false,
            },
        );
    }

    /// Create a file that exists but cannot be opened for reading.
    pub fn write_unreadable(&self, path: &Path, content: &[u8]) {
        self.insert(
            path,
            Entry::File {
                content: content.to_vec(),
                readable: false,
                fails: false,
            },
        );
    }

    /// Create a file that yields `content` and then fails with an IO error.
    pub fn write_failing(&self, path: &Path, content: &[u8]) {
        self.insert(
            path,
            Entry::File {
                content: content.to_vec(),
                readable: true,
                fails: true,
            },
        );
    }

    /// Create a directory entry.
    pub fn create_dir(&self, path: &Path) {
        self.insert(path, Entry::Directory);
    }

    fn insert(&self, path: &Path, entry: Entry) {
        let normalized = self.normalize_path(path);
        // A poisoned lock only means another writer panicked; the map is still usable.
        let mut entries = match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.insert(normalized, entry);
    }

    fn lookup(&self, path: &Path) -> VfsResult<Entry> {
        let normalized = self.normalize_path(path);
        let entries = self.entries.read().map_err(|_| VfsError::Io {
            path: normalized.clone(),
            message: String::from("Lock poisoned"),
        })?;

        entries
            .get(&normalized)
            .cloned()
            .ok_or(VfsError::NotFound { path: normalized })
    }

    /// Normalize a path string for internal storage.
    /// Uses forward slashes consistently for cross-platform compatibility.
    fn normalize_path(&self, path: &Path) -> String {
        path.to_string_lossy().replace('\\', "/")
    }
}

impl VirtualFileSystem for MemoryFileSystem {
    fn stat(&self, path: &Path) -> VfsResult<EntryKind> {
        match self.lookup(path)? {
            Entry::File { .. } => Ok(EntryKind::File),
            Entry::Directory => Ok(EntryKind::Directory),
        }
    }

    fn check_readable(&self, path: &Path) -> VfsResult<()> {
        match self.lookup(path)? {
            Entry::File {
                readable: false, ..
            } => Err(VfsError::PermissionDenied {
                path: self.normalize_path(path),
            }),
            _ => Ok(()),
        }
    }

    fn open(&self, path: &Path) -> VfsResult<Box<dyn BufRead + '_>> {
        match self.lookup(path)? {
            Entry::Directory => Err(VfsError::IsADirectory {
                path: self.normalize_path(path),
            }),
            Entry::File {
                readable: false, ..
            } => Err(VfsError::PermissionDenied {
                path: self.normalize_path(path),
            }),
            Entry::File {
                content,
                fails: false,
                ..
            } => Ok(Box::new(Cursor::new(content))),
            Entry::File {
                content,
                fails: true,
                ..
            } => Ok(Box::new(BufReader::new(FailingReader {
                inner: Cursor::new(content),
            }))),
        }
    }
}

/// Reader that returns an IO error after its content is exhausted.
struct FailingReader {
    inner: Cursor<Vec<u8>>,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.inner.read(buf)? {
            0 if !buf.is_empty() => {
                Err(io::Error::new(io::ErrorKind::Other, INJECTED_READ_ERROR))
            }
            n => Ok(n),
        }
    }
}
