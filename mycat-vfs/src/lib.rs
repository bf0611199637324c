//! mycat Virtual File System
//!
//! The seam through which named sources are inspected and opened.
//!
//! # Backends
//! - [`NativeFileSystem`]: the OS file system (used by the binary)
//! - [`MemoryFileSystem`]: in-memory entries, including directories,
//!   unreadable files and files that fail mid-read (used by tests)
//!
//! # Usage
//! ```rust,ignore
//! use mycat_vfs::{VirtualFileSystem, MemoryFileSystem};
//! use std::io::BufRead;
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::new();
//! fs.write_file(Path::new("/test.txt"), b"hello\n");
//! let mut reader = fs.open(Path::new("/test.txt")).unwrap();
//! let mut line = Vec::new();
//! reader.read_until(b'\n', &mut line).unwrap();
//! ```

mod error;
mod memory;
mod native;
mod r#trait;

pub use error::{describe_io_error, VfsError, VfsResult};
pub use memory::MemoryFileSystem;
pub use native::NativeFileSystem;
pub use r#trait::{EntryKind, VirtualFileSystem};
