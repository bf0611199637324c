//! Pre-acquisition access check for named sources

use crate::error::SourceError;
use mycat_vfs::{EntryKind, VfsError, VirtualFileSystem};
use std::path::Path;
use tracing::trace;

/// Verify that `path` exists, is not a directory and is readable.
///
/// Standard input never goes through this check.
pub fn check_access(fs: &dyn VirtualFileSystem, path: &Path) -> Result<(), SourceError> {
    let name = path.display().to_string();
    let unavailable = |source: VfsError| SourceError::Unavailable {
        name: name.clone(),
        source,
    };

    match fs.stat(path).map_err(unavailable)? {
        EntryKind::Directory => {
            return Err(unavailable(VfsError::IsADirectory {
                path: path.to_string_lossy().to_string(),
            }))
        }
        EntryKind::File => {}
    }

    fs.check_readable(path).map_err(unavailable)?;

    trace!(target: "mycat::access", path = %name, "access ok");
    Ok(())
}
