//! Removal of files and (empty) directories.

use std::fs;
use std::path::Path;

use crate::error::{FsError, Result};

/// Remove the file or directory at `path`.
///
/// Regular files are unlinked; directories are removed with the
/// non-recursive rmdir primitive, so a non-empty directory is an error. A
/// path that is neither a file nor a directory (including a path that does
/// not exist) is also an error, so callers can detect double removal.
pub fn remove(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if path.is_file() {
        fs::remove_file(path).map_err(|e| FsError::path("remove file", path, e))?;
    } else if path.is_dir() {
        fs::remove_dir(path).map_err(|e| FsError::path("remove directory", path, e))?;
    } else {
        return Err(FsError::Message(format!(
            "cannot remove `{}`: not a file or directory",
            path.display()
        )));
    }

    tracing::debug!("removed {}", path.display());
    Ok(())
}
