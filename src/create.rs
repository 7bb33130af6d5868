//! File and directory creation wrappers.

use std::fs::{DirBuilder, File};
use std::path::Path;

use crate::error::{FsError, Result};

/// Create an empty file at `path`.
///
/// An existing file at `path` is truncated to zero bytes, matching the
/// open-for-write/close sequence this wraps. Parent directories are not
/// created.
pub fn create_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    File::create(path).map_err(|e| FsError::path("create file", path, e))?;
    tracing::debug!("created file {}", path.display());
    Ok(())
}

/// Create a directory at `path` with the given permission bits.
///
/// `bits` are raw octal permission bits (e.g. `0o755`); use
/// [`crate::permissions::to_bits`] to convert a digit-wise mode from
/// [`crate::permissions::calculate`]. With `recursive` set, missing parents
/// are created as well. On non-Unix platforms the mode is ignored.
pub fn make_directory(path: impl AsRef<Path>, bits: u32, recursive: bool) -> Result<()> {
    let path = path.as_ref();
    let mut builder = DirBuilder::new();
    builder.recursive(recursive);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(bits);
    }
    #[cfg(not(unix))]
    let _ = bits;
    builder
        .create(path)
        .map_err(|e| FsError::path("create directory", path, e))?;
    tracing::debug!("created directory {}", path.display());
    Ok(())
}
