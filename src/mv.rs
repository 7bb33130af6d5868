//! Rename, copy and move wrappers.

use std::fs;
use std::io;
use std::path::Path;

use fs_extra::file::{copy as file_copy, CopyOptions};

use crate::error::{FsError, Result};

/// Rename `old` to `new` via the OS rename primitive.
///
/// Both arguments are full paths, so this also moves across directories on
/// the same filesystem. No cross-device fallback is attempted.
pub fn rename(old: impl AsRef<Path>, new: impl AsRef<Path>) -> Result<()> {
    let (old, new) = (old.as_ref(), new.as_ref());
    fs::rename(old, new).map_err(|e| FsError::src_dst("rename", old, new, e))?;
    tracing::debug!("renamed {} -> {}", old.display(), new.display());
    Ok(())
}

/// Copy a single file from `src` to `dst`, overwriting an existing
/// destination.
pub fn copy_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.buffer_size = 64 * 1024;
    file_copy(src, dst, &options)
        .map_err(|e| FsError::src_dst("copy", src, dst, io::Error::other(e)))?;
    tracing::debug!("copied {} -> {}", src.display(), dst.display());
    Ok(())
}

/// Move a file from `src` to `dst`.
///
/// NOTE: this delegates to [`copy_file`] and does not delete the source; the
/// source path is intact after a successful call. This mirrors the behavior
/// of the system this crate replaces and is kept deliberately rather than
/// silently turned into a true move.
pub fn move_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    copy_file(src, dst)
}
