//! Existence, type and size queries.
//!
//! The boolean predicates here never fail: a missing or unreadable path is
//! simply `false`. Only [`file_type`] and [`file_size`], which have to
//! distinguish "absent" from "present but odd", return errors.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{FsError, Result};

/// Classification of a filesystem path's kind.
///
/// `Display` renders the classic short names: `fifo`, `char`, `dir`,
/// `block`, `link`, `file`, `socket`, `unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Fifo,
    Char,
    Directory,
    Block,
    Symlink,
    File,
    Socket,
    Unknown,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileKind::Fifo => "fifo",
            FileKind::Char => "char",
            FileKind::Directory => "dir",
            FileKind::Block => "block",
            FileKind::Symlink => "link",
            FileKind::File => "file",
            FileKind::Socket => "socket",
            FileKind::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Return `true` if `path` exists (following symlinks).
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Return `true` if `path` is a directory.
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// Return `true` if `path` is a regular file.
pub fn is_file(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Return `true` if the current user may execute `path`.
///
/// Uses the `access(2)` check on Unix. On other platforms executability is
/// not modelled and this returns `false`.
pub fn is_executable(path: impl AsRef<Path>) -> bool {
    #[cfg(unix)]
    {
        use nix::unistd::{access, AccessFlags};
        access(path.as_ref(), AccessFlags::X_OK).is_ok()
    }
    #[cfg(not(unix))]
    {
        let _ = path;
        false
    }
}

/// Classify `path` without following a trailing symlink.
///
/// Fails with the uniform error when the underlying stat call fails (for
/// example when the path does not exist).
pub fn file_type(path: impl AsRef<Path>) -> Result<FileKind> {
    let path = path.as_ref();
    let meta = fs::symlink_metadata(path).map_err(|e| FsError::path("stat", path, e))?;
    let ft = meta.file_type();

    if ft.is_symlink() {
        return Ok(FileKind::Symlink);
    }
    if ft.is_dir() {
        return Ok(FileKind::Directory);
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        if ft.is_fifo() {
            return Ok(FileKind::Fifo);
        }
        if ft.is_char_device() {
            return Ok(FileKind::Char);
        }
        if ft.is_block_device() {
            return Ok(FileKind::Block);
        }
        if ft.is_socket() {
            return Ok(FileKind::Socket);
        }
    }

    if ft.is_file() {
        Ok(FileKind::File)
    } else {
        Ok(FileKind::Unknown)
    }
}

/// Return the size of the file at `path` in bytes.
///
/// A path that does not exist is an error. A path that exists but whose
/// metadata cannot be read yields `Ok(None)` so callers can distinguish
/// "absent" from "size unavailable".
pub fn file_size(path: impl AsRef<Path>) -> Result<Option<u64>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FsError::Message(format!(
            "cannot size `{}`: file does not exist",
            path.display()
        )));
    }
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.len())),
        Err(e) => {
            tracing::warn!("size of {} unavailable: {}", path.display(), e);
            Ok(None)
        }
    }
}
