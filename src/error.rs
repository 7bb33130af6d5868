use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the filesystem operation wrappers in this crate.
#[derive(Error, Debug)]
pub enum FsError {
    /// An operation on a single path failed.
    #[error("{op} failed on `{path}`: {source}")]
    Path {
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    /// An operation involving a source and a destination failed.
    #[error("{op} failed from `{src}` to `{dst}`: {source}")]
    SrcDst {
        op: &'static str,
        src: PathBuf,
        dst: PathBuf,
        source: io::Error,
    },

    /// A precondition failed before any OS call was made.
    #[error("{0}")]
    Message(String),
}

impl FsError {
    pub(crate) fn path(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        FsError::Path {
            op,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn src_dst(
        op: &'static str,
        src: impl Into<PathBuf>,
        dst: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        FsError::SrcDst {
            op,
            src: src.into(),
            dst: dst.into(),
            source,
        }
    }
}

impl From<String> for FsError {
    fn from(s: String) -> Self {
        FsError::Message(s)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FsError>;
