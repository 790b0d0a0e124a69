//! Structured error types shared across the crate.
//!
//! Every failure mode a caller might branch on gets its own variant, so
//! tests and the CLI layer can distinguish a user abort from a missing
//! path without string matching.

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// What a path was expected to be when validation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathKind::File => write!(f, "file"),
            PathKind::Directory => write!(f, "directory"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Source path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Source is not a {expected}: {}", .path.display())]
    WrongType { path: PathBuf, expected: PathKind },

    #[error("Source is neither a file nor a directory: {}", .0.display())]
    NotFileOrDirectory(PathBuf),

    #[error("Permission denied. Check read/write permissions for source and destination.")]
    PermissionDenied(#[source] io::Error),

    /// The user declined a confirmation prompt, or exhausted the allowed
    /// number of invalid responses.
    #[error("Aborted.")]
    Aborted,

    #[error("Unsupported operating system: {0}")]
    UnsupportedOs(String),

    #[error("Unsupported architecture: {0}")]
    UnsupportedArch(String),

    #[error("Could not determine home directory")]
    HomeDirUnavailable,

    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Split permission failures out of a generic I/O error so the CLI can
    /// report them distinctly.
    pub(crate) fn classify_io(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::PermissionDenied {
            Error::PermissionDenied(err)
        } else {
            Error::Io(err)
        }
    }

    /// True for user-initiated aborts, which are styled as warnings rather
    /// than errors.
    pub fn is_abort(&self) -> bool {
        matches!(self, Error::Aborted)
    }
}
