//! Error types for root-relative browsing and mutation.

use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors surfaced by the browsing core.
///
/// The `Display` text is the message a caller layer can show to a user as is.
#[derive(Debug, Error)]
pub enum BrowseError {
    #[error("File or folder not found: {0}")]
    NotFound(PathBuf),

    #[error("{0} already exists, no action taken")]
    AlreadyExists(PathBuf),

    #[error("{0}")]
    UnsupportedType(String),

    #[error("{0}")]
    InvalidTarget(String),

    #[error("A folder must be empty before deletion. Use the empty folder method: {0}")]
    NotEmpty(PathBuf),

    #[error("File {path} is not valid UTF-8 text: {source}")]
    DecodeError {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Path escapes the browsing root: {0}")]
    OutOfScope(String),

    #[error("Filesystem error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl BrowseError {
    /// Wrap an OS error raised while touching `path`, given relative to the browsing root
    /// so messages never reveal where the root lives on the host.
    ///
    /// `NotFound` and `AlreadyExists` kinds raised late by the OS (another request won
    /// the race after our precondition check) map onto the typed variants.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "target vanished during operation");
                BrowseError::NotFound(path.to_path_buf())
            }
            io::ErrorKind::AlreadyExists => {
                tracing::warn!(path = %path.display(), "target appeared during operation");
                BrowseError::AlreadyExists(path.to_path_buf())
            }
            _ => BrowseError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Transport status hint for a caller layer mapping errors onto responses.
    pub fn status_code(&self) -> u16 {
        match self {
            BrowseError::NotFound(_) => 404,
            BrowseError::AlreadyExists(_)
            | BrowseError::UnsupportedType(_)
            | BrowseError::InvalidTarget(_)
            | BrowseError::NotEmpty(_) => 422,
            BrowseError::OutOfScope(_) => 400,
            BrowseError::DecodeError { .. }
            | BrowseError::Io { .. }
            | BrowseError::ConfigError(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, BrowseError>;
