//! Error types for filesystem operations

use std::path::{Path, PathBuf};

/// Result type for filesystem operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target project directory already exists
    #[error("Directory already exists: {path}")]
    DirectoryExists { path: PathBuf },

    /// I/O failure at a specific path
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Advisory lock could not be acquired
    #[error("Failed to lock file: {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
