//! Watch and scan error types.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can abort a poll cycle.
#[derive(Debug, Error)]
pub enum WatchError {
    /// The watched directory cannot be listed. Recoverable: the outer
    /// driver retries after a backoff.
    #[error("Cannot list watch directory {path}: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// IO error while iterating directory entries
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors scanning a single tracked file. Never fatal to the cycle:
/// the file is skipped and its offset left unchanged.
#[derive(Debug, Error)]
pub enum ScanError {
    /// File disappeared between the directory listing and the open
    #[error("File vanished before scan: {0}")]
    FileVanished(PathBuf),

    /// Insufficient permissions to read the file
    #[error("Access denied reading {0}")]
    AccessDenied(PathBuf),

    /// Any other IO error while reading the file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Classify an IO error raised while opening or reading `path`.
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => ScanError::FileVanished(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => ScanError::AccessDenied(path.to_path_buf()),
            _ => ScanError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}
