//! Editor error type

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure of a file edit. Content problems never surface here; only I/O
/// failures and bad line addressing do.
#[derive(Error, Debug)]
pub enum EditError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Permission denied. Please check file permissions: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(PathBuf),

    #[error("Failed to write to configuration file: {0}")]
    WriteError(PathBuf),

    #[error("Invalid line number {line} (file has {line_count} lines)")]
    InvalidLineNumber { line: usize, line_count: usize },

    #[error("Failed to create backup of {0}")]
    BackupFailed(PathBuf),

    #[error("{0}")]
    Unknown(String),
}

impl EditError {
    /// Classify an error raised while reading `path`.
    pub(crate) fn from_read(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => EditError::FileNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => EditError::PermissionDenied(path.to_path_buf()),
            _ => EditError::ReadError(path.to_path_buf()),
        }
    }

    /// Classify an error raised while writing `path`.
    pub(crate) fn from_write(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => EditError::PermissionDenied(path.to_path_buf()),
            _ => EditError::WriteError(path.to_path_buf()),
        }
    }
}
