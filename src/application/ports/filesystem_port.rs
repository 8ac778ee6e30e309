//! FileSystemPort - interface for file system operations
//!
//! The registry only needs to probe paths and move shortcut files.

use std::path::{Path, PathBuf};

/// File system operation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSystemError {
    /// File not found
    NotFound(PathBuf),
    /// Destination already exists
    AlreadyExists(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// IO error
    IoError(String),
}

impl std::fmt::Display for FileSystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileSystemError::NotFound(p) => write!(f, "File not found: {}", p.display()),
            FileSystemError::AlreadyExists(p) => write!(f, "Already exists: {}", p.display()),
            FileSystemError::PermissionDenied(p) => {
                write!(f, "Permission denied: {}", p.display())
            }
            FileSystemError::IoError(s) => write!(f, "IO error: {}", s),
        }
    }
}

impl std::error::Error for FileSystemError {}

impl From<std::io::Error> for FileSystemError {
    fn from(err: std::io::Error) -> Self {
        FileSystemError::IoError(err.to_string())
    }
}

/// Port interface for file system operations
pub trait FileSystemPort: Send + Sync {
    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Move `from` to `to`, refusing to overwrite an existing `to`
    fn rename(&self, from: &Path, to: &Path) -> Result<(), FileSystemError>;
}
