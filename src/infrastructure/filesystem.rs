//! FileSystem infrastructure - File system operations

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::application::ports::filesystem_port::{FileSystemError, FileSystemPort};

/// Standard file system implementation
#[derive(Debug, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Create a new standard file system
    pub fn new() -> Self {
        Self
    }

    fn map_rename_error(err: std::io::Error, from: &Path, to: &Path) -> FileSystemError {
        match err.kind() {
            ErrorKind::NotFound => FileSystemError::NotFound(from.to_path_buf()),
            ErrorKind::PermissionDenied => FileSystemError::PermissionDenied(from.to_path_buf()),
            ErrorKind::AlreadyExists => FileSystemError::AlreadyExists(to.to_path_buf()),
            _ => FileSystemError::from(err),
        }
    }
}

impl FileSystemPort for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        // Dangling symlinks still occupy the name
        fs::symlink_metadata(path).is_ok()
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), FileSystemError> {
        // fs::rename replaces existing files on Unix
        if self.exists(to) {
            return Err(FileSystemError::AlreadyExists(to.to_path_buf()));
        }

        fs::rename(from, to).map_err(|e| Self::map_rename_error(e, from, to))
    }
}
