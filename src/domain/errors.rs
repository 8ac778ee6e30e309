//! Domain layer error types
//!
//! Every registry operation reports one of these. None of them is fatal:
//! the controller turns each into a presentation update.

use std::path::PathBuf;

use thiserror::Error;

/// Main domain error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Shortcut file missing, corrupt, or not parseable by the shell
    #[error("Shortcut unreadable: {path}: {reason}")]
    LinkUnreadable { path: PathBuf, reason: String },

    /// The icon resource referenced by a shortcut does not exist, or the
    /// shortcut names no icon resource at all
    #[error("Icon source missing: {}", display_icon_path(.0))]
    IconSourceMissing(Option<PathBuf>),

    /// The icon resource exists but is not a decodable image
    #[error("Icon decode failed: {path}: {reason}")]
    IconDecodeFailed { path: PathBuf, reason: String },

    /// Rename destination already exists
    #[error("Rename conflict: {0} already exists")]
    RenameConflict(PathBuf),

    /// Filesystem failure while renaming
    #[error("Rename failed: {from} -> {to}: {reason}")]
    RenameIo {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },

    /// Rejected shortcut name
    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    /// Index does not address an entry
    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Launch requested before any selection
    #[error("No shortcut selected")]
    NothingSelected,
}

fn display_icon_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "<none>".to_string(),
    }
}

impl DomainError {
    /// Whether selection should degrade to the "icon not found" outcome
    pub fn is_icon_fallback(&self) -> bool {
        matches!(
            self,
            DomainError::LinkUnreadable { .. }
                | DomainError::IconSourceMissing(_)
                | DomainError::IconDecodeFailed { .. }
        )
    }
}
