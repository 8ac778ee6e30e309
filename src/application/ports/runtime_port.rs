//! RuntimePort - interface for process execution
//!
//! Launching hands a file to the OS default handler. Whatever the launched
//! program does afterwards is not observed.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Runtime operation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Failed to spawn the opener process
    SpawnError(String),
    /// The OS shell refused the open request
    ShellError(String),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeError::SpawnError(s) => write!(f, "Spawn error: {}", s),
            RuntimeError::ShellError(s) => write!(f, "Shell error: {}", s),
        }
    }
}

impl std::error::Error for RuntimeError {}

/// Port interface for process execution
pub trait RuntimePort: Send + Sync {
    /// Open a file with its default application
    fn open_file(&self, path: &Path) -> Result<(), RuntimeError>;
}

/// A runtime port that records requests instead of launching anything
#[derive(Debug, Default)]
pub struct RecordingRuntimePort {
    opened: Mutex<Vec<PathBuf>>,
}

impl RecordingRuntimePort {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths passed to `open_file`, oldest first
    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl RuntimePort for RecordingRuntimePort {
    fn open_file(&self, path: &Path) -> Result<(), RuntimeError> {
        if let Ok(mut guard) = self.opened.lock() {
            guard.push(path.to_path_buf());
        }
        Ok(())
    }
}
