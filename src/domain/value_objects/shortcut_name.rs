//! ShortcutName value object - a validated rename target
//!
//! Names are the base part of a shortcut filename. The shortcut extension
//! is appended when the name is turned into a path.

use std::path::{Path, PathBuf};

use crate::domain::errors::DomainError;

/// A trimmed, non-empty base filename
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortcutName(String);

impl ShortcutName {
    /// Validate user input.
    ///
    /// Separators and `.`/`..` would move the file out of its directory,
    /// so they are refused here; anything else the filesystem dislikes is
    /// reported by the rename itself.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let name = input.trim();

        if name.is_empty()
            || name == "."
            || name == ".."
            || name.chars().any(|c| c == '/' || c == '\\' || c.is_control())
        {
            return Err(DomainError::InvalidName(input.to_string()));
        }

        Ok(Self(name.to_string()))
    }

    /// Path of a sibling of `current` named `<name>.<extension>`
    pub fn sibling_path(&self, current: &Path, extension: &str) -> PathBuf {
        let file_name = format!("{}.{}", self.0, extension);
        match current.parent() {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}

impl std::fmt::Display for ShortcutName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
