//! ShortcutEntry entity - one imported shortcut file
//!
//! The source path is the entry's identity inside the registry. Everything
//! else is derived from it or filled in lazily on selection.

use std::path::{Path, PathBuf};

use crate::domain::repositories::icon_repository::IconData;

/// An imported shortcut
#[derive(Clone, Debug, PartialEq)]
pub struct ShortcutEntry {
    /// Path of the shortcut file itself (unique key)
    pub source_path: PathBuf,
    /// Name shown in the list, the file stem at import time
    pub display_name: String,
    /// Icon resource resolved on the last selection
    pub icon_source_path: Option<PathBuf>,
    /// Thumbnail rendered on the last successful selection
    pub thumbnail: Option<IconData>,
}

impl ShortcutEntry {
    /// Create an entry for a freshly imported shortcut file
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        let source_path = source_path.into();
        let display_name = Self::derive_display_name(&source_path);

        Self {
            source_path,
            display_name,
            icon_source_path: None,
            thumbnail: None,
        }
    }

    /// Filename without extension
    pub fn derive_display_name(path: &Path) -> String {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Filename including extension, as shown in list rows
    pub fn file_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Point the entry at its renamed file and drop cached icon state
    pub fn apply_rename(&mut self, new_path: PathBuf) {
        self.display_name = Self::derive_display_name(&new_path);
        self.source_path = new_path;
        self.invalidate_icon();
    }

    /// Forget the resolved icon so the next selection reads the shortcut again
    pub fn invalidate_icon(&mut self) {
        self.icon_source_path = None;
        self.thumbnail = None;
    }

    /// Whether a thumbnail has been rendered since import or the last rename
    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = ShortcutEntry::new("C:/G/Chess.lnk");

        assert_eq!(entry.source_path, PathBuf::from("C:/G/Chess.lnk"));
        assert_eq!(entry.display_name, "Chess");
        assert_eq!(entry.file_name(), "Chess.lnk");
        assert!(entry.icon_source_path.is_none());
        assert!(!entry.has_thumbnail());
    }

    #[test]
    fn test_display_name_keeps_inner_dots() {
        let entry = ShortcutEntry::new("/games/Half-Life 2.Episode One.lnk");
        assert_eq!(entry.display_name, "Half-Life 2.Episode One");
    }

    #[test]
    fn test_apply_rename_invalidates_icon() {
        let mut entry = ShortcutEntry::new("/games/Chess.lnk");
        entry.icon_source_path = Some(PathBuf::from("/games/chess.ico"));
        entry.thumbnail = Some(IconData::placeholder(4, 4, 0, 0, 0));

        entry.apply_rename(PathBuf::from("/games/ChessPro.lnk"));

        assert_eq!(entry.source_path, PathBuf::from("/games/ChessPro.lnk"));
        assert_eq!(entry.display_name, "ChessPro");
        assert!(entry.icon_source_path.is_none());
        assert!(!entry.has_thumbnail());
    }
}
