//! ShortcutPresenter - Formats registry results as view updates
//!
//! Every registry outcome maps to a list of `ViewUpdate`s. Applying them in
//! order keeps the view's rows in the same order as the registry's entries.

use crate::adapters::views::ShortcutView;
use crate::application::services::RenderedIcon;
use crate::domain::entities::ShortcutEntry;
use crate::domain::errors::DomainError;
use crate::domain::repositories::{IconData, DEFAULT_THUMBNAIL_SIZE};

/// Default text shown where an icon could not be rendered
pub const DEFAULT_ICON_NOT_FOUND_TEXT: &str = "icon not found";

/// View model for a list row
#[derive(Clone, Debug, PartialEq)]
pub struct RowViewModel {
    /// Row text (shortcut file name)
    pub title: String,
    /// Placeholder icon until the row is selected
    pub icon: IconData,
}

/// A single change to apply to the view
#[derive(Clone, Debug, PartialEq)]
pub enum ViewUpdate {
    /// Append rows at the end of the list
    AppendRows(Vec<RowViewModel>),
    /// Remove the row at an index
    RemoveRow(usize),
    /// Replace a row's text
    SetRowText { index: usize, text: String },
    /// Show a thumbnail in the detail pane
    SetIcon(IconData),
    /// Show text instead of a thumbnail
    SetIconText(String),
    /// Blank the detail pane
    ClearIcon,
    /// Empty the rename text field
    ClearRenameField,
    /// Tell the user something went wrong
    ShowError(String),
}

impl ViewUpdate {
    /// Apply this update to a view
    pub fn apply_to<V: ShortcutView + ?Sized>(self, view: &mut V) {
        match self {
            ViewUpdate::AppendRows(rows) => view.append_rows(rows),
            ViewUpdate::RemoveRow(index) => view.remove_row(index),
            ViewUpdate::SetRowText { index, text } => view.set_row_text(index, &text),
            ViewUpdate::SetIcon(icon) => view.set_icon(&icon),
            ViewUpdate::SetIconText(text) => view.set_icon_text(&text),
            ViewUpdate::ClearIcon => view.clear_icon(),
            ViewUpdate::ClearRenameField => view.clear_rename_field(),
            ViewUpdate::ShowError(message) => view.show_error(&message),
        }
    }
}

/// Presenter for shortcut list and detail pane
pub struct ShortcutPresenter {
    icon_not_found_text: String,
    placeholder: IconData,
}

impl ShortcutPresenter {
    /// Create a presenter with default texts
    pub fn new() -> Self {
        Self {
            icon_not_found_text: DEFAULT_ICON_NOT_FOUND_TEXT.to_string(),
            placeholder: IconData::placeholder(
                DEFAULT_THUMBNAIL_SIZE,
                DEFAULT_THUMBNAIL_SIZE,
                128,
                128,
                128,
            ),
        }
    }

    /// Builder pattern: set the fallback text
    pub fn with_icon_not_found_text(mut self, text: impl Into<String>) -> Self {
        self.icon_not_found_text = text.into();
        self
    }

    /// Builder pattern: set the placeholder row icon
    pub fn with_placeholder(mut self, icon: IconData) -> Self {
        self.placeholder = icon;
        self
    }

    /// Fallback text for unrenderable icons
    pub fn icon_not_found_text(&self) -> &str {
        &self.icon_not_found_text
    }

    /// Create a row view model from an entry
    pub fn row(&self, entry: &ShortcutEntry) -> RowViewModel {
        RowViewModel {
            title: entry.file_name(),
            icon: self.placeholder.clone(),
        }
    }

    /// Rows for newly imported entries
    pub fn present_import(&self, added: &[ShortcutEntry]) -> Vec<ViewUpdate> {
        if added.is_empty() {
            return Vec::new();
        }
        vec![ViewUpdate::AppendRows(
            added.iter().map(|entry| self.row(entry)).collect(),
        )]
    }

    /// Detail pane content for a selection
    pub fn present_icon(&self, rendered: RenderedIcon) -> Vec<ViewUpdate> {
        match rendered {
            RenderedIcon::Thumbnail(icon) => vec![ViewUpdate::SetIcon(icon)],
            RenderedIcon::NotFound(_) => {
                vec![ViewUpdate::SetIconText(self.icon_not_found_text.clone())]
            }
        }
    }

    /// Row text refresh after a rename
    pub fn present_rename(&self, index: usize, entry: &ShortcutEntry) -> Vec<ViewUpdate> {
        vec![
            ViewUpdate::SetRowText {
                index,
                text: entry.file_name(),
            },
            ViewUpdate::ClearRenameField,
        ]
    }

    /// Row removal
    pub fn present_remove(&self, index: usize, was_selected: bool) -> Vec<ViewUpdate> {
        let mut updates = vec![ViewUpdate::RemoveRow(index)];
        if was_selected {
            updates.push(ViewUpdate::ClearIcon);
        }
        updates
    }

    /// A failed registry call
    pub fn present_error(&self, error: &DomainError) -> Vec<ViewUpdate> {
        let message = match error {
            DomainError::RenameConflict(path) => format!(
                "A shortcut named {:?} already exists",
                path.file_name().unwrap_or_default()
            ),
            DomainError::InvalidName(_) => "Enter a new name for the shortcut".to_string(),
            other => other.to_string(),
        };
        vec![ViewUpdate::ShowError(message)]
    }
}

impl Default for ShortcutPresenter {
    fn default() -> Self {
        Self::new()
    }
}
