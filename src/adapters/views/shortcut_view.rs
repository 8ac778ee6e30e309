//! ShortcutView - Interface the presentation shell implements
//!
//! The view owns only what it draws. Row order is whatever the controller
//! tells it, which mirrors the registry.

use crate::adapters::presenters::RowViewModel;
use crate::domain::repositories::IconData;

/// Interface for the shortcut list and detail pane
pub trait ShortcutView {
    /// Append rows at the end of the list
    fn append_rows(&mut self, rows: Vec<RowViewModel>);

    /// Remove a row
    fn remove_row(&mut self, index: usize);

    /// Replace a row's text
    fn set_row_text(&mut self, index: usize, text: &str);

    /// Show a thumbnail in the detail pane
    fn set_icon(&mut self, icon: &IconData);

    /// Show text in the detail pane instead of a thumbnail
    fn set_icon_text(&mut self, text: &str);

    /// Blank the detail pane
    fn clear_icon(&mut self);

    /// Empty the rename field
    fn clear_rename_field(&mut self);

    /// Show an error message
    fn show_error(&mut self, message: &str);
}

/// What the detail pane currently shows
#[derive(Clone, Debug, Default, PartialEq)]
pub enum IconPane {
    /// Nothing selected yet
    #[default]
    Empty,
    /// A rendered thumbnail
    Icon(IconData),
    /// Fallback text
    Text(String),
}

/// In-memory view for tests and headless use
#[derive(Debug, Default)]
pub struct RecordingView {
    rows: Vec<String>,
    pane: IconPane,
    errors: Vec<String>,
    rename_field_clears: usize,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn pane(&self) -> &IconPane {
        &self.pane
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn rename_field_clears(&self) -> usize {
        self.rename_field_clears
    }
}

impl ShortcutView for RecordingView {
    fn append_rows(&mut self, rows: Vec<RowViewModel>) {
        self.rows.extend(rows.into_iter().map(|row| row.title));
    }

    fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    fn set_row_text(&mut self, index: usize, text: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            *row = text.to_string();
        }
    }

    fn set_icon(&mut self, icon: &IconData) {
        self.pane = IconPane::Icon(icon.clone());
    }

    fn set_icon_text(&mut self, text: &str) {
        self.pane = IconPane::Text(text.to_string());
    }

    fn clear_icon(&mut self) {
        self.pane = IconPane::Empty;
    }

    fn clear_rename_field(&mut self) {
        self.rename_field_clears += 1;
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
