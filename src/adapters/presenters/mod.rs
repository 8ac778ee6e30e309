//! Presenters - Format registry output for views

pub mod shortcut_presenter;

pub use shortcut_presenter::{RowViewModel, ShortcutPresenter, ViewUpdate};
