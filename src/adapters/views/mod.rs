//! Views - View interfaces and implementations

pub mod console_view;
pub mod shortcut_view;

pub use console_view::ConsoleView;
pub use shortcut_view::{IconPane, RecordingView, ShortcutView};
