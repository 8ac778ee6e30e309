//! Domain Entities - Core business objects
//!
//! Entities are objects with a distinct identity that persists over time.

pub mod shortcut_entry;

pub use shortcut_entry::ShortcutEntry;
