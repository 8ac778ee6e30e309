//! Win32 platform implementation

pub mod shortcut;

pub use shortcut::{parse_lnk, ComLinkProvider, ShortcutInfo};
