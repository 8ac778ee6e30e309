//! Domain Value Objects - Immutable values that describe characteristics
//!
//! Value objects have no identity and are compared by their values.

pub mod icon_location;
pub mod shortcut_name;

pub use icon_location::IconLocation;
pub use shortcut_name::ShortcutName;
