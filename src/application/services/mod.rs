//! Application Services - Coordination and management services
//!
//! These services own application state and coordinate the domain's
//! repositories and the application ports.

pub mod link_resolver;
pub mod shortcut_registry;

pub use link_resolver::{ResolvedShortcut, ShortcutLinkResolver};
pub use shortcut_registry::{
    IconDecode, RegistryOptions, RenderedIcon, SelectionOutcome, SelectionTicket,
    ShortcutRegistry, DEFAULT_SHORTCUT_EXTENSION,
};
