//! Domain Repository Interfaces
//!
//! These are trait definitions only. Implementations belong in the
//! adapters/gateways layer.

pub mod icon_repository;
pub mod link_repository;

pub use icon_repository::{
    IconData, IconRepository, DEFAULT_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE,
};
pub use link_repository::{InMemoryLinkProvider, LinkMetadata, ShellLinkProvider};
