//! ShellLinkProvider - interface to the OS shell's shortcut reader
//!
//! Providers only report what the shortcut file stores. They never check
//! whether the referenced files exist.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::errors::DomainError;

/// Raw metadata read from a shortcut file
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkMetadata {
    /// Launch target, if the shortcut points at a file
    pub target_path: Option<PathBuf>,
    /// Composite `"<path>,<index>"` icon location
    pub icon_location: String,
}

impl LinkMetadata {
    /// Create metadata from a target and an icon-location string
    pub fn new(target_path: Option<PathBuf>, icon_location: impl Into<String>) -> Self {
        Self {
            target_path,
            icon_location: icon_location.into(),
        }
    }
}

/// Reads shortcut files
pub trait ShellLinkProvider: Send + Sync {
    /// Read a shortcut file, failing with `LinkUnreadable`
    fn read_link(&self, lnk_path: &Path) -> Result<LinkMetadata, DomainError>;
}

/// Provider backed by a fixed table, for tests and headless runs
#[derive(Debug, Default)]
pub struct InMemoryLinkProvider {
    links: HashMap<PathBuf, LinkMetadata>,
}

impl InMemoryLinkProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: register a shortcut
    pub fn with_link(mut self, lnk_path: impl Into<PathBuf>, metadata: LinkMetadata) -> Self {
        self.insert(lnk_path, metadata);
        self
    }

    /// Register a shortcut
    pub fn insert(&mut self, lnk_path: impl Into<PathBuf>, metadata: LinkMetadata) {
        self.links.insert(lnk_path.into(), metadata);
    }
}

impl ShellLinkProvider for InMemoryLinkProvider {
    fn read_link(&self, lnk_path: &Path) -> Result<LinkMetadata, DomainError> {
        self.links
            .get(lnk_path)
            .cloned()
            .ok_or_else(|| DomainError::LinkUnreadable {
                path: lnk_path.to_path_buf(),
                reason: "unknown shortcut".to_string(),
            })
    }
}
