//! ShortcutLinkResolver - turns a shortcut file into launch and icon paths
//!
//! A thin adapter over the shell's link reader. It reports what the
//! shortcut stores; existence of the icon file is checked by the caller.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::repositories::ShellLinkProvider;
use crate::domain::value_objects::IconLocation;

/// What a shortcut points at
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedShortcut {
    /// Launch target, if the shortcut has one
    pub target_path: Option<PathBuf>,
    /// Icon resource path, without the icon index
    pub icon_source_path: Option<PathBuf>,
}

/// Resolves shortcut files through a `ShellLinkProvider`
pub struct ShortcutLinkResolver<L: ShellLinkProvider> {
    provider: Arc<L>,
}

impl<L: ShellLinkProvider> ShortcutLinkResolver<L> {
    /// Create a resolver over a link provider
    pub fn new(provider: Arc<L>) -> Self {
        Self { provider }
    }

    /// Read the shortcut at `source_path`.
    ///
    /// The only failure is `LinkUnreadable`, raised by the provider.
    pub fn resolve(&self, source_path: &Path) -> Result<ResolvedShortcut, DomainError> {
        let metadata = self.provider.read_link(source_path)?;
        let location = IconLocation::parse(&metadata.icon_location);

        log::debug!(
            "Resolved {:?}: target={:?} icon={:?} (index {} ignored)",
            source_path,
            metadata.target_path,
            location.path,
            location.index
        );

        Ok(ResolvedShortcut {
            target_path: metadata.target_path,
            icon_source_path: location.path,
        })
    }
}
