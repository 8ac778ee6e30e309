//! CompositionRoot - Dependency Injection Container
//!
//! Wires the shortcut registry to its gateways and ports, and the
//! controller to the registry.

use std::sync::Arc;

use crate::adapters::controllers::InteractionController;
use crate::adapters::gateways::ImageIconGateway;
use crate::adapters::presenters::ShortcutPresenter;
use crate::application::services::ShortcutRegistry;
use crate::domain::repositories::IconRepository;
use crate::infrastructure::filesystem::StdFileSystem;
use crate::infrastructure::runtime::ShellRuntime;
use crate::shared::config::Config;

/// Shortcut reader for the current platform
#[cfg(windows)]
pub type DefaultLinkProvider = crate::platform::win32::ComLinkProvider;

/// Shortcut reader for the current platform
#[cfg(not(windows))]
pub type DefaultLinkProvider = crate::adapters::gateways::LnkLinkGateway;

/// Controller with production dependencies
pub type AppController =
    InteractionController<DefaultLinkProvider, ImageIconGateway, StdFileSystem, ShellRuntime>;

/// Application composition root - owns all dependencies
pub struct CompositionRoot {
    pub controller: AppController,
    pub config: Config,
}

impl CompositionRoot {
    /// Create a new composition root with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: Config) -> Self {
        // Create infrastructure
        let file_system = Arc::new(StdFileSystem::new());
        let runtime = Arc::new(ShellRuntime::new());

        // Create gateways
        let links = Arc::new(DefaultLinkProvider::new());
        let icons = Arc::new(ImageIconGateway::new());

        let presenter = ShortcutPresenter::new()
            .with_icon_not_found_text(config.icon_not_found_text.clone())
            .with_placeholder(icons.default_icon(config.thumbnail_size));

        let registry = ShortcutRegistry::new(links, icons, file_system, runtime)
            .with_options(config.registry_options());

        Self {
            controller: InteractionController::new(registry, presenter),
            config,
        }
    }
}

impl Default for CompositionRoot {
    fn default() -> Self {
        Self::new()
    }
}
