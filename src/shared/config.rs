//! Application Configuration
//!
//! Read from `gamebar.toml`. Every key is optional; a missing file means
//! defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::adapters::presenters::shortcut_presenter::DEFAULT_ICON_NOT_FOUND_TEXT;
use crate::application::services::shortcut_registry::{
    RegistryOptions, DEFAULT_SHORTCUT_EXTENSION,
};
use crate::domain::repositories::{DEFAULT_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE};

/// Config file name
pub const CONFIG_FILE_NAME: &str = "gamebar.toml";

/// Application configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Edge length of rendered thumbnails
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail_size: u32,

    /// Shortcut file extension, without the dot
    #[serde(default = "default_shortcut_extension")]
    pub shortcut_extension: String,

    /// Text shown when a shortcut's icon cannot be rendered
    #[serde(default = "default_icon_not_found_text")]
    pub icon_not_found_text: String,

    /// Logging section
    #[serde(default)]
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// env_logger filter, e.g. "info" or "gamebar=debug"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file; defaults to gamebar.log next to the executable
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Log to stderr instead of a file
    #[serde(default)]
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
            stderr: false,
        }
    }
}

fn default_thumbnail_size() -> u32 {
    DEFAULT_THUMBNAIL_SIZE
}

fn default_shortcut_extension() -> String {
    DEFAULT_SHORTCUT_EXTENSION.to_string()
}

fn default_icon_not_found_text() -> String {
    DEFAULT_ICON_NOT_FOUND_TEXT.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thumbnail_size: default_thumbnail_size(),
            shortcut_extension: default_shortcut_extension(),
            icon_not_found_text: default_icon_not_found_text(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Find gamebar.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: <config dir>/gamebar, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("gamebar").join(CONFIG_FILE_NAME)),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME))),
            Some(PathBuf::from(CONFIG_FILE_NAME)),
        ];

        candidates.into_iter().flatten().find(|candidate| candidate.exists())
    }

    /// Load configuration, returning defaults if no file is found
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate TOML content
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the registry cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_THUMBNAIL_SIZE).contains(&self.thumbnail_size) {
            return Err(ConfigError::Invalid(format!(
                "thumbnail_size must be between 1 and {}, got {}",
                MAX_THUMBNAIL_SIZE, self.thumbnail_size
            )));
        }

        let ext = self.shortcut_extension.trim_start_matches('.');
        if ext.is_empty() || ext.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "shortcut_extension {:?} is not a file extension",
                self.shortcut_extension
            )));
        }

        Ok(())
    }

    /// Registry options derived from this configuration
    pub fn registry_options(&self) -> RegistryOptions {
        RegistryOptions {
            thumbnail_size: self.thumbnail_size,
            shortcut_extension: self.shortcut_extension.trim_start_matches('.').to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(toml::de::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(s) => write!(f, "Invalid config: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::ParseError(e)
    }
}
