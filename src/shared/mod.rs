//! Shared Utilities Module
//!
//! Contains utilities that are shared across layers.

pub mod config;
pub mod logging;

pub use config::{Config, ConfigError, LogConfig};
