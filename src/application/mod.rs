//! Application Layer - Services and ports
//!
//! This layer orchestrates domain entities and defines the workflows of the
//! shortcut manager.
//! It contains:
//! - **Ports**: Interfaces for external dependencies (file system, runtime)
//! - **Services**: The link resolver and the shortcut registry
//!
//! # Clean Architecture Rules
//! - Depends only on the domain layer
//! - Defines ports that infrastructure implements
//! - Contains no framework-specific code

pub mod ports;
pub mod services;

// Re-export commonly used types
pub use ports::*;
pub use services::*;
