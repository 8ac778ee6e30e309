//! Interface Adapters Layer
//!
//! This layer converts data between the registry and the outside world.
//! It contains:
//! - **Controllers**: Handle shell events, translate to registry calls
//! - **Presenters**: Format registry output for display
//! - **Gateways**: Shortcut and icon repository implementations
//! - **Views**: The interface a presentation shell implements

pub mod controllers;
pub mod gateways;
pub mod presenters;
pub mod views;

pub use controllers::*;
pub use gateways::*;
pub use presenters::*;
pub use views::*;
