//! Platform abstraction layer
//!
//! Native shell integrations. Only Windows has one; other targets read
//! shortcuts with the portable gateway.

#[cfg(target_os = "windows")]
pub mod win32;

#[cfg(target_os = "windows")]
pub use win32::*;
