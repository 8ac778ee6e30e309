//! Application Ports - Interfaces for external dependencies
//!
//! Ports define the interfaces that infrastructure must implement.

pub mod filesystem_port;
pub mod runtime_port;

pub use filesystem_port::{FileSystemError, FileSystemPort};
pub use runtime_port::{RecordingRuntimePort, RuntimeError, RuntimePort};
