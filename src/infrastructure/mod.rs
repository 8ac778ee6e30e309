//! Infrastructure Layer
//!
//! This layer contains concrete implementations of the application ports.
//! It contains:
//! - **FileSystem**: Rename and existence checks on the real file system
//! - **Runtime**: Opening shortcuts with the desktop shell
//! - **CompositionRoot**: Dependency injection container
//!
//! # Clean Architecture Rules
//! - Implements ports defined in application layer
//! - No domain logic here - only technical implementations

pub mod composition_root;
pub mod filesystem;
pub mod runtime;

pub use composition_root::{AppController, CompositionRoot, DefaultLinkProvider};
pub use filesystem::StdFileSystem;
pub use runtime::ShellRuntime;
