//! Domain Layer - Pure business logic with zero framework dependencies
//!
//! This layer contains:
//! - **Entities**: Core business objects (ShortcutEntry)
//! - **Value Objects**: Immutable values (IconLocation, ShortcutName)
//! - **Repository Interfaces**: Abstractions for the shell and icon decoding
//! - **Domain Errors**: Error types for domain operations

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
