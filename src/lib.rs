//! Gamebar library - shortcut registry and its adapters
//!
//! Import shell shortcut files, preview their icons, rename them on disk
//! and launch them. The binary in main.rs is a thin console shell over
//! the controller; everything else lives here so it can be tested without
//! a desktop.
//!
//! Layers, innermost first:
//! - **domain**: entities, value objects, repository traits and errors
//! - **application**: ports and the shortcut registry
//! - **adapters**: gateways, presenters, views and controllers
//! - **infrastructure**: file system, runtime and the composition root
//! - **shared**: configuration and logging

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Native shell integrations
#[cfg(windows)]
pub mod platform;
