//! Controllers - Translate shell events into registry calls

pub mod console_command;
pub mod interaction_controller;

pub use console_command::{CommandError, ConsoleCommand, HELP};
pub use interaction_controller::{InteractionController, ShellEvent};
