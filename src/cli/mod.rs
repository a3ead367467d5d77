//! CLI command handlers
//!
//! This module contains the interactive menu and the one-shot commands,
//! bridging user input with the service layer.

pub mod commands;
pub mod menu;
pub mod prompt;

pub use commands::{handle_command, run_menu, Commands};
pub use menu::MenuShell;
pub use prompt::Prompter;
