//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the phosphor binary.

mod commands;
mod play;
mod validate;

pub use commands::{Cli, Commands, ValidationOutputFormat};
pub use play::{CONFIG_FILE, handle_play_command, load_config, locate_config};
pub use validate::{ValidationReport, handle_validate_command, to_json, validate_document};
