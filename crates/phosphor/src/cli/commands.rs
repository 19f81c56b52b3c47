//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Phosphor - terminal narratives with CRT-style reveal effects.
#[derive(Parser, Debug)]
#[command(name = "phosphor")]
#[command(about = "Play and validate terminal narratives")]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a content document in the terminal
    Play {
        /// Path to the content JSON file
        content: PathBuf,

        /// Path to a configuration file (defaults to ./phosphor.toml, then the user config dir)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Screen to start on (overrides the configured start screen)
        #[arg(short, long)]
        start: Option<String>,

        /// Where to write logs while the terminal is in use
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Parse a content document and report dropped records
    Validate {
        /// Path to the content JSON file
        content: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: ValidationOutputFormat,

        /// Exit with code 2 when any record was dropped
        #[arg(long)]
        strict: bool,
    },
}

/// Output format for validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValidationOutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
