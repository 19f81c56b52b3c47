//! Phosphor binary.

use clap::Parser;
use phosphor::cli::{Cli, Commands, handle_play_command, handle_validate_command};
use phosphor::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Play {
            content,
            config,
            start,
            log_file,
        } => {
            let log_file = log_file.unwrap_or_else(logging::default_log_file);
            logging::init_file(&log_file)?;
            tracing::info!(log_file = %log_file.display(), "Starting Phosphor");
            handle_play_command(content, config, start)?
        }
        Commands::Validate {
            content,
            format,
            strict,
        } => {
            logging::init_stderr();
            handle_validate_command(content, format, strict)?
        }
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
