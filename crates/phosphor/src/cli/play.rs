//! Play command handler.

use phosphor_error::{ConfigError, PhosphorResult};
use phosphor_narrative::{ContentDocument, Narrative, PhosphorConfig};
use std::path::{Path, PathBuf};

/// Config file name looked up in the working and user config directories.
pub const CONFIG_FILE: &str = "phosphor.toml";

/// First existing config file: the explicit path, `phosphor.toml` in `cwd`,
/// then `phosphor/phosphor.toml` in the user config directory.
pub fn locate_config(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = cwd.join(CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("phosphor").join(CONFIG_FILE))
        .filter(|path| path.is_file())
}

/// Loads the located config, or the defaults when there is none.
#[tracing::instrument]
pub fn load_config(explicit: Option<&Path>) -> PhosphorResult<PhosphorConfig> {
    let cwd = std::env::current_dir()
        .map_err(|e| ConfigError::new(format!("Failed to read working directory: {}", e)))?;

    match locate_config(explicit, &cwd) {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading configuration");
            PhosphorConfig::from_file(path)
        }
        None => {
            tracing::info!("No configuration file found, using defaults");
            Ok(PhosphorConfig::default())
        }
    }
}

/// Handles the play command, returning the process exit code.
#[tracing::instrument(skip_all, fields(content = %content.display()))]
pub fn handle_play_command(
    content: PathBuf,
    config: Option<PathBuf>,
    start: Option<String>,
) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_config(config.as_deref())?;

    let document = match ContentDocument::from_file(&content) {
        Ok(document) => document,
        Err(e) => {
            tracing::error!(error = %e, "Content document is unreadable");
            eprintln!("{}", e);
            return Ok(1);
        }
    };

    let mut narrative = Narrative::initialize(&document).with_unlock_policy(config.unlock_policy());
    for issue in narrative.issues() {
        tracing::warn!(issue = %issue.kind(), "Dropped record");
    }

    let start = start.or_else(|| config.narrative().start_screen().clone());
    let Some(screen) = narrative.start(start.as_deref()) else {
        tracing::error!("Content has no playable screens");
        eprintln!("{}: no playable screens", content.display());
        return Ok(1);
    };
    tracing::info!(screen = %screen, "Starting narrative");

    phosphor_tui::run(narrative, &config)?;
    Ok(0)
}
