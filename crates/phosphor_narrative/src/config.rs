//! Runtime configuration.
//!
//! ```toml
//! [narrative]
//! start_screen = "intro"
//!
//! [input]
//! unlock = "long_press"
//! long_press_ms = 1000
//!
//! [render]
//! teletype_speed_ms = 5
//! bitmap_tick_ms = 150
//! prompt = "$> "
//! tick_ms = 16
//! ```
//!
//! Every section and key is optional.

use crate::{UnlockGesture, UnlockPolicy};
use derive_getters::Getters;
use phosphor_error::{ConfigError, PhosphorResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Top-level configuration.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_builder::Builder,
)]
#[serde(default)]
#[builder(default, setter(into))]
pub struct PhosphorConfig {
    /// Narrative start-up
    narrative: NarrativeConfig,
    /// Gesture handling
    input: InputConfig,
    /// Renderer timing and labels
    render: RenderConfig,
}

impl PhosphorConfig {
    /// Loads configuration from a TOML file.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> PhosphorResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = content.parse()?;
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Unlock policy for link activation.
    pub fn unlock_policy(&self) -> UnlockPolicy {
        UnlockPolicy::new(self.input.unlock, self.input.long_press())
    }
}

impl FromStr for PhosphorConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}

/// `[narrative]` section.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_builder::Builder,
)]
#[serde(default)]
#[builder(default, setter(into))]
pub struct NarrativeConfig {
    /// Screen shown first; the first parsed screen when unset
    start_screen: Option<String>,
}

/// `[input]` section.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[serde(default)]
#[builder(default)]
pub struct InputConfig {
    /// Gesture that unlocks locked link targets
    #[getter(skip)]
    unlock: UnlockGesture,
    /// Long-press threshold in milliseconds
    #[getter(skip)]
    long_press_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            unlock: UnlockGesture::Any,
            long_press_ms: 500,
        }
    }
}

impl InputConfig {
    /// Gesture that unlocks locked link targets.
    pub fn unlock(&self) -> UnlockGesture {
        self.unlock
    }

    /// Long-press threshold.
    pub fn long_press(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }
}

/// `[render]` section.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[serde(default)]
#[builder(default)]
pub struct RenderConfig {
    /// Milliseconds per teletype character
    #[getter(skip)]
    teletype_speed_ms: u64,
    /// Milliseconds per pixelation step
    #[getter(skip)]
    bitmap_tick_ms: u64,
    /// Label of prompts that carry none
    #[builder(setter(into))]
    prompt: String,
    /// Terminal frame interval in milliseconds
    #[getter(skip)]
    tick_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            teletype_speed_ms: 5,
            bitmap_tick_ms: 150,
            prompt: "$> ".to_string(),
            tick_ms: 16,
        }
    }
}

impl RenderConfig {
    /// Delay between teletype characters.
    pub fn teletype_speed(&self) -> Duration {
        Duration::from_millis(self.teletype_speed_ms)
    }

    /// Delay between pixelation steps.
    pub fn bitmap_tick(&self) -> Duration {
        Duration::from_millis(self.bitmap_tick_ms)
    }

    /// Terminal frame interval. Never zero.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}
