//! Lifecycle enums.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a single screen element.
///
/// Elements move `Unloaded -> Ready -> Active -> Done` in screen order. At
/// most one element per screen is `Active`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ElementState {
    /// Awaiting external preparation, or reset by a screen change
    #[default]
    Unloaded,
    /// Prepared and waiting for its turn
    Ready,
    /// Currently being revealed by a renderer
    Active,
    /// Reveal finished; rendered statically from now on
    Done,
}

/// Process-wide narrative progress.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AppStatus {
    /// Nothing has been parsed yet
    #[default]
    Unset,
    /// Content parsed, no screen entered
    Ready,
    /// A screen has been entered
    Active,
    /// The active screen's last element finished
    Done,
}
