//! Dialog overlays.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Dialog type tag as authored, matched case-insensitively.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DialogKind {
    /// Message box dismissed with Enter or Escape
    Alert,
    /// Parsed but not interpreted yet
    Confirm,
    /// Parsed but not interpreted yet
    Custom,
}

/// An overlay shown above the active screen.
///
/// Opening a dialog never touches screen element states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Dialog {
    /// Authored id
    id: String,
    /// Dialog kind
    #[getter(skip)]
    kind: DialogKind,
    /// Message lines; only alerts carry content
    lines: Vec<String>,
}

impl Dialog {
    /// Creates a dialog.
    pub fn new(id: impl Into<String>, kind: DialogKind, lines: Vec<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            lines,
        }
    }

    /// Dialog kind.
    pub fn kind(&self) -> DialogKind {
        self.kind
    }
}
