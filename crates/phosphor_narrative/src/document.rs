//! Authored content documents.
//!
//! Records are kept as raw JSON values: shape-checking belongs to the parser,
//! which drops a malformed screen or element instead of rejecting the whole
//! document.

use derive_getters::Getters;
use phosphor_error::{ContentError, ContentErrorKind, IoError, PhosphorResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::str::FromStr;

/// The `{screens, dialogs}` document as loaded from disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct ContentDocument {
    /// Raw screen records in authored order
    #[serde(default)]
    screens: Vec<Value>,
    /// Raw dialog records in authored order
    #[serde(default)]
    dialogs: Vec<Value>,
}

impl ContentDocument {
    /// Creates a document from raw records.
    pub fn new(screens: Vec<Value>, dialogs: Vec<Value>) -> Self {
        Self { screens, dialogs }
    }

    /// Loads a document from a JSON file.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> PhosphorResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            IoError::new(format!(
                "Failed to read content file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let document: Self = content.parse()?;
        tracing::debug!(
            screens = document.screens.len(),
            dialogs = document.dialogs.len(),
            "Loaded content document"
        );
        Ok(document)
    }
}

impl FromStr for ContentDocument {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
            .map_err(|e| ContentError::new(ContentErrorKind::InvalidDocument(e.to_string())))
    }
}
