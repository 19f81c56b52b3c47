//! Screens.

use crate::{ElementId, ElementState, ScreenElement};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Screen type tag as authored, matched case-insensitively.
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
#[strum(ascii_case_insensitive)]
pub enum ScreenKind {
    /// Revealed element by element (`"screen"`)
    #[strum(serialize = "screen")]
    Interactive,
    /// Revealed without animation (`"static"`)
    #[strum(serialize = "static")]
    StaticPage,
}

/// An ordered sequence of elements, revealed one at a time.
///
/// The sequence is fixed at parse time; only element states change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Screen {
    /// Authored id
    id: String,
    /// Screen kind
    #[getter(skip)]
    kind: ScreenKind,
    /// Elements in authored order
    content: Vec<ScreenElement>,
}

impl Screen {
    /// Creates a screen from parsed elements.
    pub fn new(id: impl Into<String>, kind: ScreenKind, content: Vec<ScreenElement>) -> Self {
        Self {
            id: id.into(),
            kind,
            content,
        }
    }

    /// Screen kind.
    pub fn kind(&self) -> ScreenKind {
        self.kind
    }

    /// Looks up an element by id.
    pub fn element(&self, id: ElementId) -> Option<&ScreenElement> {
        self.content.iter().find(|e| e.id() == id)
    }

    /// Mutable access to a single element for state changes.
    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut ScreenElement> {
        self.content.iter_mut().find(|e| e.id() == id)
    }

    /// Position of an element within the sequence.
    pub fn position(&self, id: ElementId) -> Option<usize> {
        self.content.iter().position(|e| e.id() == id)
    }

    /// The element currently being revealed, if any.
    pub fn active_element(&self) -> Option<&ScreenElement> {
        self.content
            .iter()
            .find(|e| e.state() == ElementState::Active)
    }

    /// Number of elements in the `Active` state. Never more than one.
    pub fn active_count(&self) -> usize {
        self.content
            .iter()
            .filter(|e| e.state() == ElementState::Active)
            .count()
    }

    /// First element that has not finished, in sequence order.
    pub fn next_pending(&self) -> Option<&ScreenElement> {
        self.content
            .iter()
            .find(|e| e.state() != ElementState::Done)
    }

    /// Resets every element to `Unloaded`, discarding progress.
    pub fn unload(&mut self) {
        for element in &mut self.content {
            element.set_state(ElementState::Unloaded);
        }
    }
}
