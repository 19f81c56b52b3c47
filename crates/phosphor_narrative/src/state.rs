//! Narrative state.

use crate::{LoadingQueue, Registry};
use derive_getters::Getters;
use phosphor_core::{AppStatus, Dialog, ElementContent, ElementId, Screen};
use std::collections::HashMap;

/// The complete, explicitly keyed state of a running narrative.
///
/// All transitions go through [`crate::reduce`]; nothing else mutates it.
#[derive(Debug, Clone, Default, PartialEq, Getters)]
pub struct NarrativeState {
    /// Parsed screens and dialogs with their element states
    pub(crate) registry: Registry,
    /// Elements still waiting for external preparation
    pub(crate) loading: LoadingQueue,
    /// Screen currently shown
    pub(crate) active_screen: Option<String>,
    /// Element currently being revealed
    #[getter(skip)]
    pub(crate) active_element: Option<ElementId>,
    /// Open dialog overlay
    pub(crate) active_dialog: Option<String>,
    /// Overall progress
    #[getter(skip)]
    pub(crate) status: AppStatus,
    /// Runtime toggle positions, keyed by element
    pub(crate) toggle_positions: HashMap<ElementId, usize>,
}

impl NarrativeState {
    /// Wraps a parsed registry. Status is `Ready` when there is something to show.
    pub fn new(registry: Registry, loading: LoadingQueue) -> Self {
        let status = if registry.is_empty() {
            AppStatus::Unset
        } else {
            AppStatus::Ready
        };
        Self {
            registry,
            loading,
            status,
            ..Self::default()
        }
    }

    /// Element currently being revealed.
    pub fn active_element(&self) -> Option<ElementId> {
        self.active_element
    }

    /// Overall progress.
    pub fn status(&self) -> AppStatus {
        self.status
    }

    /// The screen currently shown.
    pub fn current_screen(&self) -> Option<&Screen> {
        self.active_screen
            .as_deref()
            .and_then(|id| self.registry.screen(id))
    }

    /// The dialog currently open.
    pub fn current_dialog(&self) -> Option<&Dialog> {
        self.active_dialog
            .as_deref()
            .and_then(|id| self.registry.dialog(id))
    }

    /// Whether a dialog overlay is open.
    pub fn dialog_open(&self) -> bool {
        self.active_dialog.is_some()
    }

    /// Current position of a toggle: the clicked position, or its authored active state.
    pub fn toggle_position(&self, id: ElementId) -> Option<usize> {
        let element = self.registry.element(id)?;
        let ElementContent::Toggle(toggle) = element.content() else {
            return None;
        };
        Some(
            self.toggle_positions
                .get(&id)
                .copied()
                .unwrap_or_else(|| toggle.active_index()),
        )
    }
}
