//! Screen and dialog registry.

use phosphor_core::{Dialog, ElementId, Screen, ScreenElement};
use std::collections::HashMap;

/// Parsed screens and dialogs, addressable by id.
///
/// Read-mostly after parsing. The only mutation is an element's lifecycle
/// state, performed by the sequencer through [`Registry::element_mut`] and
/// [`Registry::screen_mut`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    screens: Vec<Screen>,
    dialogs: Vec<Dialog>,
    screen_index: HashMap<String, usize>,
    dialog_index: HashMap<String, usize>,
    element_index: HashMap<ElementId, usize>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a screen. Returns `false` and keeps the existing one when the id is taken.
    pub fn insert_screen(&mut self, screen: Screen) -> bool {
        if self.screen_index.contains_key(screen.id()) {
            return false;
        }
        let index = self.screens.len();
        for element in screen.content() {
            self.element_index.insert(element.id(), index);
        }
        self.screen_index.insert(screen.id().clone(), index);
        self.screens.push(screen);
        true
    }

    /// Adds a dialog. Returns `false` and keeps the existing one when the id is taken.
    pub fn insert_dialog(&mut self, dialog: Dialog) -> bool {
        if self.dialog_index.contains_key(dialog.id()) {
            return false;
        }
        self.dialog_index
            .insert(dialog.id().clone(), self.dialogs.len());
        self.dialogs.push(dialog);
        true
    }

    /// Looks up a screen.
    pub fn screen(&self, id: &str) -> Option<&Screen> {
        self.screen_index.get(id).map(|&i| &self.screens[i])
    }

    /// Looks up a screen for element state changes.
    pub fn screen_mut(&mut self, id: &str) -> Option<&mut Screen> {
        self.screen_index
            .get(id)
            .copied()
            .map(move |i| &mut self.screens[i])
    }

    /// Looks up a dialog.
    pub fn dialog(&self, id: &str) -> Option<&Dialog> {
        self.dialog_index.get(id).map(|&i| &self.dialogs[i])
    }

    /// Screen owning an element.
    pub fn screen_of(&self, element: ElementId) -> Option<&Screen> {
        self.element_index
            .get(&element)
            .map(|&i| &self.screens[i])
    }

    /// Looks up an element in any screen.
    pub fn element(&self, id: ElementId) -> Option<&ScreenElement> {
        self.screen_of(id).and_then(|screen| screen.element(id))
    }

    /// Looks up an element in any screen for a state change.
    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut ScreenElement> {
        let index = *self.element_index.get(&id)?;
        self.screens[index].element_mut(id)
    }

    /// All screens in authored order.
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// All dialogs in authored order.
    pub fn dialogs(&self) -> &[Dialog] {
        &self.dialogs
    }

    /// The first parsed screen, used when no start screen is configured.
    pub fn first_screen(&self) -> Option<&Screen> {
        self.screens.first()
    }

    /// Whether no screen survived parsing.
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}
