//! The narrative host.
//!
//! [`Narrative`] owns the state and turns host calls (initialize, activate,
//! advance, user input) into reducer events.

use crate::{
    Action, ContentDocument, ContentParser, Gesture, NarrativeEvent, NarrativeState, PromptInput,
    RenderInstruction, UnlockPolicy, dispatch_link, reduce, render_plan,
};
use phosphor_core::{ElementContent, ElementId, ElementState, ScreenElement};
use phosphor_error::ContentError;

/// A running narrative.
#[derive(Debug, Clone, Default)]
pub struct Narrative {
    state: NarrativeState,
    unlock: UnlockPolicy,
    issues: Vec<ContentError>,
}

impl Narrative {
    /// Parses a document and wraps the result. No screen is active yet.
    #[tracing::instrument(skip_all)]
    pub fn initialize(document: &ContentDocument) -> Self {
        let (registry, loading, issues) = ContentParser::parse(document).into_parts();
        Self {
            state: NarrativeState::new(registry, loading),
            unlock: UnlockPolicy::default(),
            issues,
        }
    }

    /// Replaces the unlock policy used for link activation.
    pub fn with_unlock_policy(mut self, unlock: UnlockPolicy) -> Self {
        self.unlock = unlock;
        self
    }

    /// Current state.
    pub fn state(&self) -> &NarrativeState {
        &self.state
    }

    /// Records dropped while parsing.
    pub fn issues(&self) -> &[ContentError] {
        &self.issues
    }

    /// Activates the requested screen, or the first screen when it is unset
    /// or unknown. Returns the activated screen id.
    pub fn start(&mut self, screen: Option<&str>) -> Option<String> {
        let registry = self.state.registry();
        let target = match screen {
            Some(id) if registry.screen(id).is_some() => id.to_string(),
            requested => {
                if let Some(id) = requested {
                    tracing::warn!(screen = id, "Start screen not found, using first screen");
                }
                registry.first_screen()?.id().clone()
            }
        };
        self.change_screen(&target);
        Some(target)
    }

    /// Applies an event.
    pub fn dispatch(&mut self, event: NarrativeEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, &event);
    }

    /// Leaves the current screen and enters `target`.
    pub fn change_screen(&mut self, target: &str) {
        self.dispatch(NarrativeEvent::ChangeScreen(target.to_string()));
    }

    /// Opens a dialog, or closes the open one with `None`.
    pub fn toggle_dialog(&mut self, target: Option<&str>) {
        self.dispatch(NarrativeEvent::ToggleDialog(target.map(str::to_string)));
    }

    /// Closes the open dialog.
    pub fn close_dialog(&mut self) {
        self.toggle_dialog(None);
    }

    /// Reports an element's external load as resolved.
    pub fn mark_ready(&mut self, element: ElementId) {
        self.dispatch(NarrativeEvent::ElementReady(element));
    }

    /// Reports a reveal renderer as finished.
    pub fn complete(&mut self, screen: &str, element: ElementId) {
        self.dispatch(NarrativeEvent::ElementCompleted {
            screen: screen.to_string(),
            element,
        });
    }

    /// Reports a static renderer's first render.
    pub fn rendered(&mut self, screen: &str, element: ElementId) {
        self.dispatch(NarrativeEvent::ElementRendered {
            screen: screen.to_string(),
            element,
        });
    }

    /// Activates a revealed link on the active screen with the given gesture.
    ///
    /// Returns the action that was performed, if any.
    pub fn activate_link(&mut self, element: ElementId, gesture: &Gesture) -> Option<Action> {
        let ElementContent::Link(link) = self.revealed(element)?.content() else {
            tracing::debug!(element = %element, "Not a link");
            return None;
        };
        let unlocked = self.unlock.is_unlocked(gesture);
        let action = dispatch_link(link.target(), unlocked)?;
        tracing::debug!(element = %element, unlocked, ?action, "Link activated");
        self.perform(action.clone());
        Some(action)
    }

    /// Submits a prompt's input. The input is cleared in every case.
    ///
    /// While a dialog is open the command is suppressed.
    pub fn submit_prompt(&mut self, element: ElementId, input: &mut PromptInput) -> Option<Action> {
        let enabled = !self.state.dialog_open();
        let action = match self.revealed(element).map(ScreenElement::content) {
            Some(ElementContent::Prompt(prompt)) => input.submit(prompt, enabled),
            _ => {
                input.clear();
                None
            }
        }?;
        self.perform(action.clone());
        Some(action)
    }

    /// Advances a revealed toggle to its next state.
    pub fn click_toggle(&mut self, element: ElementId) {
        self.dispatch(NarrativeEvent::ToggleClicked(element));
    }

    /// Performs a routed action.
    pub fn perform(&mut self, action: Action) {
        if let Some(event) = action.into_event() {
            self.dispatch(event);
        }
    }

    /// Render instructions for the active screen.
    pub fn render_plan(&self, default_prompt: &str) -> Vec<RenderInstruction> {
        render_plan(&self.state, default_prompt)
    }

    /// A `Done` element of the active screen.
    fn revealed(&self, element: ElementId) -> Option<&ScreenElement> {
        self.state
            .current_screen()?
            .element(element)
            .filter(|e| e.state() == ElementState::Done)
    }
}
