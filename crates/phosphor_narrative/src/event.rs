//! Events consumed by the reducer and actions produced by user input.

use phosphor_core::ElementId;
use serde::{Deserialize, Serialize};

/// Everything that can change narrative state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum NarrativeEvent {
    /// Leave the current screen and enter another
    #[display("change_screen({_0})")]
    ChangeScreen(String),
    /// Open a dialog, or close the open one with `None`
    #[display("toggle_dialog({})", _0.as_deref().unwrap_or("-"))]
    ToggleDialog(Option<String>),
    /// An element's external load dependency resolved
    #[display("element_ready({_0})")]
    ElementReady(ElementId),
    /// A reveal renderer finished its effect
    #[display("element_completed({screen}, {element})")]
    ElementCompleted {
        /// Screen the renderer was mounted for
        screen: String,
        /// Element that finished
        element: ElementId,
    },
    /// A static renderer finished its first render
    #[display("element_rendered({screen}, {element})")]
    ElementRendered {
        /// Screen the renderer was mounted for
        screen: String,
        /// Element that rendered
        element: ElementId,
    },
    /// A finished toggle was clicked
    #[display("toggle_clicked({_0})")]
    ToggleClicked(ElementId),
}

/// Outcome of a link activation or prompt command.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Go to a screen
    ChangeScreen(String),
    /// Open a dialog, or close the open one with `None`
    ToggleDialog(Option<String>),
    /// Diagnostic only; carries the authored target, if any
    Console(Option<String>),
}

impl Action {
    /// The state change this action requests. Console actions change nothing.
    pub fn into_event(self) -> Option<NarrativeEvent> {
        match self {
            Action::ChangeScreen(target) => Some(NarrativeEvent::ChangeScreen(target)),
            Action::ToggleDialog(target) => Some(NarrativeEvent::ToggleDialog(target)),
            Action::Console(message) => {
                tracing::info!(
                    message = message.as_deref().unwrap_or_default(),
                    "Console command"
                );
                None
            }
        }
    }
}
