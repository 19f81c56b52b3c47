//! Screen and dialog controller transitions.

use crate::{NarrativeState, sequencer};
use phosphor_core::AppStatus;

/// Leaves the current screen (resetting its progress) and enters `target`.
///
/// An unknown target changes nothing.
pub(crate) fn change_screen(state: &mut NarrativeState, target: &str) {
    if state.registry.screen(target).is_none() {
        tracing::warn!(screen = target, "Screen not found");
        return;
    }

    if let Some(current) = state.active_screen.take()
        && let Some(outgoing) = state.registry.screen_mut(&current)
    {
        for element in outgoing.content() {
            state.toggle_positions.remove(&element.id());
        }
        outgoing.unload();
        tracing::debug!(screen = %current, "Screen unloaded");
    }

    tracing::info!(screen = target, "Entering screen");
    state.active_screen = Some(target.to_string());
    state.active_element = None;
    state.status = AppStatus::Active;
    sequencer::promote_next(state);
}

/// Opens the dialog `target`, or closes the open dialog when `target` is `None`.
///
/// Screen element states are never touched. An unknown dialog changes nothing.
pub(crate) fn toggle_dialog(state: &mut NarrativeState, target: Option<&str>) {
    match target {
        Some(id) if state.registry.dialog(id).is_none() => {
            tracing::warn!(dialog = id, "Dialog not found");
        }
        Some(id) => {
            tracing::info!(dialog = id, "Opening dialog");
            state.active_dialog = Some(id.to_string());
        }
        None => {
            if let Some(closed) = state.active_dialog.take() {
                tracing::info!(dialog = %closed, "Closing dialog");
            }
        }
    }
}
