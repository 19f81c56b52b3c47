//! Element state machine and sequencer.
//!
//! Elements of the active screen advance strictly in order:
//!
//! ```text
//! Unloaded --ready--> Ready --promote--> Active --complete--> Done
//! ```
//!
//! The first element that is not `Done` is always the next one. It is promoted
//! when it is `Ready`, or `Unloaded` without a pending load (an element reset
//! by a screen change). While it still waits in the loading queue the sequence
//! stalls, and the matching `ElementReady` resumes it. When no such element is
//! left the narrative is `Done`.

use crate::{NarrativeEvent, NarrativeState, controller};
use phosphor_core::{AppStatus, ElementContent, ElementId, ElementState};

/// Applies one event to the state and returns the new state.
///
/// This is the only mutation path of the engine. Events that do not apply
/// (unknown ids, stale screens, duplicate completions) return the state
/// unchanged.
#[tracing::instrument(skip_all, fields(event = %event))]
pub fn reduce(mut state: NarrativeState, event: &NarrativeEvent) -> NarrativeState {
    match event {
        NarrativeEvent::ChangeScreen(target) => controller::change_screen(&mut state, target),
        NarrativeEvent::ToggleDialog(target) => {
            controller::toggle_dialog(&mut state, target.as_deref())
        }
        NarrativeEvent::ElementReady(element) => mark_ready(&mut state, *element),
        NarrativeEvent::ElementCompleted { screen, element } => {
            complete(&mut state, screen, *element)
        }
        NarrativeEvent::ElementRendered { screen, element } => {
            rendered(&mut state, screen, *element)
        }
        NarrativeEvent::ToggleClicked(element) => click_toggle(&mut state, *element),
    }
    state
}

/// Activates the next eligible element of the active screen, or finishes it.
pub(crate) fn promote_next(state: &mut NarrativeState) {
    let Some(screen_id) = state.active_screen.clone() else {
        return;
    };
    let Some(screen) = state.registry.screen_mut(&screen_id) else {
        return;
    };

    let next = screen.next_pending().map(|e| (e.id(), e.state()));
    match next {
        None => {
            state.active_element = None;
            state.status = AppStatus::Done;
            tracing::info!(screen = %screen_id, "Screen finished");
        }
        Some((id, ElementState::Active)) => {
            state.active_element = Some(id);
        }
        Some((id, ElementState::Unloaded)) if state.loading.contains(id) => {
            state.active_element = None;
            tracing::debug!(screen = %screen_id, element = %id, "Waiting for element to load");
        }
        Some((id, _)) => {
            if let Some(element) = screen.element_mut(id) {
                element.set_state(ElementState::Active);
            }
            state.active_element = Some(id);
            tracing::debug!(screen = %screen_id, element = %id, "Element active");
        }
    }
}

/// `Unloaded -> Ready` once the external loader reports the element prepared.
fn mark_ready(state: &mut NarrativeState, id: ElementId) {
    let was_queued = state.loading.remove(id);

    let Some(element) = state.registry.element_mut(id) else {
        tracing::warn!(element = %id, "Ready signal for unknown element");
        return;
    };
    if element.state() == ElementState::Unloaded {
        element.set_state(ElementState::Ready);
    }
    tracing::debug!(element = %id, was_queued, "Element ready");

    let on_active_screen = match (&state.active_screen, state.registry.screen_of(id)) {
        (Some(active), Some(owner)) => owner.id() == active,
        _ => false,
    };
    if on_active_screen && state.active_element.is_none() && state.status == AppStatus::Active {
        promote_next(state);
    }
}

/// `Active -> Done` on a renderer completion, then promote the successor.
fn complete(state: &mut NarrativeState, screen: &str, id: ElementId) {
    if state.active_screen.as_deref() != Some(screen) || state.active_element != Some(id) {
        tracing::debug!(screen, element = %id, "Ignoring completion for inactive element");
        return;
    }

    let Some(element) = state
        .registry
        .screen_mut(screen)
        .and_then(|s| s.element_mut(id))
    else {
        return;
    };
    if element.state() != ElementState::Active {
        return;
    }
    element.set_state(ElementState::Done);
    tracing::debug!(screen, element = %id, "Element done");

    promote_next(state);
}

/// Static renderer path: marks an element done if it is not already.
///
/// An `Active` element is completed exactly as by its reveal renderer, so the
/// sequence keeps its order. Elements not yet revealed are left alone.
fn rendered(state: &mut NarrativeState, screen: &str, id: ElementId) {
    let current = state
        .registry
        .screen(screen)
        .and_then(|s| s.element(id))
        .map(|e| e.state());

    match current {
        Some(ElementState::Active) => complete(state, screen, id),
        Some(ElementState::Done) => {}
        Some(other) => {
            tracing::debug!(screen, element = %id, state = %other, "Ignoring render of unrevealed element");
        }
        None => {}
    }
}

/// Advances a finished toggle on the active screen to its next state.
fn click_toggle(state: &mut NarrativeState, id: ElementId) {
    let Some(screen) = state.current_screen() else {
        return;
    };
    let Some(element) = screen.element(id) else {
        tracing::debug!(element = %id, "Toggle is not on the active screen");
        return;
    };
    if element.state() != ElementState::Done {
        return;
    }
    let ElementContent::Toggle(toggle) = element.content() else {
        return;
    };

    let position = state
        .toggle_positions
        .get(&id)
        .copied()
        .unwrap_or_else(|| toggle.active_index());
    let next = toggle.next_position(position);
    tracing::debug!(element = %id, state = toggle.text_at(next), "Toggle advanced");
    state.toggle_positions.insert(id, next);
}
