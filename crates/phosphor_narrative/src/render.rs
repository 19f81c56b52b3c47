//! Render planning and the renderer completion contract.
//!
//! The engine does not draw. It tells a front end what each element of the
//! active screen should look like right now, and hands out a
//! [`CompletionToken`] through which the renderer reports back.

use crate::{NarrativeEvent, NarrativeState};
use derive_getters::Getters;
use phosphor_core::{ElementContent, ElementId, ElementKind, ElementState, ScreenKind};
use serde::{Deserialize, Serialize};

/// Animated effect used to reveal an active element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RevealEffect {
    /// Character-by-character typing
    Teletype,
    /// Progressive resolution of an image
    Pixelate,
}

/// What a renderer shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderPayload {
    /// Textual payload of text, link, prompt and toggle elements
    Text(String),
    /// Bitmap source and alternative text
    Image {
        /// Image source
        src: String,
        /// Alternative text
        alt: Option<String>,
    },
}

impl RenderPayload {
    /// Text a terminal can display for this payload.
    pub fn display_text(&self) -> &str {
        match self {
            RenderPayload::Text(text) => text,
            RenderPayload::Image { src, alt } => alt.as_deref().unwrap_or(src.as_str()),
        }
    }
}

/// How an element is rendered at this moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    /// Not revealed yet
    Hidden,
    /// Being revealed; the renderer completes through a reveal token
    Reveal {
        /// Effect to use
        effect: RevealEffect,
        /// Finish immediately without animating
        autocomplete: bool,
    },
    /// Fully revealed and interactive
    Static {
        /// Interaction suppressed (a prompt while a dialog is open)
        disabled: bool,
    },
}

/// Render instruction for one element of the active screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RenderInstruction {
    /// Element being rendered
    #[getter(skip)]
    element: ElementId,
    /// Element variant
    #[getter(skip)]
    kind: ElementKind,
    /// Optional style class
    class_name: Option<String>,
    /// Payload to show
    payload: RenderPayload,
    /// Current mode
    #[getter(skip)]
    mode: RenderMode,
}

impl RenderInstruction {
    /// Element being rendered.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Element variant.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Current mode.
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Whether the element is visible in any form.
    pub fn is_visible(&self) -> bool {
        self.mode != RenderMode::Hidden
    }
}

/// Plans the active screen, one instruction per element in sequence order.
///
/// `default_prompt` labels prompts that carry no label of their own. Returns
/// an empty plan when no screen is active.
pub fn render_plan(state: &NarrativeState, default_prompt: &str) -> Vec<RenderInstruction> {
    let Some(screen) = state.current_screen() else {
        return Vec::new();
    };
    let autocomplete = screen.kind() == ScreenKind::StaticPage;
    let dialog_open = state.dialog_open();

    screen
        .content()
        .iter()
        .map(|element| {
            let id = element.id();
            let payload = match element.content() {
                ElementContent::Text(text) => RenderPayload::Text(text.clone()),
                ElementContent::Link(link) => RenderPayload::Text(link.text().clone()),
                ElementContent::Bitmap(bitmap) => RenderPayload::Image {
                    src: bitmap.src().clone(),
                    alt: bitmap.alt().clone(),
                },
                ElementContent::Prompt(prompt) => RenderPayload::Text(
                    prompt
                        .prompt()
                        .clone()
                        .unwrap_or_else(|| default_prompt.to_string()),
                ),
                ElementContent::Toggle(toggle) => {
                    let position = state
                        .toggle_position(id)
                        .unwrap_or_else(|| toggle.active_index());
                    RenderPayload::Text(toggle.text_at(position).to_string())
                }
            };

            let mode = match element.state() {
                ElementState::Unloaded | ElementState::Ready => RenderMode::Hidden,
                ElementState::Active => RenderMode::Reveal {
                    effect: match element.kind() {
                        ElementKind::Bitmap => RevealEffect::Pixelate,
                        _ => RevealEffect::Teletype,
                    },
                    autocomplete,
                },
                ElementState::Done => RenderMode::Static {
                    disabled: element.kind() == ElementKind::Prompt && dialog_open,
                },
            };

            RenderInstruction {
                element: id,
                kind: element.kind(),
                class_name: element.class_name().clone(),
                payload,
                mode,
            }
        })
        .collect()
}

/// One-shot completion handle given to a renderer.
///
/// Reveal renderers get a token that completes the element; static renderers
/// get one that reports the first render. Either way it yields its event at
/// most once, so a renderer that fires twice cannot advance the sequence twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionToken {
    event: Option<NarrativeEvent>,
}

impl CompletionToken {
    /// Token for a reveal renderer (`onComplete`).
    pub fn reveal(screen: impl Into<String>, element: ElementId) -> Self {
        Self {
            event: Some(NarrativeEvent::ElementCompleted {
                screen: screen.into(),
                element,
            }),
        }
    }

    /// Token for a static renderer (`onRendered`).
    pub fn rendered(screen: impl Into<String>, element: ElementId) -> Self {
        Self {
            event: Some(NarrativeEvent::ElementRendered {
                screen: screen.into(),
                element,
            }),
        }
    }

    /// Takes the completion event. Later calls return `None`.
    pub fn fire(&mut self) -> Option<NarrativeEvent> {
        self.event.take()
    }

    /// Whether the token has already fired.
    pub fn is_spent(&self) -> bool {
        self.event.is_none()
    }
}
