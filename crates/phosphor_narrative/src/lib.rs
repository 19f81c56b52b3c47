//! Content parsing and screen sequencing for Phosphor.
//!
//! Authored content (`{screens, dialogs}`) is parsed into a [`Registry`] of
//! typed screens. A [`Narrative`] then reveals the elements of one screen at a
//! time: every state change is a [`NarrativeEvent`] applied by the pure
//! [`reduce`] function, and user input is routed through the prompt
//! [`route_command`] and link [`dispatch_link`] tables.
//!
//! ```
//! use phosphor_narrative::{ContentDocument, Narrative};
//!
//! let document: ContentDocument = r#"{
//!     "screens": [{"id": "intro", "type": "screen", "content": ["Hello\nWorld"]}]
//! }"#
//! .parse()
//! .unwrap();
//!
//! let mut narrative = Narrative::initialize(&document);
//! narrative.start(None);
//! assert_eq!(narrative.state().active_screen().as_deref(), Some("intro"));
//! ```

#![warn(missing_docs)]

mod config;
mod controller;
mod document;
mod event;
mod link;
mod loading;
mod narrative;
mod parser;
mod registry;
mod render;
mod router;
mod sequencer;
mod state;

pub use config::{
    InputConfig, InputConfigBuilder, NarrativeConfig, NarrativeConfigBuilder, PhosphorConfig,
    PhosphorConfigBuilder, RenderConfig, RenderConfigBuilder,
};
pub use document::ContentDocument;
pub use event::{Action, NarrativeEvent};
pub use link::{DEFAULT_LONG_PRESS, Gesture, UnlockGesture, UnlockPolicy, dispatch_link};
pub use loading::LoadingQueue;
pub use narrative::Narrative;
pub use parser::{ContentParser, ParsedContent, split_lines};
pub use registry::Registry;
pub use render::{
    CompletionToken, RenderInstruction, RenderMode, RenderPayload, RevealEffect, render_plan,
};
pub use router::{PROMPT_PUNCTUATION, PromptInput, route_command};
pub use sequencer::reduce;
pub use state::NarrativeState;
