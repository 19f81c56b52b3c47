//! Core data types for the Phosphor terminal narrative engine.
//!
//! This crate provides the content model shared by the parser, the sequencing
//! engine and the terminal front end: screens, dialogs, typed screen elements
//! and the lifecycle enums that describe narrative progress.

mod dialog;
mod element;
mod ids;
mod screen;
mod status;

pub use dialog::{Dialog, DialogKind};
pub use element::{
    ActionKind, Bitmap, Command, CommandAction, ElementContent, ElementKind, Link, LinkTarget,
    LinkTargetEntry, Prompt, ScreenElement, TargetKind, Toggle, ToggleState,
};
pub use ids::{ElementId, IdGenerator};
pub use screen::{Screen, ScreenKind};
pub use status::{AppStatus, ElementState};
