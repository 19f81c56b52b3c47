//! Typed screen elements.

use crate::{ElementId, ElementState};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Element type tag as authored (`"type": "link"`), matched case-insensitively.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ElementKind {
    /// Plain line of text
    Text,
    /// Navigable text
    Link,
    /// Image
    Bitmap,
    /// Command input
    Prompt,
    /// Clickable multi-state text
    Toggle,
}

/// Where a link goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkTarget {
    /// A literal screen id
    Screen(String),
    /// Entries selected by the unlock gesture, first match wins
    Conditional(Vec<LinkTargetEntry>),
}

/// Routing kind of a conditional link entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    /// Change to a screen
    Link,
    /// Open a dialog
    Dialog,
    /// Any other authored tag; routes nowhere
    Other(String),
}

impl From<&str> for TargetKind {
    fn from(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "link" => TargetKind::Link,
            "dialog" => TargetKind::Dialog,
            _ => TargetKind::Other(tag.to_string()),
        }
    }
}

/// One candidate of a conditional link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct LinkTargetEntry {
    /// Screen or dialog id
    target: String,
    /// How to route the target
    kind: TargetKind,
    /// Whether the entry requires the unlock gesture
    #[getter(skip)]
    locked: bool,
}

impl LinkTargetEntry {
    /// Creates a conditional link entry.
    pub fn new(target: impl Into<String>, kind: TargetKind, locked: bool) -> Self {
        Self {
            target: target.into(),
            kind,
            locked,
        }
    }

    /// Whether the entry requires the unlock gesture.
    pub fn locked(&self) -> bool {
        self.locked
    }
}

/// Link payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Link {
    /// Display text
    text: String,
    /// Navigation target
    target: LinkTarget,
}

impl Link {
    /// Creates a link payload.
    pub fn new(text: impl Into<String>, target: LinkTarget) -> Self {
        Self {
            text: text.into(),
            target,
        }
    }
}

/// Bitmap payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Bitmap {
    /// Image source
    src: String,
    /// Alternative text
    alt: Option<String>,
}

impl Bitmap {
    /// Creates a bitmap payload.
    pub fn new(src: impl Into<String>, alt: Option<String>) -> Self {
        Self {
            src: src.into(),
            alt,
        }
    }
}

/// What a prompt command does when matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Change to the target screen
    Link,
    /// Open the target dialog
    Dialog,
    /// Diagnostic only
    Console,
    /// Any other authored tag; does nothing
    Other(String),
}

impl From<&str> for ActionKind {
    fn from(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "link" => ActionKind::Link,
            "dialog" => ActionKind::Dialog,
            "console" => ActionKind::Console,
            _ => ActionKind::Other(tag.to_string()),
        }
    }
}

/// Action attached to a prompt command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct CommandAction {
    /// Routing kind
    kind: ActionKind,
    /// Screen or dialog id, or the diagnostic message for console actions
    target: Option<String>,
}

impl CommandAction {
    /// Creates a command action.
    pub fn new(kind: ActionKind, target: Option<String>) -> Self {
        Self { kind, target }
    }
}

/// One row of a prompt's command table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Command {
    /// Text the user types
    command: String,
    /// What happens on a match
    action: CommandAction,
}

impl Command {
    /// Creates a command table entry.
    pub fn new(command: impl Into<String>, action: CommandAction) -> Self {
        Self {
            command: command.into(),
            action,
        }
    }

    /// Case-insensitive comparison against user input.
    pub fn matches(&self, input: &str) -> bool {
        self.command.to_lowercase() == input.to_lowercase()
    }
}

/// Prompt payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Prompt {
    /// Label shown before the input, if authored
    prompt: Option<String>,
    /// Command table
    commands: Vec<Command>,
}

impl Prompt {
    /// Creates a prompt payload.
    pub fn new(prompt: Option<String>, commands: Vec<Command>) -> Self {
        Self { prompt, commands }
    }

    /// First command matching the input, if any.
    pub fn find(&self, input: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.matches(input))
    }
}

/// One labelled state of a toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ToggleState {
    /// Display text
    text: String,
    /// Whether this is the selected state
    #[getter(skip)]
    active: bool,
}

impl ToggleState {
    /// Creates a toggle state.
    pub fn new(text: impl Into<String>, active: bool) -> Self {
        Self {
            text: text.into(),
            active,
        }
    }

    /// Whether this is the selected state.
    pub fn active(&self) -> bool {
        self.active
    }
}

/// Toggle payload. Holds at least one state, exactly one of them active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(try_from = "RawToggle")]
pub struct Toggle {
    /// Ordered states
    states: Vec<ToggleState>,
}

/// Unchecked serde form of [`Toggle`].
#[derive(Deserialize)]
struct RawToggle {
    states: Vec<ToggleState>,
}

impl TryFrom<RawToggle> for Toggle {
    type Error = String;

    fn try_from(raw: RawToggle) -> Result<Self, Self::Error> {
        Toggle::new(raw.states).ok_or_else(|| "toggle needs at least one state".to_string())
    }
}

impl Toggle {
    /// Builds a toggle, normalising the active marker.
    ///
    /// The first state marked active keeps the marker; when none is marked
    /// the first state becomes active. Returns `None` for an empty list.
    pub fn new(states: Vec<ToggleState>) -> Option<Self> {
        if states.is_empty() {
            return None;
        }
        let active = states.iter().position(|s| s.active).unwrap_or(0);
        let states = states
            .into_iter()
            .enumerate()
            .map(|(i, s)| ToggleState::new(s.text, i == active))
            .collect();
        Some(Self { states })
    }

    /// Index of the authored active state.
    pub fn active_index(&self) -> usize {
        self.states.iter().position(|s| s.active).unwrap_or(0)
    }

    /// Text of the state at `position`, wrapping around.
    pub fn text_at(&self, position: usize) -> &str {
        &self.states[position % self.states.len()].text
    }

    /// Position following `position`, wrapping to the first state.
    pub fn next_position(&self, position: usize) -> usize {
        (position + 1) % self.states.len()
    }
}

/// Variant-specific element payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
pub enum ElementContent {
    /// Plain text line
    Text(String),
    /// Navigable text
    Link(Link),
    /// Image
    Bitmap(Bitmap),
    /// Command input
    Prompt(Prompt),
    /// Multi-state text
    Toggle(Toggle),
}

impl ElementContent {
    /// The type tag of this payload.
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementContent::Text(_) => ElementKind::Text,
            ElementContent::Link(_) => ElementKind::Link,
            ElementContent::Bitmap(_) => ElementKind::Bitmap,
            ElementContent::Prompt(_) => ElementKind::Prompt,
            ElementContent::Toggle(_) => ElementKind::Toggle,
        }
    }
}

/// A typed, addressable element of a screen.
///
/// Only `state` changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ScreenElement {
    /// Generated id
    #[getter(skip)]
    id: ElementId,
    /// Lifecycle state
    #[getter(skip)]
    state: ElementState,
    /// Element needs external preparation before it becomes ready
    #[getter(skip)]
    on_load: bool,
    /// Optional style class
    class_name: Option<String>,
    /// Payload
    content: ElementContent,
}

impl ScreenElement {
    /// Creates an element. Elements awaiting load start `Unloaded`, others `Ready`.
    pub fn new(
        id: ElementId,
        content: ElementContent,
        on_load: bool,
        class_name: Option<String>,
    ) -> Self {
        let state = if on_load {
            ElementState::Unloaded
        } else {
            ElementState::Ready
        };
        Self {
            id,
            state,
            on_load,
            class_name,
            content,
        }
    }

    /// Generated id.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ElementState {
        self.state
    }

    /// Whether the element was authored with an `onLoad` marker.
    pub fn on_load(&self) -> bool {
        self.on_load
    }

    /// Moves the element to a new lifecycle state.
    pub fn set_state(&mut self, state: ElementState) {
        self.state = state;
    }

    /// The type tag of this element.
    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }
}
