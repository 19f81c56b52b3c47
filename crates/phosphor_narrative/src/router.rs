//! Command router and prompt input editing.

use crate::Action;
use phosphor_core::{ActionKind, Prompt};

/// Punctuation accepted by the prompt besides alphanumerics and space.
pub const PROMPT_PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '\'', '"', '-', '_', '/', '(', ')', '@', '#', '+', '=',
];

/// Routes a submitted command against a prompt's command table.
///
/// Returns `None` when no command matches or the matched action type is not
/// routable.
///
/// # Examples
///
/// ```
/// use phosphor_core::{ActionKind, Command, CommandAction, Prompt};
/// use phosphor_narrative::{Action, route_command};
///
/// let prompt = Prompt::new(
///     None,
///     vec![Command::new(
///         "help",
///         CommandAction::new(ActionKind::Dialog, Some("helpDialog".to_string())),
///     )],
/// );
/// assert_eq!(
///     route_command(&prompt, "HELP"),
///     Some(Action::ToggleDialog(Some("helpDialog".to_string())))
/// );
/// assert_eq!(route_command(&prompt, "quit"), None);
/// ```
pub fn route_command(prompt: &Prompt, input: &str) -> Option<Action> {
    let Some(command) = prompt.find(input) else {
        tracing::debug!(input, "No matching command");
        return None;
    };

    let action = command.action();
    let target = action.target().clone();
    match action.kind() {
        ActionKind::Link => match target {
            Some(screen) => Some(Action::ChangeScreen(screen)),
            None => {
                tracing::warn!(command = %command.command(), "Link command without target");
                None
            }
        },
        ActionKind::Dialog => Some(Action::ToggleDialog(target)),
        ActionKind::Console => Some(Action::Console(target)),
        ActionKind::Other(tag) => {
            tracing::debug!(command = %command.command(), action = %tag, "Unroutable command action");
            None
        }
    }
}

/// Edit buffer of a focused prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptInput {
    buffer: String,
}

impl PromptInput {
    /// Creates an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a character may be typed into a prompt.
    pub fn accepts(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == ' ' || PROMPT_PUNCTUATION.contains(&c)
    }

    /// Appends a character if it is allowed. Returns whether it was taken.
    pub fn push(&mut self, c: char) -> bool {
        if Self::accepts(c) {
            self.buffer.push(c);
            true
        } else {
            false
        }
    }

    /// Removes the last character.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Discards the typed text.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Typed text so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Submits the buffer against a prompt and clears it.
    ///
    /// With `enabled == false` (a dialog is open) the input is still consumed
    /// but no command runs.
    pub fn submit(&mut self, prompt: &Prompt, enabled: bool) -> Option<Action> {
        let input = std::mem::take(&mut self.buffer);
        if !enabled {
            tracing::debug!(input = %input, "Prompt disabled, command suppressed");
            return None;
        }
        route_command(prompt, input.trim())
    }
}
