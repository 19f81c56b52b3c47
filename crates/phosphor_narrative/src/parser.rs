//! Content parser.
//!
//! Turns raw screen and dialog records into typed entities. Malformed records
//! never fail the parse: the offending screen, dialog or element is dropped,
//! the reason is kept as a [`ContentError`] issue, and parsing continues with
//! its siblings.

use crate::{ContentDocument, LoadingQueue, Registry};
use derive_getters::Getters;
use phosphor_core::{
    Bitmap, Command, CommandAction, Dialog, DialogKind, ElementContent, ElementKind, IdGenerator,
    Link, LinkTarget, LinkTargetEntry, Prompt, Screen, ScreenElement, ScreenKind, TargetKind,
    Toggle, ToggleState,
};
use phosphor_error::{ContentError, ContentErrorKind};
use serde_json::Value;
use std::str::FromStr;

/// Output of a parse: the registry, the loading queue and the dropped records.
#[derive(Debug, Clone, Default, Getters)]
pub struct ParsedContent {
    /// Screens and dialogs that survived parsing
    registry: Registry,
    /// Elements awaiting external preparation
    loading: LoadingQueue,
    /// Why records were dropped, in encounter order
    issues: Vec<ContentError>,
}

impl ParsedContent {
    /// Splits the output into its parts.
    pub fn into_parts(self) -> (Registry, LoadingQueue, Vec<ContentError>) {
        (self.registry, self.loading, self.issues)
    }
}

/// Splits an authored multi-line string into one line per element.
///
/// Empty lines are kept, so joining the result with `\n` gives back the input.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// A content entry after newline splitting and flattening.
enum Entry<'a> {
    Line(String),
    Record(&'a Value),
}

/// Stateful parser: owns id generation and collects issues.
#[derive(Debug, Default)]
pub struct ContentParser {
    ids: IdGenerator,
    loading: LoadingQueue,
    issues: Vec<ContentError>,
}

impl ContentParser {
    /// Creates a parser with a fresh id sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a whole document.
    #[tracing::instrument(skip_all, fields(screens = document.screens().len(), dialogs = document.dialogs().len()))]
    pub fn parse(document: &ContentDocument) -> ParsedContent {
        let mut parser = Self::new();
        let mut registry = Registry::new();

        for raw in document.screens() {
            // Checked before parsing so a dropped screen queues no loads
            if let Some(id) = record_id(raw)
                && registry.screen(id).is_some()
            {
                parser.drop_record(ContentErrorKind::DuplicateId(id.to_string()));
                continue;
            }
            if let Some(screen) = parser.parse_screen(raw) {
                let id = screen.id().clone();
                if !registry.insert_screen(screen) {
                    parser.drop_record(ContentErrorKind::DuplicateId(id));
                }
            }
        }

        for raw in document.dialogs() {
            if let Some(dialog) = parser.parse_dialog(raw) {
                let id = dialog.id().clone();
                if !registry.insert_dialog(dialog) {
                    parser.drop_record(ContentErrorKind::DuplicateId(id));
                }
            }
        }

        tracing::info!(
            screens = registry.screens().len(),
            dialogs = registry.dialogs().len(),
            pending_loads = parser.loading.len(),
            dropped = parser.issues.len(),
            "Parsed content"
        );

        ParsedContent {
            registry,
            loading: parser.loading,
            issues: parser.issues,
        }
    }

    /// Parses one screen record; `None` when the screen is dropped.
    pub fn parse_screen(&mut self, raw: &Value) -> Option<Screen> {
        let Some(id) = record_id(raw) else {
            self.drop_record(ContentErrorKind::MissingId);
            return None;
        };

        let tag = raw.get("type").and_then(Value::as_str).unwrap_or_default();
        let Ok(kind) = ScreenKind::from_str(tag) else {
            self.drop_record(ContentErrorKind::UnknownScreenKind {
                id: id.to_string(),
                kind: tag.to_string(),
            });
            return None;
        };

        let content = raw
            .get("content")
            .and_then(Value::as_array)
            .map(|entries| self.parse_content(id, entries))
            .unwrap_or_default();

        if content.is_empty() {
            self.drop_record(ContentErrorKind::EmptyScreen(id.to_string()));
            return None;
        }

        tracing::debug!(screen = %id, elements = content.len(), "Parsed screen");
        Some(Screen::new(id, kind, content))
    }

    /// Parses one dialog record; `None` when the dialog is dropped.
    pub fn parse_dialog(&mut self, raw: &Value) -> Option<Dialog> {
        let Some(id) = record_id(raw) else {
            self.drop_record(ContentErrorKind::MissingId);
            return None;
        };

        let tag = raw.get("type").and_then(Value::as_str).unwrap_or_default();
        let Ok(kind) = DialogKind::from_str(tag) else {
            self.drop_record(ContentErrorKind::UnknownDialogKind {
                id: id.to_string(),
                kind: tag.to_string(),
            });
            return None;
        };

        let lines = match kind {
            DialogKind::Alert => match raw.get("content") {
                Some(Value::String(text)) => split_lines(text),
                Some(Value::Array(entries)) => entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
                _ => Vec::new(),
            },
            DialogKind::Confirm | DialogKind::Custom => {
                tracing::debug!(dialog = %id, kind = %kind, "Dialog content not interpreted");
                Vec::new()
            }
        };

        Some(Dialog::new(id, kind, lines))
    }

    /// Parses a content list: split strings, flatten, then build typed elements.
    pub fn parse_content(&mut self, parent: &str, entries: &[Value]) -> Vec<ScreenElement> {
        let flattened: Vec<Entry<'_>> = entries
            .iter()
            .flat_map(|entry| match entry {
                Value::String(text) => split_lines(text)
                    .into_iter()
                    .map(Entry::Line)
                    .collect::<Vec<_>>(),
                other => vec![Entry::Record(other)],
            })
            .collect();

        flattened
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match entry {
                Entry::Line(text) => Some(self.build(ElementContent::Text(text), false, None)),
                Entry::Record(record) => self.parse_element(parent, index, record),
            })
            .collect()
    }

    fn parse_element(
        &mut self,
        parent: &str,
        index: usize,
        record: &Value,
    ) -> Option<ScreenElement> {
        let Some(tag) = record.get("type").and_then(Value::as_str) else {
            self.drop_record(ContentErrorKind::MissingElementType {
                parent: parent.to_string(),
                index,
            });
            return None;
        };

        let Ok(kind) = ElementKind::from_str(tag) else {
            self.drop_record(ContentErrorKind::UnknownElementType {
                parent: parent.to_string(),
                index,
                kind: tag.to_string(),
            });
            return None;
        };

        let content = match kind {
            ElementKind::Text => string_field(record, "text").map(ElementContent::Text),
            ElementKind::Link => self.parse_link(parent, index, record),
            ElementKind::Bitmap => string_field(record, "src").map(|src| {
                ElementContent::Bitmap(Bitmap::new(src, string_field(record, "alt")))
            }),
            ElementKind::Prompt => Some(self.parse_prompt(parent, index, record)),
            ElementKind::Toggle => parse_toggle(record),
        };

        let Some(content) = content else {
            self.drop_record(ContentErrorKind::MissingField {
                parent: parent.to_string(),
                index,
                kind: kind.to_string(),
                field: missing_field(kind, record).to_string(),
            });
            return None;
        };

        let on_load = match record.get("onLoad") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(_) => true,
        };
        let class_name = string_field(record, "className");

        Some(self.build(content, on_load, class_name))
    }

    fn parse_link(&mut self, parent: &str, index: usize, record: &Value) -> Option<ElementContent> {
        let text = string_field(record, "text")?;
        let target = match record.get("target")? {
            Value::String(screen) => LinkTarget::Screen(screen.clone()),
            Value::Array(entries) => {
                let parsed: Vec<LinkTargetEntry> = entries
                    .iter()
                    .filter_map(|entry| {
                        let parsed = parse_target_entry(entry);
                        if parsed.is_none() {
                            self.drop_record(ContentErrorKind::MissingField {
                                parent: parent.to_string(),
                                index,
                                kind: ElementKind::Link.to_string(),
                                field: "target[].target".to_string(),
                            });
                        }
                        parsed
                    })
                    .collect();
                if parsed.is_empty() {
                    return None;
                }
                LinkTarget::Conditional(parsed)
            }
            _ => return None,
        };
        Some(ElementContent::Link(Link::new(text, target)))
    }

    fn parse_prompt(&mut self, parent: &str, index: usize, record: &Value) -> ElementContent {
        let commands = record
            .get("commands")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| {
                        let parsed = parse_command(entry);
                        if parsed.is_none() {
                            self.drop_record(ContentErrorKind::MissingField {
                                parent: parent.to_string(),
                                index,
                                kind: ElementKind::Prompt.to_string(),
                                field: "commands[].command".to_string(),
                            });
                        }
                        parsed
                    })
                    .collect()
            })
            .unwrap_or_default();

        ElementContent::Prompt(Prompt::new(string_field(record, "prompt"), commands))
    }

    fn build(
        &mut self,
        content: ElementContent,
        on_load: bool,
        class_name: Option<String>,
    ) -> ScreenElement {
        let id = self.ids.next_id();
        if on_load {
            self.loading.push(id);
        }
        ScreenElement::new(id, content, on_load, class_name)
    }

    #[track_caller]
    fn drop_record(&mut self, kind: ContentErrorKind) {
        let issue = ContentError::new(kind);
        tracing::warn!(reason = %issue.kind, "Dropped malformed record");
        self.issues.push(issue);
    }
}

fn record_id(raw: &Value) -> Option<&str> {
    raw.get("id").and_then(Value::as_str).filter(|id| !id.is_empty())
}

fn string_field(record: &Value, field: &str) -> Option<String> {
    record.get(field).and_then(Value::as_str).map(str::to_string)
}

fn missing_field(kind: ElementKind, record: &Value) -> &'static str {
    match kind {
        ElementKind::Text => "text",
        ElementKind::Link if string_field(record, "text").is_none() => "text",
        ElementKind::Link => "target",
        ElementKind::Bitmap => "src",
        ElementKind::Prompt => "commands",
        ElementKind::Toggle => "states",
    }
}

fn parse_target_entry(entry: &Value) -> Option<LinkTargetEntry> {
    let target = entry.get("target").and_then(Value::as_str)?;
    let kind = entry
        .get("type")
        .and_then(Value::as_str)
        .map(TargetKind::from)
        .unwrap_or_else(|| TargetKind::Other(String::new()));
    let locked = entry.get("locked").and_then(Value::as_bool).unwrap_or(false);
    Some(LinkTargetEntry::new(target, kind, locked))
}

fn parse_command(entry: &Value) -> Option<Command> {
    let command = entry.get("command").and_then(Value::as_str)?;
    let action = entry.get("action")?;
    let kind = action.get("type").and_then(Value::as_str)?;
    let target = action.get("target").and_then(Value::as_str).map(str::to_string);
    Some(Command::new(
        command,
        CommandAction::new(kind.into(), target),
    ))
}

fn parse_toggle(record: &Value) -> Option<ElementContent> {
    let states = record
        .get("states")?
        .as_array()?
        .iter()
        .filter_map(|state| {
            let text = state.get("text").and_then(Value::as_str)?;
            let active = state.get("active").and_then(Value::as_bool).unwrap_or(false);
            Some(ToggleState::new(text, active))
        })
        .collect();
    Toggle::new(states).map(ElementContent::Toggle)
}
