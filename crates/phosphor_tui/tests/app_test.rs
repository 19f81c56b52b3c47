//! Tests for terminal input handling and renderer sequencing.

use phosphor_core::{AppStatus, ElementId};
use phosphor_narrative::{ContentDocument, Narrative, RenderConfig};
use phosphor_tui::App;
use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use serde_json::json;
use std::time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(100);

fn app(value: serde_json::Value) -> App {
    let doc: ContentDocument = serde_json::from_value(value).unwrap();
    let mut narrative = Narrative::initialize(&doc);
    narrative.start(None);
    App::new(narrative, RenderConfig::default())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

fn click(kind: MouseEventKind, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column: 0,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn tick_until_done(app: &mut App) {
    for _ in 0..1_000 {
        if app.narrative().state().status() == AppStatus::Done {
            return;
        }
        app.tick(FRAME);
    }
}

fn element(app: &App, index: usize) -> ElementId {
    app.plan()[index].element()
}

fn door() -> App {
    app(json!({
        "screens": [
            {"id": "door", "type": "screen", "content": [
                {"type": "link", "text": "Open", "target": [
                    {"target": "secret", "type": "dialog", "locked": true},
                    {"target": "normal", "type": "link"}
                ]},
                {"type": "toggle", "states": [{"text": "[ ] lamp"}, {"text": "[x] lamp"}]}
            ]},
            {"id": "normal", "type": "screen", "content": ["Nothing special."]}
        ],
        "dialogs": [{"id": "secret", "type": "alert", "content": "You found it"}]
    }))
}

#[test]
fn test_ticks_reveal_elements_in_order() {
    let mut app = app(json!({
        "screens": [{"id": "intro", "type": "screen", "content": ["ab\ncd"]}]
    }));
    let first = element(&app, 0);
    let second = element(&app, 1);

    assert_eq!(app.reveal_frame(first).as_deref(), Some("█"));

    app.tick(FRAME);
    assert_eq!(app.narrative().state().active_element(), Some(second));
    assert_eq!(app.reveal_frame(first), None);
    assert_eq!(app.reveal_frame(second).as_deref(), Some("█"));

    app.tick(FRAME);
    assert_eq!(app.narrative().state().status(), AppStatus::Done);
    assert_eq!(app.narrative().state().active_element(), None);
}

#[test]
fn test_prompt_typing_and_dialog_keys() {
    let mut app = app(json!({
        "screens": [{"id": "console", "type": "screen", "content": [
            {"type": "prompt", "commands": [
                {"command": "help", "action": {"type": "dialog", "target": "helpDialog"}}
            ]}
        ]}],
        "dialogs": [{"id": "helpDialog", "type": "alert", "content": "Type look"}]
    }));
    app.tick(FRAME);

    type_text(&mut app, "helpp~");
    assert_eq!(app.input(), "helpp");
    app.handle_key(key(KeyCode::Backspace));
    assert_eq!(app.input(), "help");

    app.handle_key(key(KeyCode::Enter));
    assert!(app.narrative().state().dialog_open());
    assert_eq!(app.input(), "");

    app.handle_key(key(KeyCode::Enter));
    assert!(!app.narrative().state().dialog_open());
    assert!(!app.should_quit);

    app.handle_key(key(KeyCode::Esc));
    assert!(app.should_quit);
}

#[test]
fn test_escape_closes_dialog_before_quitting() {
    let mut app = door();
    app.tick(FRAME);
    app.tick(FRAME);
    let link = element(&app, 0);

    app.press(link, true, Instant::now());
    app.release(Instant::now());
    assert!(app.narrative().state().dialog_open());

    app.handle_key(key(KeyCode::Esc));
    assert!(!app.narrative().state().dialog_open());
    assert!(!app.should_quit);
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = door();
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[test]
fn test_long_press_unlocks_and_short_click_follows() {
    let mut app = door();
    app.tick(FRAME);
    app.tick(FRAME);
    let link = element(&app, 0);

    let start = Instant::now();
    app.press(link, false, start);
    app.release(start + Duration::from_millis(600));
    assert_eq!(
        app.narrative().state().active_dialog().as_deref(),
        Some("secret")
    );
    app.handle_key(key(KeyCode::Enter));

    let start = Instant::now();
    app.press(link, false, start);
    app.release(start + Duration::from_millis(50));
    assert_eq!(
        app.narrative().state().active_screen().as_deref(),
        Some("normal")
    );
}

#[test]
fn test_presses_ignore_unrevealed_elements() {
    let mut app = door();
    let link = element(&app, 0);

    app.press(link, false, Instant::now());
    app.release(Instant::now());

    assert_eq!(
        app.narrative().state().active_screen().as_deref(),
        Some("door")
    );
}

#[test]
fn test_tab_focus_and_enter_on_toggle() {
    let mut app = door();
    app.tick(FRAME);
    app.tick(FRAME);
    let link = element(&app, 0);
    let toggle = element(&app, 1);

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.focus(), Some(link));
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.focus(), Some(toggle));
    app.handle_key(key(KeyCode::BackTab));
    app.handle_key(key(KeyCode::BackTab));
    assert_eq!(app.focus(), Some(toggle));

    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.narrative().state().toggle_position(toggle), Some(1));
}

#[test]
fn test_shift_enter_unlocks_focused_link() {
    let mut app = door();
    app.tick(FRAME);
    app.tick(FRAME);

    app.handle_key(key(KeyCode::Tab));
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT));

    assert_eq!(
        app.narrative().state().active_dialog().as_deref(),
        Some("secret")
    );
}

#[test]
fn test_screen_change_remounts_renderers() {
    let mut app = door();
    app.tick(FRAME);
    app.tick(FRAME);
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(
        app.narrative().state().active_screen().as_deref(),
        Some("normal")
    );
    assert_eq!(app.focus(), None);
    let line = element(&app, 0);
    assert_eq!(app.reveal_frame(line).as_deref(), Some("█"));
}

#[test]
fn test_loading_bitmap_is_resolved_by_the_terminal() {
    let mut app = app(json!({
        "screens": [{"id": "logo", "type": "screen", "content": [
            {"type": "bitmap", "src": "logo.png", "alt": "LOGO", "onLoad": true},
            "Ready."
        ]}]
    }));
    let bitmap = element(&app, 0);

    assert!(app.narrative().state().loading().is_empty());
    assert_eq!(app.narrative().state().active_element(), Some(bitmap));
    assert!(app.reveal_frame(bitmap).is_some());

    tick_until_done(&mut app);
    assert_eq!(app.narrative().state().status(), AppStatus::Done);
    assert!(app.plan().iter().all(|i| i.is_visible()));
}

#[test]
fn test_demo_terminal_screen_plays_through() {
    let doc: ContentDocument = include_str!("../../../demos/terminal.json").parse().unwrap();
    let mut narrative = Narrative::initialize(&doc);
    assert!(narrative.issues().is_empty());
    narrative.start(Some("terminal"));
    let mut app = App::new(narrative, RenderConfig::default());

    tick_until_done(&mut app);
    assert_eq!(app.narrative().state().status(), AppStatus::Done);
    assert_eq!(app.narrative().state().active_element(), None);
    assert!(app.plan().iter().all(|i| i.is_visible()));
}

#[test]
fn test_click_dismisses_dialog_without_activating() {
    let mut app = door();
    app.tick(FRAME);
    app.tick(FRAME);
    let link = element(&app, 0);
    app.set_hit_rows(vec![(1, link)]);

    app.press(link, true, Instant::now());
    app.release(Instant::now());
    assert!(app.narrative().state().dialog_open());

    app.handle_mouse(click(MouseEventKind::Down(MouseButton::Left), 1));
    app.handle_mouse(click(MouseEventKind::Up(MouseButton::Left), 1));

    assert!(!app.narrative().state().dialog_open());
    assert_eq!(
        app.narrative().state().active_screen().as_deref(),
        Some("door")
    );
    assert!(!app.should_quit);
}
