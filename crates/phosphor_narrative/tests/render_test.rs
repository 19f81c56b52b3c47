//! Tests for render planning and completion tokens.

use phosphor_core::{ElementKind, ElementState};
use phosphor_narrative::{
    CompletionToken, ContentDocument, Narrative, NarrativeEvent, RenderMode, RenderPayload,
    RevealEffect,
};
use serde_json::json;

fn load(value: serde_json::Value) -> Narrative {
    let doc: ContentDocument = serde_json::from_value(value).unwrap();
    Narrative::initialize(&doc)
}

fn showcase() -> Narrative {
    load(json!({
        "screens": [
            {"id": "main", "type": "screen", "content": [
                "Welcome",
                {"type": "bitmap", "src": "logo.png", "alt": "LOGO"},
                {"type": "toggle", "states": [{"text": "[ ]"}, {"text": "[x]"}]},
                {"type": "prompt", "commands": []}
            ]},
            {"id": "credits", "type": "static", "content": ["Thanks"]}
        ],
        "dialogs": [{"id": "about", "type": "alert", "content": "v1"}]
    }))
}

#[test]
fn test_plan_is_empty_without_active_screen() {
    assert!(showcase().render_plan("$> ").is_empty());
}

#[test]
fn test_plan_follows_element_states() {
    let mut narrative = showcase();
    narrative.start(None);

    let plan = narrative.render_plan("$> ");
    assert_eq!(plan.len(), 4);
    assert_eq!(
        plan[0].mode(),
        RenderMode::Reveal {
            effect: RevealEffect::Teletype,
            autocomplete: false
        }
    );
    assert_eq!(plan[0].payload(), &RenderPayload::Text("Welcome".to_string()));
    assert!(plan[1..].iter().all(|i| i.mode() == RenderMode::Hidden));

    narrative.complete("main", plan[0].element());
    let plan = narrative.render_plan("$> ");
    assert_eq!(plan[0].mode(), RenderMode::Static { disabled: false });
    assert_eq!(
        plan[1].mode(),
        RenderMode::Reveal {
            effect: RevealEffect::Pixelate,
            autocomplete: false
        }
    );
    assert_eq!(plan[1].payload().display_text(), "LOGO");
}

#[test]
fn test_toggle_and_prompt_payloads() {
    let mut narrative = showcase();
    narrative.start(None);
    let ids: Vec<_> = narrative
        .render_plan("$> ")
        .iter()
        .map(|i| i.element())
        .collect();
    for id in &ids {
        narrative.complete("main", *id);
    }

    let plan = narrative.render_plan("> ");
    assert_eq!(plan[2].kind(), ElementKind::Toggle);
    assert_eq!(plan[2].payload(), &RenderPayload::Text("[ ]".to_string()));
    assert_eq!(plan[3].payload(), &RenderPayload::Text("> ".to_string()));

    narrative.click_toggle(ids[2]);
    let plan = narrative.render_plan("> ");
    assert_eq!(plan[2].payload(), &RenderPayload::Text("[x]".to_string()));
}

#[test]
fn test_prompt_is_disabled_while_dialog_open() {
    let mut narrative = showcase();
    narrative.start(None);
    let ids: Vec<_> = narrative
        .render_plan("$> ")
        .iter()
        .map(|i| i.element())
        .collect();
    for id in &ids {
        narrative.complete("main", *id);
    }

    narrative.toggle_dialog(Some("about"));
    let plan = narrative.render_plan("$> ");
    assert_eq!(plan[3].mode(), RenderMode::Static { disabled: true });
    assert_eq!(plan[0].mode(), RenderMode::Static { disabled: false });

    narrative.close_dialog();
    let plan = narrative.render_plan("$> ");
    assert_eq!(plan[3].mode(), RenderMode::Static { disabled: false });
}

#[test]
fn test_static_page_reveals_with_autocomplete() {
    let mut narrative = showcase();
    narrative.start(Some("credits"));

    let plan = narrative.render_plan("$> ");
    assert_eq!(
        plan[0].mode(),
        RenderMode::Reveal {
            effect: RevealEffect::Teletype,
            autocomplete: true
        }
    );
}

#[test]
fn test_completion_token_fires_once() {
    let mut narrative = showcase();
    narrative.start(None);
    let first = narrative.render_plan("$> ")[0].element();

    let mut token = CompletionToken::reveal("main", first);
    assert!(!token.is_spent());

    let event = token.fire().unwrap();
    assert_eq!(
        event,
        NarrativeEvent::ElementCompleted {
            screen: "main".to_string(),
            element: first
        }
    );
    narrative.dispatch(event);
    assert!(token.is_spent());
    assert_eq!(token.fire(), None);

    let mut rendered = CompletionToken::rendered("main", first);
    if let Some(event) = rendered.fire() {
        narrative.dispatch(event);
    }
    assert_eq!(rendered.fire(), None);

    let states: Vec<_> = narrative
        .state()
        .current_screen()
        .unwrap()
        .content()
        .iter()
        .map(|e| e.state())
        .collect();
    assert_eq!(states[0], ElementState::Done);
    assert_eq!(states[1], ElementState::Active);
    assert_eq!(states[2], ElementState::Ready);
}
