//! Tests for content parsing and the screen registry.

use phosphor_core::{
    DialogKind, ElementContent, ElementState, LinkTarget, ScreenKind, TargetKind,
};
use phosphor_error::ContentErrorKind;
use phosphor_narrative::{ContentDocument, ContentParser, split_lines};
use serde_json::json;

fn document(value: serde_json::Value) -> ContentDocument {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_multiline_text_and_link_parse_in_order() {
    let doc = document(json!({
        "screens": [{
            "id": "roomA",
            "type": "screen",
            "content": ["Hello\nWorld", {"type": "link", "text": "Go", "target": "roomB"}]
        }]
    }));

    let parsed = ContentParser::parse(&doc);
    let screen = parsed.registry().screen("roomA").unwrap();
    let content = screen.content();

    assert_eq!(content.len(), 3);
    assert_eq!(content[0].content(), &ElementContent::Text("Hello".to_string()));
    assert_eq!(content[1].content(), &ElementContent::Text("World".to_string()));
    match content[2].content() {
        ElementContent::Link(link) => {
            assert_eq!(link.text(), "Go");
            assert_eq!(link.target(), &LinkTarget::Screen("roomB".to_string()));
        }
        other => panic!("Expected link, got {:?}", other),
    }

    assert!(content[0].id() < content[1].id());
    assert!(content[1].id() < content[2].id());
    assert!(content.iter().all(|e| e.state() == ElementState::Ready));
    assert!(parsed.issues().is_empty());
    assert!(parsed.loading().is_empty());
}

#[test]
fn test_content_length_counts_only_valid_entries() {
    let doc = document(json!({
        "screens": [{
            "id": "mixed",
            "type": "SCREEN",
            "content": [
                "a",
                {"type": "Text", "text": "b"},
                {"type": "video", "src": "clip.mp4"},
                {"text": "no type"},
                {"type": "bitmap", "src": "logo.png", "alt": "Logo"},
                {"type": "link", "text": "dangling"}
            ]
        }]
    }));

    let parsed = ContentParser::parse(&doc);
    let screen = parsed.registry().screen("mixed").unwrap();

    assert_eq!(screen.kind(), ScreenKind::Interactive);
    assert_eq!(screen.content().len(), 3);
    assert_eq!(parsed.issues().len(), 3);
    assert!(matches!(
        parsed.issues()[0].kind(),
        ContentErrorKind::UnknownElementType { kind, .. } if kind == "video"
    ));
    assert!(matches!(
        parsed.issues()[1].kind(),
        ContentErrorKind::MissingElementType { index: 3, .. }
    ));
    assert!(matches!(
        parsed.issues()[2].kind(),
        ContentErrorKind::MissingField { field, .. } if field == "target"
    ));
}

#[test]
fn test_screen_without_valid_content_is_dropped() {
    let doc = document(json!({
        "screens": [
            {"id": "empty", "type": "screen", "content": [{"type": "hologram"}]},
            {"id": "bare", "type": "screen"},
            {"id": "kept", "type": "static", "content": ["still here"]}
        ]
    }));

    let parsed = ContentParser::parse(&doc);

    assert!(parsed.registry().screen("empty").is_none());
    assert!(parsed.registry().screen("bare").is_none());
    assert_eq!(parsed.registry().screens().len(), 1);
    assert_eq!(
        parsed.registry().screen("kept").unwrap().kind(),
        ScreenKind::StaticPage
    );
    assert!(parsed.issues().iter().any(|issue| matches!(
        issue.kind(),
        ContentErrorKind::EmptyScreen(id) if id == "empty"
    )));
}

#[test]
fn test_malformed_screen_records_are_dropped() {
    let doc = document(json!({
        "screens": [
            {"type": "screen", "content": ["no id"]},
            {"id": "odd", "type": "carousel", "content": ["x"]},
            {"id": "ok", "type": "screen", "content": ["fine"]},
            {"id": "ok", "type": "screen", "content": ["duplicate"]}
        ]
    }));

    let parsed = ContentParser::parse(&doc);
    let kinds: Vec<_> = parsed.issues().iter().map(|i| i.kind().clone()).collect();

    assert_eq!(parsed.registry().screens().len(), 1);
    assert_eq!(
        parsed.registry().screen("ok").unwrap().content()[0].content(),
        &ElementContent::Text("fine".to_string())
    );
    assert_eq!(
        kinds,
        vec![
            ContentErrorKind::MissingId,
            ContentErrorKind::UnknownScreenKind {
                id: "odd".to_string(),
                kind: "carousel".to_string()
            },
            ContentErrorKind::DuplicateId("ok".to_string()),
        ]
    );
}

#[test]
fn test_on_load_elements_start_unloaded_and_queue() {
    let doc = document(json!({
        "screens": [{
            "id": "gallery",
            "type": "screen",
            "content": [
                {"type": "bitmap", "src": "a.png", "onLoad": true},
                {"type": "text", "text": "caption", "onLoad": null},
                {"type": "bitmap", "src": "b.png", "onLoad": "decode"}
            ]
        }]
    }));

    let parsed = ContentParser::parse(&doc);
    let content = parsed.registry().screen("gallery").unwrap().content();

    assert_eq!(content[0].state(), ElementState::Unloaded);
    assert_eq!(content[1].state(), ElementState::Ready);
    assert_eq!(content[2].state(), ElementState::Unloaded);
    assert_eq!(
        parsed.loading().iter().collect::<Vec<_>>(),
        vec![content[0].id(), content[2].id()]
    );
}

#[test]
fn test_duplicate_screen_queues_no_loads() {
    let doc = document(json!({
        "screens": [
            {"id": "a", "type": "screen", "content": ["first"]},
            {"id": "a", "type": "screen", "content": [
                {"type": "bitmap", "src": "late.png", "onLoad": true}
            ]}
        ]
    }));

    let parsed = ContentParser::parse(&doc);

    assert!(parsed.loading().is_empty());
    assert!(
        parsed
            .loading()
            .iter()
            .all(|id| parsed.registry().element(id).is_some())
    );
    assert_eq!(
        parsed.issues()[0].kind(),
        &ContentErrorKind::DuplicateId("a".to_string())
    );
    assert_eq!(parsed.registry().screen("a").unwrap().content().len(), 1);
}

#[test]
fn test_conditional_link_and_prompt_fields() {
    let doc = document(json!({
        "screens": [{
            "id": "door",
            "type": "screen",
            "content": [
                {
                    "type": "link",
                    "text": "Enter",
                    "className": "blink",
                    "target": [
                        {"target": "secret", "type": "dialog", "locked": true},
                        {"target": "hall", "type": "link"}
                    ]
                },
                {
                    "type": "prompt",
                    "commands": [
                        {"command": "help", "action": {"type": "dialog", "target": "helpDialog"}},
                        {"command": "broken"}
                    ]
                }
            ]
        }]
    }));

    let parsed = ContentParser::parse(&doc);
    let content = parsed.registry().screen("door").unwrap().content();

    assert_eq!(content[0].class_name().as_deref(), Some("blink"));
    let ElementContent::Link(link) = content[0].content() else {
        panic!("Expected link");
    };
    let LinkTarget::Conditional(entries) = link.target() else {
        panic!("Expected conditional target");
    };
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].kind(), &TargetKind::Dialog);
    assert!(entries[0].locked());
    assert!(!entries[1].locked());

    let ElementContent::Prompt(prompt) = content[1].content() else {
        panic!("Expected prompt");
    };
    assert!(prompt.prompt().is_none());
    assert_eq!(prompt.commands().len(), 1);
    assert_eq!(parsed.issues().len(), 1);
}

#[test]
fn test_toggle_requires_states() {
    let doc = document(json!({
        "screens": [{
            "id": "switches",
            "type": "screen",
            "content": [
                {"type": "toggle", "states": []},
                {"type": "toggle", "states": [{"text": "off"}, {"text": "on", "active": true}]}
            ]
        }]
    }));

    let parsed = ContentParser::parse(&doc);
    let content = parsed.registry().screen("switches").unwrap().content();

    assert_eq!(content.len(), 1);
    let ElementContent::Toggle(toggle) = content[0].content() else {
        panic!("Expected toggle");
    };
    assert_eq!(toggle.active_index(), 1);
}

#[test]
fn test_alert_dialogs_carry_lines() {
    let doc = document(json!({
        "screens": [{"id": "s", "type": "screen", "content": ["x"]}],
        "dialogs": [
            {"id": "helpDialog", "type": "Alert", "content": "Type help\nor quit"},
            {"id": "sure", "type": "confirm", "content": ["ignored"]},
            {"id": "weird", "type": "popover", "content": "nope"}
        ]
    }));

    let parsed = ContentParser::parse(&doc);
    let help = parsed.registry().dialog("helpDialog").unwrap();

    assert_eq!(help.kind(), DialogKind::Alert);
    assert_eq!(help.lines(), &vec!["Type help".to_string(), "or quit".to_string()]);
    assert!(parsed.registry().dialog("sure").unwrap().lines().is_empty());
    assert!(parsed.registry().dialog("weird").is_none());
}

#[test]
fn test_element_ids_are_unique_across_screens() {
    let doc = document(json!({
        "screens": [
            {"id": "a", "type": "screen", "content": ["1\n2"]},
            {"id": "b", "type": "screen", "content": ["3\n4"]}
        ]
    }));

    let parsed = ContentParser::parse(&doc);
    let mut ids: Vec<_> = parsed
        .registry()
        .screens()
        .iter()
        .flat_map(|s| s.content().iter().map(|e| e.id()))
        .collect();
    let total = ids.len();
    ids.dedup();

    assert_eq!(total, 4);
    assert_eq!(ids.len(), 4);
    let owner = parsed.registry().screen_of(ids[3]).unwrap();
    assert_eq!(owner.id(), "b");
}

#[test]
fn test_split_lines_round_trip() {
    for text in ["Hello\nWorld", "single", "", "\n", "a\n\nb\n", "trailing\n"] {
        assert_eq!(split_lines(text).join("\n"), text);
    }
}

#[test]
fn test_invalid_document_is_an_error() {
    let err = "not json".parse::<ContentDocument>().unwrap_err();
    assert!(matches!(err.kind(), ContentErrorKind::InvalidDocument(_)));

    let empty: ContentDocument = "{}".parse().unwrap();
    assert!(empty.screens().is_empty());
    assert!(ContentParser::parse(&empty).registry().is_empty());
}

#[test]
fn test_document_from_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file_path = temp_dir.path().join("content.json");
    std::fs::write(
        &file_path,
        r#"{"screens": [{"id": "intro", "type": "screen", "content": ["hi"]}]}"#,
    )
    .unwrap();

    let doc = ContentDocument::from_file(&file_path).unwrap();
    assert_eq!(doc.screens().len(), 1);
    assert!(doc.dialogs().is_empty());

    let missing = ContentDocument::from_file(temp_dir.path().join("missing.json"));
    assert!(missing.is_err());
}
