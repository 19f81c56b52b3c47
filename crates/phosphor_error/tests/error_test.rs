//! Tests for error construction and conversion.

use phosphor_error::{
    ConfigError, ContentError, ContentErrorKind, PhosphorError, PhosphorErrorKind, PhosphorResult,
};

#[test]
fn test_content_error_tracks_location() {
    let err = ContentError::new(ContentErrorKind::MissingId);
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
    assert_eq!(err.kind(), &ContentErrorKind::MissingId);
}

#[test]
fn test_content_error_display_names_the_record() {
    let err = ContentError::new(ContentErrorKind::UnknownElementType {
        parent: "lobby".to_string(),
        index: 2,
        kind: "video".to_string(),
    });
    let text = err.to_string();
    assert!(text.contains("lobby"));
    assert!(text.contains("video"));
    assert!(text.starts_with("Content Error:"));
}

#[test]
fn test_missing_field_display() {
    let kind = ContentErrorKind::MissingField {
        parent: "lobby".to_string(),
        index: 0,
        kind: "link".to_string(),
        field: "target".to_string(),
    };
    assert_eq!(
        kind.to_string(),
        "Element 0 of 'lobby' (link) is missing field 'target'"
    );
}

#[test]
fn test_umbrella_conversion() {
    fn fails() -> PhosphorResult<()> {
        let loaded: Result<(), ConfigError> = Err(ConfigError::new("bad gesture"));
        loaded?;
        Ok(())
    }

    let err = fails().unwrap_err();
    assert!(matches!(err.kind(), PhosphorErrorKind::Config(_)));
    assert!(err.to_string().contains("bad gesture"));
}

#[test]
fn test_content_error_into_umbrella() {
    let err: PhosphorError =
        ContentError::new(ContentErrorKind::InvalidDocument("not an object".into())).into();
    match err.kind() {
        PhosphorErrorKind::Content(inner) => {
            assert!(matches!(inner.kind, ContentErrorKind::InvalidDocument(_)))
        }
        other => panic!("unexpected kind: {other}"),
    }
}
