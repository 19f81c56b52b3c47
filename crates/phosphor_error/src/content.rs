//! Content error types.
//!
//! Most of these never leave the parser as an `Err`: a malformed screen,
//! dialog or element is dropped and the error is recorded as a parse issue
//! while its siblings keep parsing.

/// Specific error conditions for authored content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ContentErrorKind {
    /// A screen or dialog record has no `id`
    #[display("Record has no id")]
    MissingId,
    /// A screen record carries a `type` that is not a known screen kind
    #[display("Screen '{id}' has unknown type '{kind}'")]
    UnknownScreenKind {
        /// Screen id
        id: String,
        /// The authored type tag
        kind: String,
    },
    /// A dialog record carries a `type` that is not a known dialog kind
    #[display("Dialog '{id}' has unknown type '{kind}'")]
    UnknownDialogKind {
        /// Dialog id
        id: String,
        /// The authored type tag
        kind: String,
    },
    /// A content entry has no `type` tag
    #[display("Element {index} of '{parent}' has no type")]
    MissingElementType {
        /// Owning screen or dialog id
        parent: String,
        /// Position in the flattened content sequence
        index: usize,
    },
    /// A content entry carries an unrecognized `type` tag
    #[display("Element {index} of '{parent}' has unknown type '{kind}'")]
    UnknownElementType {
        /// Owning screen or dialog id
        parent: String,
        /// Position in the flattened content sequence
        index: usize,
        /// The authored type tag
        kind: String,
    },
    /// A content entry lacks a field its type requires
    #[display("Element {index} of '{parent}' ({kind}) is missing field '{field}'")]
    MissingField {
        /// Owning screen or dialog id
        parent: String,
        /// Position in the flattened content sequence
        index: usize,
        /// The element type tag
        kind: String,
        /// Name of the missing field
        field: String,
    },
    /// A screen ended up with no valid elements and was dropped
    #[display("Screen '{_0}' has no valid content")]
    EmptyScreen(String),
    /// A screen or dialog id was already taken by an earlier record
    #[display("Duplicate id '{_0}'")]
    DuplicateId(String),
    /// The document itself does not have the `{screens, dialogs}` shape
    #[display("Invalid content document: {_0}")]
    InvalidDocument(String),
}

/// Content error with location tracking.
///
/// # Examples
///
/// ```
/// use phosphor_error::{ContentError, ContentErrorKind};
///
/// let err = ContentError::new(ContentErrorKind::EmptyScreen("intro".to_string()));
/// assert!(format!("{}", err).contains("no valid content"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Content Error: {} at line {} in {}", kind, line, file)]
pub struct ContentError {
    /// The kind of error that occurred
    pub kind: ContentErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ContentError {
    /// Create a new content error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ContentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ContentErrorKind {
        &self.kind
    }
}
