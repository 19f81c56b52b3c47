//! Error types for the Phosphor narrative engine.
//!
//! This crate provides the foundation error types used throughout the Phosphor workspace.

mod config;
mod content;

pub use config::ConfigError;
pub use content::{ContentError, ContentErrorKind};

/// JSON serialization/deserialization error with source location.
#[derive(Debug)]
pub struct JsonError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Create a new JsonError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "JSON Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for JsonError {}

/// File system error with source location.
#[derive(Debug)]
pub struct IoError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl IoError {
    /// Create a new IoError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "I/O Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for IoError {}

/// Terminal front end error with source location.
#[derive(Debug)]
pub struct TuiError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl TuiError {
    /// Create a new TuiError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for TuiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TUI Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for TuiError {}

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum PhosphorErrorKind {
    /// Malformed content document
    Content(ContentError),
    /// Configuration error
    Config(ConfigError),
    /// JSON serialization/deserialization error
    Json(JsonError),
    /// File system error
    Io(IoError),
    /// Terminal front end error
    Tui(TuiError),
}

impl std::fmt::Display for PhosphorErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhosphorErrorKind::Content(e) => write!(f, "{}", e),
            PhosphorErrorKind::Config(e) => write!(f, "{}", e),
            PhosphorErrorKind::Json(e) => write!(f, "{}", e),
            PhosphorErrorKind::Io(e) => write!(f, "{}", e),
            PhosphorErrorKind::Tui(e) => write!(f, "{}", e),
        }
    }
}

/// Phosphor error with kind discrimination.
#[derive(Debug)]
pub struct PhosphorError(Box<PhosphorErrorKind>);

impl PhosphorError {
    /// Create a new error from a kind.
    pub fn new(kind: PhosphorErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PhosphorErrorKind {
        &self.0
    }
}

impl std::fmt::Display for PhosphorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Phosphor Error: {}", self.0)
    }
}

impl std::error::Error for PhosphorError {}

// Anything that converts into a kind converts into the boxed error
impl<T> From<T> for PhosphorError
where
    T: Into<PhosphorErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Phosphor operations.
pub type PhosphorResult<T> = std::result::Result<T, PhosphorError>;
