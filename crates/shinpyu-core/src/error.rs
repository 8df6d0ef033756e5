//! Error types for the Shinpyu invitation

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for invitation content operations
#[derive(Error, Debug)]
pub enum InvitationError {
    /// The content document does not exist at the configured path
    #[error("Content not found: {}", .0.display())]
    ContentNotFound(PathBuf),

    /// General I/O error while reading the content document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The content document is not valid JSON or has the wrong shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Unknown locale code
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
}

/// Result type alias using InvitationError
pub type InvitationResult<T> = Result<T, InvitationError>;
