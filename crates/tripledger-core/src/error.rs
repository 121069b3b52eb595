//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The planning backend returned a non-success response.
    ///
    /// Deliberately generic: the backend exposes no structured failure detail
    /// for plan generation.
    #[error("Failed to generate trip plan")]
    GenerationFailed,

    /// The backend rejected a login or registration attempt.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// An operation requiring a signed-in user ran while logged out.
    #[error("You must be logged in to generate a trip plan")]
    NotLoggedIn,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
