//! Error types for credential and response handling

use thiserror::Error;

/// Result type alias for response handling
pub type Result<T> = std::result::Result<T, ResponseError>;

/// Errors raised while validating or parsing a review API payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    /// The payload (or a part of it) does not have the expected JSON type
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A required key is absent or empty
    #[error("Missing key \"{0}\" in API response")]
    MissingKey(&'static str),

    /// The homework status is not in the verdict table
    #[error("Unknown homework review status: {0}")]
    UnknownStatus(String),
}

/// Errors raised by the startup credential check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// One or more required secrets were not supplied
    #[error("Missing required credentials: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}
