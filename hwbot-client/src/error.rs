//! Error types for the hwbot HTTP clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the review API or the Bot API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure: DNS, connect, TLS, or reading the body
    #[error("Connection to {endpoint} with {params} failed: {source}")]
    ConnectionFailed {
        /// Endpoint that was being called (never contains secrets)
        endpoint: String,
        /// Request parameters, rendered as `key=value` pairs
        params: String,
        /// Underlying transport error, stripped of its URL
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code
    #[error("Request to {endpoint} failed with status {status}")]
    RequestFailed {
        /// Endpoint that was being called (never contains secrets)
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// Response body, kept for diagnostics
        body: String,
    },

    /// The response body could not be parsed
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The Bot API accepted the request but reported `ok: false`
    #[error("Message delivery rejected: {0}")]
    DeliveryRejected(String),
}

impl ClientError {
    /// Create a connection error, dropping the URL from the transport error
    ///
    /// Bot API URLs embed the bot token, so the URL must not leak into
    /// log lines or notification text.
    pub fn connection(
        endpoint: impl Into<String>,
        params: impl Into<String>,
        source: reqwest::Error,
    ) -> Self {
        Self::ConnectionFailed {
            endpoint: endpoint.into(),
            params: params.into(),
            source: source.without_url(),
        }
    }

    /// Create a request error from status code and body
    pub fn request_failed(endpoint: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::RequestFailed {
            endpoint: endpoint.into(),
            status,
            body: body.into(),
        }
    }

    /// Check if this is a transport-level failure
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::ConnectionFailed { .. })
    }

    /// HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
