//! Poll cycle errors

use hwbot_client::ClientError;
use hwbot_core::ResponseError;
use thiserror::Error;

/// Anything that can go wrong within a single poll cycle
#[derive(Debug, Error)]
pub enum PollError {
    /// The review API could not be reached or answered with an error
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The review API answered, but the payload was unusable
    #[error(transparent)]
    Response(#[from] ResponseError),
}

impl PollError {
    /// Short name of the failure kind, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            PollError::Client(ClientError::ConnectionFailed { .. }) => "connection_failed",
            PollError::Client(ClientError::RequestFailed { .. }) => "request_failed",
            PollError::Client(ClientError::ParseError(_)) => "malformed_response",
            PollError::Client(ClientError::DeliveryRejected(_)) => "notification_delivery_failed",
            PollError::Response(ResponseError::MalformedResponse(_)) => "malformed_response",
            PollError::Response(ResponseError::MissingKey(_)) => "missing_response_key",
            PollError::Response(ResponseError::UnknownStatus(_)) => "unknown_homework_status",
        }
    }
}
