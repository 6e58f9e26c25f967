//! Hwbot HTTP Clients
//!
//! Thin, typed clients for the two remote services the bot talks to:
//! - [`PracticumClient`]: the homework statuses endpoint of the review API
//! - [`TelegramClient`]: the Bot API `sendMessage` method
//!
//! Both clients keep transport failures ([`ClientError::ConnectionFailed`])
//! apart from non-success answers ([`ClientError::RequestFailed`]).
//!
//! # Example
//!
//! ```no_run
//! use hwbot_client::{PracticumClient, TelegramClient};
//!
//! # async fn example() -> hwbot_client::Result<()> {
//! let practicum = PracticumClient::new(hwbot_client::DEFAULT_PRACTICUM_ENDPOINT, "token");
//! let body = practicum.homework_statuses(0).await?;
//!
//! let telegram = TelegramClient::new(hwbot_client::DEFAULT_TELEGRAM_API_URL, "bot-token");
//! telegram.send_message("12345", &body.to_string()).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
mod practicum;
mod telegram;

pub use error::{ClientError, Result};
pub use practicum::{DEFAULT_PRACTICUM_ENDPOINT, PracticumClient};
pub use telegram::{DEFAULT_TELEGRAM_API_URL, TelegramClient};

use serde::de::DeserializeOwned;
use tracing::info;

// =============================================================================
// Response Handlers
// =============================================================================

/// Check the status code and deserialize a JSON body
///
/// `endpoint` is the label used in errors and must not contain secrets;
/// `params` describes the request for errors and logs.
async fn handle_response<T: DeserializeOwned>(
    endpoint: &str,
    params: &str,
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        info!("Request to {} with {} failed with status {}", endpoint, params, status);
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::request_failed(
            endpoint,
            status.as_u16(),
            error_text,
        ));
    }

    let bytes = response.bytes().await.map_err(|e| {
        info!("Reading response from {} with {} failed: {}", endpoint, params, e);
        ClientError::connection(endpoint, params, e)
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        info!("Response from {} with {} is not valid JSON: {}", endpoint, params, e);
        ClientError::ParseError(format!("Failed to parse JSON response: {}", e))
    })
}
