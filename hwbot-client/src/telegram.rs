//! Telegram Bot API client
//!
//! Only `sendMessage` is needed: the bot never reads updates.

use crate::error::{ClientError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Public Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    base_url: String,
    /// Bot token, embedded in every method URL
    token: String,
    /// HTTP client instance
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct BotApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    /// Create a new Bot API client
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(base_url, token, Client::new())
    }

    /// Create a new Bot API client with a custom HTTP client
    pub fn with_client(base_url: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the Bot API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a plain text message to `chat_id`
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let label = self.method_label("sendMessage");
        let params = format!("chat_id={}", chat_id);

        debug!("Calling {} for chat {}", label, chat_id);

        let response = self
            .client
            .post(&url)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|e| ClientError::connection(label.as_str(), params.as_str(), e))?;

        let reply: BotApiResponse = crate::handle_response(&label, &params, response).await?;

        if !reply.ok {
            return Err(ClientError::DeliveryRejected(
                reply
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            ));
        }

        Ok(())
    }

    /// Method URL with the token masked, safe for errors and logs
    fn method_label(&self, method: &str) -> String {
        format!("{}/bot***/{}", self.base_url, method)
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
