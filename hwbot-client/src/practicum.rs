//! Homework review API client

use crate::error::{ClientError, Result};
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::info;

/// Production homework statuses endpoint
pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// HTTP client for the homework statuses endpoint
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the statuses endpoint
    endpoint: String,
    /// OAuth token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new client for `endpoint`, authenticating with `token`
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// No timeout is set by [`PracticumClient::new`]; pass a configured
    /// client here to add one.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch homework statuses updated since `from_date`
    ///
    /// Returns the raw JSON body; shape validation is left to the caller.
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        let params = [("from_date", from_date)];
        let rendered = format!("from_date={}", from_date);
        info!("Requesting {} with {}", self.endpoint, rendered);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                info!("Request to {} with {} failed: {}", self.endpoint, rendered, e);
                ClientError::connection(self.endpoint.as_str(), rendered.as_str(), e)
            })?;

        let body = crate::handle_response(&self.endpoint, &rendered, response).await?;
        info!("Request to {} with {} succeeded", self.endpoint, rendered);

        Ok(body)
    }
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
