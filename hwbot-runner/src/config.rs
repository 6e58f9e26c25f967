//! Bot configuration
//!
//! Everything the poll loop needs besides the remote services themselves:
//! credentials, endpoints, and timing.

use hwbot_client::{DEFAULT_PRACTICUM_ENDPOINT, DEFAULT_TELEGRAM_API_URL};
use hwbot_core::VerifiedCredentials;
use std::time::Duration;

/// Bot configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Review API token, bot token and destination chat
    pub credentials: VerifiedCredentials,

    /// Homework statuses endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between two poll cycles, whatever their outcome
    pub retry_period: Duration,

    /// Initial cursor; `None` means "now"
    pub from_date: Option<i64>,
}

impl Config {
    /// Default pause between poll cycles (10 minutes)
    pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);

    /// Creates a new configuration with defaults
    pub fn new(credentials: VerifiedCredentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_PRACTICUM_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            retry_period: Self::DEFAULT_RETRY_PERIOD,
            from_date: None,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !is_http_url(&self.endpoint) {
            anyhow::bail!("endpoint must start with http:// or https://");
        }

        if !is_http_url(&self.telegram_api_url) {
            anyhow::bail!("telegram_api_url must start with http:// or https://");
        }

        if self.retry_period.is_zero() {
            anyhow::bail!("retry_period must be greater than 0");
        }

        if self.from_date.is_some_and(|ts| ts < 0) {
            anyhow::bail!("from_date must not be negative");
        }

        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
