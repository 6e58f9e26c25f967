//! Hwbot
//!
//! A long-running bot that watches the homework review API and reports
//! status changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: CLI flags with environment fallbacks (and an optional `.env`)
//! - Repositories: HTTP access to the review API
//! - Services: Best-effort Telegram notifications
//! - Scheduler: The fixed-interval poll loop
//!
//! The bot polls every retry period, reports the most recent homework's new
//! status, and reports failures once per distinct failure text.

mod config;
mod error;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use clap::Parser;
use hwbot_client::{
    DEFAULT_PRACTICUM_ENDPOINT, DEFAULT_TELEGRAM_API_URL, PracticumClient, TelegramClient,
};
use hwbot_core::Credentials;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::{HomeworkRepository, HttpHomeworkRepository};
use crate::scheduler::{PollState, StatusPoller};
use crate::service::{NotificationService, TelegramNotificationService};

#[derive(Parser)]
#[command(name = "hwbot")]
#[command(about = "Homework review status Telegram bot", long_about = None)]
#[command(after_help = "Credentials are read from PRACTICUM_TOKEN, TELEGRAM_TOKEN and TELEGRAM_CHAT_ID only.")]
struct Cli {
    /// Homework statuses endpoint
    #[arg(long, env = "PRACTICUM_ENDPOINT", default_value = DEFAULT_PRACTICUM_ENDPOINT)]
    endpoint: String,

    /// Telegram Bot API base URL
    #[arg(long, env = "TELEGRAM_API_URL", default_value = DEFAULT_TELEGRAM_API_URL)]
    telegram_api_url: String,

    /// Seconds to wait between two polls
    #[arg(long, env = "RETRY_PERIOD", default_value_t = 600)]
    retry_period: u64,

    /// Initial lower bound (Unix time); defaults to now
    #[arg(long, env = "FROM_DATE")]
    from_date: Option<i64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "hwbot_runner=debug,hwbot_client=info,hwbot_core=info".into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }

    let config = load_config(Cli::parse(), Credentials::from_env())?;
    info!(
        "Loaded configuration: endpoint={}, telegram_api_url={}, retry_period={:?}",
        config.endpoint, config.telegram_api_url, config.retry_period
    );

    let repository: Arc<dyn HomeworkRepository> = Arc::new(HttpHomeworkRepository::new(
        PracticumClient::new(&config.endpoint, &config.credentials.practicum_token),
    ));
    let notifier: Arc<dyn NotificationService> = Arc::new(TelegramNotificationService::new(
        TelegramClient::new(&config.telegram_api_url, &config.credentials.telegram_token),
        &config.credentials.telegram_chat_id,
    ));

    let cursor = config
        .from_date
        .unwrap_or_else(|| chrono::Utc::now().timestamp());

    let poller = StatusPoller::new(config.retry_period, repository, notifier);
    poller.run(PollState::new(cursor)).await;

    Ok(())
}

/// Builds and validates the configuration, refusing to start without credentials
///
/// Secrets never come from flags, so they cannot show up in process listings.
fn load_config(cli: Cli, credentials: Credentials) -> Result<Config> {
    let credentials = credentials
        .verify()
        .context("Cannot start: set the missing environment variables")?;

    let config = Config {
        endpoint: cli.endpoint,
        telegram_api_url: cli.telegram_api_url,
        retry_period: Duration::from_secs(cli.retry_period),
        from_date: cli.from_date,
        ..Config::new(credentials)
    };
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["hwbot"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn credentials() -> Credentials {
        Credentials::new(
            Some("p".to_string()),
            Some("t".to_string()),
            Some("42".to_string()),
        )
    }

    #[test]
    fn test_load_config_from_flags() {
        let config = load_config(
            cli(&[
                "--endpoint",
                "http://localhost:9000/statuses/",
                "--retry-period",
                "5",
                "--from-date",
                "1700000000",
            ]),
            credentials(),
        )
        .unwrap();

        assert_eq!(config.credentials.telegram_chat_id, "42");
        assert_eq!(config.endpoint, "http://localhost:9000/statuses/");
        assert_eq!(config.retry_period, Duration::from_secs(5));
        assert_eq!(config.from_date, Some(1700000000));
    }

    #[test]
    fn test_tokens_are_not_accepted_as_flags() {
        for flag in ["--practicum-token", "--telegram-token", "--telegram-chat-id"] {
            assert!(Cli::try_parse_from(["hwbot", flag, "secret"]).is_err(), "{flag}");
        }
    }

    #[test]
    fn test_load_config_rejects_empty_credentials() {
        let empty = Credentials::new(Some(String::new()), Some(String::new()), None);
        let err = load_config(cli(&[]), empty).unwrap_err();

        let chain = format!("{:#}", err);
        assert!(chain.contains("PRACTICUM_TOKEN"));
        assert!(chain.contains("TELEGRAM_TOKEN"));
        assert!(chain.contains("TELEGRAM_CHAT_ID"));
    }

    #[test]
    fn test_load_config_rejects_zero_retry_period() {
        let result = load_config(cli(&["--retry-period", "0"]), credentials());
        assert!(result.is_err());
    }
}
