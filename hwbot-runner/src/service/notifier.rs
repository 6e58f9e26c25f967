//! Notification service
//!
//! Best-effort delivery of text messages to the operator's chat. A failed
//! delivery is logged and dropped: it must never stop the poll loop.

use async_trait::async_trait;
use hwbot_client::TelegramClient;
use tracing::{debug, error, info};

/// Service for delivering notifications
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Attempts to deliver `message`
    ///
    /// Never fails from the caller's point of view and never retries.
    async fn notify(&self, message: &str);
}

/// Telegram implementation of NotificationService
pub struct TelegramNotificationService {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotificationService {
    /// Creates a notifier that sends every message to `chat_id`
    pub fn new(client: TelegramClient, chat_id: impl Into<String>) -> Self {
        Self {
            client,
            chat_id: chat_id.into(),
        }
    }
}

#[async_trait]
impl NotificationService for TelegramNotificationService {
    async fn notify(&self, message: &str) {
        info!("Sending message to chat {}", self.chat_id);

        match self.client.send_message(&self.chat_id, message).await {
            Ok(()) => debug!("Message sent: {}", message),
            Err(e) => error!("Failed to send message to chat {}: {}", self.chat_id, e),
        }
    }
}
