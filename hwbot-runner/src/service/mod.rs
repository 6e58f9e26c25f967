//! Service layer
//!
//! Services wrap outbound side effects the poll loop depends on.
//! Currently only notification delivery.

mod notifier;

pub use notifier::NotificationService;
pub use notifier::TelegramNotificationService;
