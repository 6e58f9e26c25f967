//! Status poller
//!
//! Polls the review API for homework status changes and notifies the
//! operator. One cycle at a time, strictly sequential: request, validate,
//! parse, notify, then sleep for the retry period no matter what happened.

use hwbot_core::response::{check_response, current_date, parse_status};
use std::sync::Arc;
use tokio::time::{self, Duration};
use tracing::{debug, error, info, warn};

use crate::error::PollError;
use crate::repository::HomeworkRepository;
use crate::service::NotificationService;

/// Message sent once when the bot starts
pub const GREETING: &str = "Hello! Homework status bot started.";

/// Mutable state owned by the poll loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// Lower bound (Unix time) for the next request
    pub cursor: i64,
    /// Text of the last failure that was reported
    pub last_error: Option<String>,
}

impl PollState {
    /// Creates a state starting at `cursor` with no failure reported yet
    pub fn new(cursor: i64) -> Self {
        Self {
            cursor,
            last_error: None,
        }
    }
}

/// Outcome of a successful cycle
#[derive(Debug)]
struct Update {
    /// Notification for the most recent homework, if any
    message: Option<String>,
    /// Next cursor value, if the API sent a usable one
    current_date: Option<i64>,
}

/// Status poller that periodically checks homework statuses
pub struct StatusPoller {
    retry_period: Duration,
    repository: Arc<dyn HomeworkRepository>,
    notifier: Arc<dyn NotificationService>,
}

impl StatusPoller {
    /// Creates a new status poller
    pub fn new(
        retry_period: Duration,
        repository: Arc<dyn HomeworkRepository>,
        notifier: Arc<dyn NotificationService>,
    ) -> Self {
        Self {
            retry_period,
            repository,
            notifier,
        }
    }

    /// Greets the operator, then polls forever
    ///
    /// There is no exit path: the loop ends only with the process.
    pub async fn run(&self, mut state: PollState) {
        info!(
            "Starting status poller (retry period: {:?}, cursor: {})",
            self.retry_period, state.cursor
        );

        self.notifier.notify(GREETING).await;

        loop {
            self.poll_once(&mut state).await;

            debug!("Next poll in {:?}", self.retry_period);
            time::sleep(self.retry_period).await;
        }
    }

    /// Performs a single poll cycle and applies its outcome to `state`
    ///
    /// Failures are reported here and never escape, so the caller can
    /// always go on to sleep.
    pub async fn poll_once(&self, state: &mut PollState) {
        match self.check_for_updates(state.cursor).await {
            Ok(update) => {
                if let Some(message) = update.message {
                    self.notifier.notify(&message).await;
                }

                match update.current_date {
                    Some(next) => {
                        debug!("Advancing cursor from {} to {}", state.cursor, next);
                        state.cursor = next;
                    }
                    None => warn!(
                        "Response has no integer current_date, keeping cursor at {}",
                        state.cursor
                    ),
                }
            }
            Err(e) => self.report_failure(state, e).await,
        }
    }

    async fn check_for_updates(&self, from_date: i64) -> Result<Update, PollError> {
        let response = self.repository.fetch_statuses(from_date).await?;
        let homeworks = check_response(&response)?;

        let message = match homeworks.first() {
            Some(homework) => Some(parse_status(homework)?),
            None => {
                debug!("No homework status updates since {}", from_date);
                None
            }
        };

        Ok(Update {
            message,
            current_date: current_date(&response),
        })
    }

    /// Logs a failed cycle and notifies unless it repeats the last failure
    async fn report_failure(&self, state: &mut PollState, error: PollError) {
        let message = format!("Program failure: {}", error);
        error!(kind = error.kind(), "{} ({:?})", message, error);

        if state.last_error.as_deref() == Some(message.as_str()) {
            debug!("Same failure as last reported, not notifying again");
            return;
        }

        self.notifier.notify(&message).await;
        state.last_error = Some(message);
    }
}
