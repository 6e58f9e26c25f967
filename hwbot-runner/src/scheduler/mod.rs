//! Scheduler layer for the bot
//!
//! This layer drives the fixed-interval polling of the review API and
//! decides what gets reported to the operator.

pub mod poller;

pub use poller::{PollState, StatusPoller};
