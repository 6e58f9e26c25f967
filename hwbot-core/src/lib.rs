//! Hwbot Core
//!
//! Core types and pure logic for the homework status bot.
//!
//! This crate contains:
//! - Credentials: startup check of the required secrets
//! - Domain types: Homework review statuses and their verdicts
//! - Response handling: Validation of review API payloads and status parsing
//!
//! Nothing in here performs I/O; the client and runner crates own the network.

pub mod credentials;
pub mod domain;
pub mod error;
pub mod response;

pub use credentials::{Credentials, VerifiedCredentials};
pub use error::{CredentialError, ResponseError};
