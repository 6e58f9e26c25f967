//! Startup credentials
//!
//! The bot needs three secrets before it can do anything useful. They are
//! collected as optional values (usually from the environment) and checked
//! once at startup.

use crate::error::CredentialError;
use tracing::error;

/// Name of the review API token variable
pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
/// Name of the Telegram bot token variable
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
/// Name of the destination chat id variable
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Raw, possibly incomplete credentials
#[derive(Clone, Default)]
pub struct Credentials {
    pub practicum_token: Option<String>,
    pub telegram_token: Option<String>,
    pub telegram_chat_id: Option<String>,
}

/// Credentials where every secret is known to be non-empty
#[derive(Clone)]
pub struct VerifiedCredentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl Credentials {
    pub fn new(
        practicum_token: Option<String>,
        telegram_token: Option<String>,
        telegram_chat_id: Option<String>,
    ) -> Self {
        Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
        }
    }

    /// Reads the three secrets from the process environment
    ///
    /// Unset or non-UTF-8 variables are treated as missing.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(PRACTICUM_TOKEN).ok(),
            std::env::var(TELEGRAM_TOKEN).ok(),
            std::env::var(TELEGRAM_CHAT_ID).ok(),
        )
    }

    /// Returns the names of all missing credentials, in declaration order
    ///
    /// A value that is present but empty counts as missing. When anything is
    /// missing the names are logged at error level.
    pub fn missing(&self) -> Vec<&'static str> {
        let missing: Vec<&'static str> = [
            (PRACTICUM_TOKEN, &self.practicum_token),
            (TELEGRAM_TOKEN, &self.telegram_token),
            (TELEGRAM_CHAT_ID, &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| !is_present(value))
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            error!("Provide the required credentials: {:?}", missing);
        }

        missing
    }

    /// Converts into verified credentials, failing if anything is missing
    pub fn verify(self) -> Result<VerifiedCredentials, CredentialError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(CredentialError::Missing(missing));
        }

        Ok(VerifiedCredentials {
            practicum_token: self.practicum_token.unwrap_or_default(),
            telegram_token: self.telegram_token.unwrap_or_default(),
            telegram_chat_id: self.telegram_chat_id.unwrap_or_default(),
        })
    }
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

// Secrets must never end up in logs through a stray `{:?}`.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &self.practicum_token.as_ref().map(|_| "***"))
            .field("telegram_token", &self.telegram_token.as_ref().map(|_| "***"))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

impl std::fmt::Debug for VerifiedCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifiedCredentials")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_all_present() {
        let creds = Credentials::new(some("a"), some("b"), some("c"));
        assert!(creds.missing().is_empty());
    }

    #[test]
    fn test_every_combination_reports_exact_missing_set() {
        for mask in 0u8..8 {
            let pick = |bit: u8| if mask & bit != 0 { some("secret") } else { None };
            let creds = Credentials::new(pick(1), pick(2), pick(4));

            let mut expected = Vec::new();
            if mask & 1 == 0 {
                expected.push(PRACTICUM_TOKEN);
            }
            if mask & 2 == 0 {
                expected.push(TELEGRAM_TOKEN);
            }
            if mask & 4 == 0 {
                expected.push(TELEGRAM_CHAT_ID);
            }

            assert_eq!(creds.missing(), expected, "mask {mask:03b}");
        }
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let creds = Credentials::new(some(""), some("b"), some(""));
        assert_eq!(creds.missing(), vec![PRACTICUM_TOKEN, TELEGRAM_CHAT_ID]);
    }

    #[test]
    fn test_verify() {
        let verified = Credentials::new(some("a"), some("b"), some("42"))
            .verify()
            .unwrap();
        assert_eq!(verified.practicum_token, "a");
        assert_eq!(verified.telegram_token, "b");
        assert_eq!(verified.telegram_chat_id, "42");

        let err = Credentials::new(None, some("b"), None).verify().unwrap_err();
        assert_eq!(
            err,
            CredentialError::Missing(vec![PRACTICUM_TOKEN, TELEGRAM_CHAT_ID])
        );
        assert!(err.to_string().contains("PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"));
    }

    #[test]
    fn test_debug_hides_tokens() {
        let creds = Credentials::new(some("top-secret"), some("also-secret"), some("1"));
        let rendered = format!("{:?}", creds);
        assert!(!rendered.contains("top-secret"));
        assert!(!rendered.contains("also-secret"));
    }
}
