use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ClientError;
use crate::models::notification::DEFAULT_DURATION_MS;

/// Environment variable names read by [`ClientSettings::from_env`].
pub const ENV_API_URL: &str = "BUDGET_API_URL";
pub const ENV_CURRENCY: &str = "BUDGET_CURRENCY";
pub const ENV_NOTIFICATION_MS: &str = "BUDGET_NOTIFICATION_MS";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "BUDGET_HTTP_TIMEOUT_SECS";

/// Runtime configuration for the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Backend origin; request paths (`/api/...`) are appended to it.
    pub base_url: String,

    /// Currency code used when rendering amounts (e.g., "USD", "EUR").
    pub currency: String,

    /// How long notifications stay visible, in milliseconds.
    pub notification_duration_ms: u64,

    /// Optional request timeout. `None` leaves the transport default in place.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9000".to_string(),
            currency: "USD".to_string(),
            notification_duration_ms: DEFAULT_DURATION_MS,
            timeout_secs: None,
        }
    }
}

impl ClientSettings {
    /// Build settings from the process environment, after loading a `.env`
    /// file if one exists. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ClientError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            settings.base_url = url.trim().to_string();
        }
        if let Some(currency) = lookup(ENV_CURRENCY).filter(|v| !v.trim().is_empty()) {
            settings.currency = currency.trim().to_uppercase();
        }
        if let Some(raw) = lookup(ENV_NOTIFICATION_MS) {
            settings.notification_duration_ms = parse_number(ENV_NOTIFICATION_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_HTTP_TIMEOUT_SECS) {
            settings.timeout_secs = Some(parse_number(ENV_HTTP_TIMEOUT_SECS, &raw)?);
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that cannot produce a working client.
    pub fn validate(&self) -> Result<(), ClientError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "{ENV_API_URL} must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ClientError::Config(format!(
                "{ENV_CURRENCY} must be a three-letter currency code, got '{}'",
                self.currency
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(ClientError::Config(format!(
                "{ENV_HTTP_TIMEOUT_SECS} must be greater than zero"
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn parse_number(key: &str, raw: &str) -> Result<u64, ClientError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ClientError::Config(format!("{key} must be a whole number, got '{raw}'")))
}
