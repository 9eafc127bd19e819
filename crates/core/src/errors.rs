use thiserror::Error;

/// Unified error type for the budget client core library.
/// Every fallible public function returns `Result<T, ClientError>`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    // ── API / Network ───────────────────────────────────────────────
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    // ── Payloads ────────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Client-side rules ───────────────────────────────────────────
    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status carried by the error, if it came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for failures detected before anything was sent.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors embed the full URL; drop the query string so
        // nothing passed as a parameter ends up in a notification.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        ClientError::Network(sanitized)
    }
}
