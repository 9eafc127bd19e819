use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default time a notification stays on screen.
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Delay between the fade-out starting and the node being removed.
pub const FADE_OUT_MS: u64 = 500;

/// Classification of a notification. Controls the visual style only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl Severity {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient message shown in the notification area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub visible_duration_ms: u64,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity, visible_duration_ms: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            visible_duration_ms,
        }
    }

    /// Class list for the rendered node, e.g. `notification notification-error`.
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("notification notification-{}", self.severity)
    }
}
