use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::document::Document;
use crate::models::notification::{Notification, Severity, DEFAULT_DURATION_MS, FADE_OUT_MS};
use crate::render::lock;

/// Shows transient messages in the document's notification area.
///
/// Each notification gets an auto-dismiss task on the current tokio runtime.
/// Manual and automatic dismissal may race: both go through the same
/// presence check, so whichever comes second is a no-op.
#[derive(Debug, Clone)]
pub struct NotificationService {
    document: Document,
    default_duration_ms: u64,
    fade_out: Duration,
    timers: Arc<Mutex<HashMap<Uuid, JoinHandle<()>>>>,
}

impl NotificationService {
    pub fn new(document: Document) -> Self {
        Self::with_default_duration(document, DEFAULT_DURATION_MS)
    }

    /// Use a different default visibility than 3 seconds.
    pub fn with_default_duration(document: Document, default_duration_ms: u64) -> Self {
        Self {
            document,
            default_duration_ms,
            fade_out: Duration::from_millis(FADE_OUT_MS),
            timers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn default_duration_ms(&self) -> u64 {
        self.default_duration_ms
    }

    /// Info notification with the default duration.
    pub fn notify(&self, message: impl Into<String>) -> Uuid {
        self.notify_with(message, Severity::Info, self.default_duration_ms)
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.notify_with(message, Severity::Info, self.default_duration_ms)
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.notify_with(message, Severity::Success, self.default_duration_ms)
    }

    pub fn warning(&self, message: impl Into<String>) -> Uuid {
        self.notify_with(message, Severity::Warning, self.default_duration_ms)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.notify_with(message, Severity::Error, self.default_duration_ms)
    }

    /// Show a notification and schedule its automatic dismissal.
    ///
    /// Returns the id so the notification can be dismissed by hand.
    pub fn notify_with(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: u64,
    ) -> Uuid {
        let notification = Notification::new(message, severity, duration_ms);
        let id = notification.id;
        tracing::debug!(
            "Notification [{}] {}: {}",
            notification.severity,
            id,
            notification.message
        );
        self.document.prepend(notification);
        self.schedule_auto_dismiss(id, Duration::from_millis(duration_ms));
        id
    }

    /// Manual close: start the fade now, remove the node after the fade delay.
    /// Safe to call any number of times, also after the node is gone.
    pub fn dismiss(&self, id: Uuid) {
        if !self.document.mark_fading(id) {
            tracing::trace!("Notification {id} already dismissed");
            return;
        }
        match Handle::try_current() {
            Ok(handle) => {
                let service = self.clone();
                handle.spawn(async move {
                    tokio::time::sleep(service.fade_out).await;
                    service.remove(id);
                });
            }
            Err(_) => {
                self.remove(id);
            }
        }
    }

    /// Drop every notification and cancel all pending auto-dismiss tasks.
    pub fn clear(&self) {
        for (_, timer) in lock(&self.timers).drain() {
            timer.abort();
        }
        self.document.clear_notifications();
    }

    /// Number of auto-dismiss tasks that have not finished yet.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        lock(&self.timers).len()
    }

    fn schedule_auto_dismiss(&self, id: Uuid, duration: Duration) {
        let Ok(handle) = Handle::try_current() else {
            tracing::warn!("No async runtime; notification {id} will stay until dismissed");
            return;
        };

        let service = self.clone();
        // Registered under the lock so the task cannot deregister first.
        let mut timers = lock(&self.timers);
        let task = handle.spawn(async move {
            tokio::time::sleep(duration).await;
            service.document.mark_fading(id);
            tokio::time::sleep(service.fade_out).await;
            service.remove(id);
            lock(&service.timers).remove(&id);
        });
        timers.insert(id, task);
    }

    fn remove(&self, id: Uuid) {
        if self.document.remove(id) {
            tracing::trace!("Notification {id} removed");
        }
    }
}
