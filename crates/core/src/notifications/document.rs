use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::models::notification::Notification;
use crate::render::lock;

/// A notification as it currently sits in the notification area.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationNode {
    pub notification: Notification,
    /// Set once dismissal started; the node is removed after the fade delay.
    pub fading: bool,
}

#[derive(Debug, Default)]
struct DocumentState {
    ready: bool,
    /// `None` until the first notification asks for the area.
    area: Option<Vec<NotificationNode>>,
    area_attached: bool,
}

/// Handle to the document root the notification area hangs off.
///
/// Stands in for the page's DOM so the notification service can be driven
/// (and inspected) without a browser.
#[derive(Debug, Clone, Default)]
pub struct Document {
    state: Arc<Mutex<DocumentState>>,
}

impl Document {
    /// A document that is already loaded.
    pub fn new() -> Self {
        let doc = Self::default();
        lock(&doc.state).ready = true;
        doc
    }

    /// A document still loading; attachments wait for [`Document::mark_ready`].
    pub fn loading() -> Self {
        Self::default()
    }

    /// Signal that the document finished loading. Attaches a notification
    /// area that was created while the document was still loading.
    pub fn mark_ready(&self) {
        let mut state = lock(&self.state);
        state.ready = true;
        if state.area.is_some() && !state.area_attached {
            tracing::debug!("Attaching deferred notification area");
            state.area_attached = true;
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        lock(&self.state).ready
    }

    #[must_use]
    pub fn has_notification_area(&self) -> bool {
        lock(&self.state).area.is_some()
    }

    #[must_use]
    pub fn notification_area_attached(&self) -> bool {
        lock(&self.state).area_attached
    }

    /// Nodes currently in the area, newest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<NotificationNode> {
        lock(&self.state).area.clone().unwrap_or_default()
    }

    /// Insert ahead of everything already shown, creating the area lazily.
    pub(crate) fn prepend(&self, notification: Notification) {
        let mut state = lock(&self.state);
        if state.area.is_none() {
            state.area = Some(Vec::new());
            state.area_attached = state.ready;
            if !state.ready {
                tracing::debug!("Document not ready; deferring notification area attachment");
            }
        }
        if let Some(area) = state.area.as_mut() {
            area.insert(
                0,
                NotificationNode {
                    notification,
                    fading: false,
                },
            );
        }
    }

    /// Start the fade-out. Returns false if the node is already gone.
    pub(crate) fn mark_fading(&self, id: Uuid) -> bool {
        let mut state = lock(&self.state);
        match state
            .area
            .as_mut()
            .and_then(|area| area.iter_mut().find(|n| n.notification.id == id))
        {
            Some(node) => {
                node.fading = true;
                true
            }
            None => false,
        }
    }

    /// Remove the node if it is still present.
    pub(crate) fn remove(&self, id: Uuid) -> bool {
        let mut state = lock(&self.state);
        let Some(area) = state.area.as_mut() else {
            return false;
        };
        match area.iter().position(|n| n.notification.id == id) {
            Some(idx) => {
                area.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear_notifications(&self) {
        if let Some(area) = lock(&self.state).area.as_mut() {
            area.clear();
        }
    }
}
