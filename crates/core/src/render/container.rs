use std::sync::{Arc, Mutex};

use super::lock;

/// What a list-like container shows after a render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry<T> {
    /// A rendered item.
    Item(T),
    /// Explicit empty-state message.
    Empty(String),
    /// Inline error message.
    Error(String),
}

impl<T> ListEntry<T> {
    #[must_use]
    pub fn item(&self) -> Option<&T> {
        match self {
            ListEntry::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Text of an empty-state or error entry.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            ListEntry::Empty(msg) | ListEntry::Error(msg) => Some(msg),
            ListEntry::Item(_) => None,
        }
    }
}

/// Shared handle to a rendering target.
///
/// Cloning the handle does not copy the contents: every clone sees the same
/// children, the way two references to one DOM node would.
#[derive(Debug)]
pub struct Container<T> {
    children: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for Container<T> {
    fn clone(&self) -> Self {
        Self {
            children: Arc::clone(&self.children),
        }
    }
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self {
            children: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone> Container<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&self) {
        lock(&self.children).clear();
    }

    pub fn push(&self, child: T) {
        lock(&self.children).push(child);
    }

    /// Clear, then append every child in order.
    pub fn replace_all(&self, children: impl IntoIterator<Item = T>) {
        let mut guard = lock(&self.children);
        guard.clear();
        guard.extend(children);
    }

    /// Copy of the current children, in render order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        lock(&self.children).clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.children).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.children).is_empty()
    }
}
