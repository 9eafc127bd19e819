use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Global loading indicator toggled around network calls.
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    visible: Arc<AtomicBool>,
    shown_count: Arc<AtomicUsize>,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self) {
        self.visible.store(true, Ordering::SeqCst);
        self.shown_count.fetch_add(1, Ordering::SeqCst);
    }

    pub fn hide(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// How many times the indicator has been shown since creation.
    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.shown_count.load(Ordering::SeqCst)
    }

    /// Show the indicator until the returned guard is dropped.
    #[must_use = "the indicator is hidden as soon as the guard is dropped"]
    pub fn guard(&self) -> SpinnerGuard {
        self.show();
        SpinnerGuard {
            indicator: self.clone(),
        }
    }
}

/// Hides the loading indicator on drop, including on early `?` returns.
#[derive(Debug)]
pub struct SpinnerGuard {
    indicator: LoadingIndicator,
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}
