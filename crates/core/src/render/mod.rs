//! Rendering targets the page controllers draw into.
//!
//! Nothing here knows about a real document; a front end (terminal, web
//! view, test) reads the handles and draws them however it likes.

pub mod chart_slot;
pub mod container;
pub mod dialog;
pub mod spinner;

use std::sync::{Mutex, MutexGuard};

/// Lock a mutex, recovering the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
