//! Per-screen controllers: load a snapshot, render it, wire mutations.
//!
//! Every mutation ends in a full reload of the collection; nothing is
//! patched locally and nothing is cached between reloads.

pub mod crud;
pub mod dashboard;
pub mod forms;
pub mod goals;
pub mod transactions;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{ApiClient, ApiResult};
use crate::errors::ClientError;
use crate::notifications::NotificationService;
use crate::render::spinner::LoadingIndicator;

/// Everything a page controller needs from the shared stack.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub api: ApiClient,
    pub notifier: NotificationService,
    pub spinner: LoadingIndicator,
    /// Currency code used for every rendered amount.
    pub currency: String,
}

impl PageContext {
    pub fn new(api: ApiClient, spinner: LoadingIndicator, currency: impl Into<String>) -> Self {
        Self {
            notifier: api.notifier().clone(),
            api,
            spinner,
            currency: currency.into(),
        }
    }
}

/// Result of a user-triggered mutation that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Created or updated; carries the record id from the response.
    Saved { id: i64 },
    /// Deleted; carries the server's confirmation message.
    Deleted { message: String },
    /// The user declined the confirmation prompt.
    Cancelled,
    /// Nothing to submit (edit dialog without a selected record).
    NothingToDo,
}

/// How a collection response should be rendered.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Collection<T> {
    /// Records that decoded, plus the decode errors of those that did not.
    Items {
        records: Vec<T>,
        malformed: Vec<ClientError>,
    },
    Empty,
    Failed(String),
}

/// Sort a collection response into items, an empty state, or an error payload.
///
/// Records are decoded one by one so a single bad row does not hide the
/// rest. Only when no record decodes at all is the first error returned.
/// Anything that is neither a non-empty array nor an error envelope renders
/// as empty, matching what a blank list looks like to the user.
pub(crate) fn classify_collection<T: DeserializeOwned>(
    result: ApiResult,
) -> Result<Collection<T>, ClientError> {
    if let Some(message) = result.error_message() {
        return Ok(Collection::Failed(message.to_string()));
    }
    let items = match result.into_json() {
        Value::Array(items) if !items.is_empty() => items,
        _ => return Ok(Collection::Empty),
    };

    let mut records = Vec::with_capacity(items.len());
    let mut malformed = Vec::new();
    for item in items {
        match serde_json::from_value(item) {
            Ok(record) => records.push(record),
            Err(e) => malformed.push(ClientError::from(e)),
        }
    }
    if records.is_empty() {
        if let Some(first) = malformed.into_iter().next() {
            return Err(first);
        }
        return Ok(Collection::Empty);
    }
    Ok(Collection::Items { records, malformed })
}

/// Message to show when a 2xx mutation response is not the expected shape.
pub(crate) fn rejection_message(result: &ApiResult, fallback: &str) -> String {
    result
        .error_message()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}
