// Shared test helpers: a scripted transport and client builders.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use budget_client_core::api::{ApiClient, HttpRequest, HttpResponse, Method, Transport};
use budget_client_core::errors::ClientError;
use budget_client_core::models::notification::Severity;
use budget_client_core::models::settings::ClientSettings;
use budget_client_core::notifications::{Document, NotificationService};
use budget_client_core::BudgetClient;

pub const BASE_URL: &str = "http://backend.test";

/// Transport that answers from a script and records what it was sent.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, ClientError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push(HttpResponse::json(status, &body));
    }

    pub fn push_error(&self, error: ClientError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// `(method, path)` of every request, base URL stripped.
    pub fn calls(&self) -> Vec<(Method, String)> {
        self.requests()
            .into_iter()
            .map(|r| (r.method, r.url.trim_start_matches(BASE_URL).to_string()))
            .collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn name(&self) -> &str {
        "mock"
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Network("no scripted response".into())))
    }
}

pub fn settings() -> ClientSettings {
    ClientSettings {
        base_url: BASE_URL.to_string(),
        ..ClientSettings::default()
    }
}

pub fn client(transport: &Arc<MockTransport>) -> BudgetClient {
    BudgetClient::with_transport(settings(), transport.clone())
}

pub fn api(transport: &Arc<MockTransport>) -> (ApiClient, NotificationService) {
    let notifier = NotificationService::new(Document::new());
    let api = ApiClient::new(BASE_URL, transport.clone(), notifier.clone());
    (api, notifier)
}

/// `(severity, message)` of every visible notification, newest first.
pub fn notices(document: &Document) -> Vec<(Severity, String)> {
    document
        .notifications()
        .into_iter()
        .map(|n| (n.notification.severity, n.notification.message))
        .collect()
}

pub fn errors(document: &Document) -> Vec<String> {
    notices(document)
        .into_iter()
        .filter(|(s, _)| *s == Severity::Error)
        .map(|(_, m)| m)
        .collect()
}

pub fn goal_json(id: i64, name: &str, target: f64, current: f64) -> Value {
    json!({
        "id": id,
        "name": name,
        "target_amount": target,
        "current_amount": current,
        "deadline": null
    })
}

pub fn transaction_json(id: i64, kind: &str, category: &str, amount: f64, date: &str) -> Value {
    json!({
        "id": id,
        "type": kind,
        "category": category,
        "amount": amount,
        "date": date,
        "description": ""
    })
}
