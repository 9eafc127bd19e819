use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use super::request::{ApiResult, HttpRequest, HttpResponse, RequestBody, RequestOptions};
use super::traits::Transport;
use crate::errors::ClientError;
use crate::notifications::NotificationService;

/// Headers every request starts from; callers may override either.
const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("Content-Type", "application/json"),
    ("Accept", "application/json"),
];

/// Thin wrapper around the backend REST API.
///
/// Every call is exactly one network request: no retries, no caching, no
/// deduplication. Any failure is reported once through the
/// [`NotificationService`] and then handed back to the caller.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    notifier: NotificationService,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("transport", &self.transport.name())
            .finish()
    }
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        notifier: NotificationService,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            notifier,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn notifier(&self) -> &NotificationService {
        &self.notifier
    }

    /// Issue one request against `path` (e.g. `/api/goals`).
    ///
    /// - non-2xx → `ClientError::Http` with the server's `message`/`error`,
    ///   the raw body, or `HTTP error! Status: <code>`, in that order
    /// - 204 → [`ApiResult::Empty`]
    /// - JSON content type → [`ApiResult::Json`], anything else → [`ApiResult::Text`]
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiResult, ClientError> {
        let method = options.method;
        let result = self.execute(path, options).await;
        if let Err(e) = &result {
            tracing::warn!("API Fetch Error: {method} {path}: {e}");
            self.notifier.error(format!("API Error: {e}"));
        }
        result
    }

    /// GET `path` and decode the JSON body into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let result = self.request(path, RequestOptions::get()).await?;
        self.decode(path, result)
    }

    /// Send `body` with `options.method` and decode the JSON answer into `T`.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let result = self.request(path, options).await?;
        self.decode(path, result)
    }

    fn decode<T: DeserializeOwned>(&self, path: &str, result: ApiResult) -> Result<T, ClientError> {
        serde_json::from_value(result.into_json()).map_err(|e| {
            let err = ClientError::Deserialization(format!("{path}: {e}"));
            tracing::warn!("{err}");
            self.notifier.error(format!("API Error: {err}"));
            err
        })
    }

    async fn execute(&self, path: &str, options: RequestOptions) -> Result<ApiResult, ClientError> {
        let request = self.build_request(path, options)?;
        tracing::debug!("{} {} via {}", request.method, request.url, self.transport.name());

        let response = self.transport.send(request).await?;
        tracing::debug!("{path} answered {}", response.status);

        if !response.is_success() {
            return Err(ClientError::Http {
                status: response.status,
                message: error_message(&response),
            });
        }

        if response.status == 204 || response.body.is_empty() {
            return Ok(ApiResult::Empty);
        }
        if response.is_json() {
            let value: Value = serde_json::from_str(&response.body)?;
            return Ok(ApiResult::Json(value));
        }
        Ok(ApiResult::Text(response.body))
    }

    fn build_request(&self, path: &str, options: RequestOptions) -> Result<HttpRequest, ClientError> {
        let mut headers: Vec<(String, String)> = DEFAULT_HEADERS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (name, value) in options.headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
            headers.push((name, value));
        }

        let body = match options.body {
            Some(_) if !options.method.allows_body() => None,
            Some(RequestBody::Json(value)) => Some(
                serde_json::to_string(&value)
                    .map_err(|e| ClientError::Serialization(e.to_string()))?,
            ),
            Some(RequestBody::Text(text)) => Some(text),
            None => None,
        };

        Ok(HttpRequest {
            method: options.method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body,
        })
    }
}

/// Pick the most useful message out of a failed response.
fn error_message(response: &HttpResponse) -> String {
    let fallback = format!("HTTP error! Status: {}", response.status);

    if let Ok(envelope) = serde_json::from_str::<Value>(&response.body) {
        return ["message", "error"]
            .iter()
            .find_map(|key| {
                envelope
                    .get(key)
                    .and_then(Value::as_str)
                    .filter(|msg| !msg.is_empty())
            })
            .map(str::to_string)
            .unwrap_or(fallback);
    }

    let text = response.body.trim();
    if text.is_empty() {
        fallback
    } else {
        text.to_string()
    }
}
