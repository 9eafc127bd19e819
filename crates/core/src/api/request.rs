use serde_json::Value;

/// HTTP verbs the client issues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// GET and HEAD never carry a body.
    #[must_use]
    pub fn allows_body(&self) -> bool {
        !matches!(self, Method::Get | Method::Head)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body handed to [`ApiClient::request`](super::ApiClient::request).
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Structured value, serialized to JSON before sending.
    Json(Value),
    /// Sent verbatim.
    Text(String),
}

/// Per-call options. Everything is optional; the default is a plain GET.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    /// Merged over the default JSON headers; these win on conflict.
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn delete() -> Self {
        Self {
            method: Method::Delete,
            ..Self::default()
        }
    }

    pub fn post(body: Value) -> Self {
        Self::with_json(Method::Post, body)
    }

    pub fn put(body: Value) -> Self {
        Self::with_json(Method::Put, body)
    }

    pub fn with_json(method: Method, body: Value) -> Self {
        Self {
            method,
            headers: Vec::new(),
            body: Some(RequestBody::Json(body)),
        }
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A fully prepared request, ready for a [`Transport`](super::Transport).
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// What came back over the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
    }

    /// Convenience constructor for a JSON response.
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
        }
    }

    /// Convenience constructor for a plain-text response.
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("text/plain; charset=utf-8".to_string()),
            body: body.into(),
        }
    }

    /// A 204 with no body.
    pub fn no_content() -> Self {
        Self {
            status: 204,
            content_type: None,
            body: String::new(),
        }
    }
}

/// Decoded body of a successful response. Its shape depends on the endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
    /// 204 or an empty body.
    Empty,
    Json(Value),
    Text(String),
}

impl ApiResult {
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResult::Json(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, ApiResult::Empty)
    }

    /// Collapse into a JSON value: `Empty` → `null`, text → string.
    #[must_use]
    pub fn into_json(self) -> Value {
        match self {
            ApiResult::Empty => Value::Null,
            ApiResult::Json(value) => value,
            ApiResult::Text(text) => Value::String(text),
        }
    }

    /// String field of a JSON object body, if present.
    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.as_json()?.as_object()?.get(key)?.as_str()
    }

    /// Error envelope carried by a 2xx body (`{"error": "..."}`).
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.str_field("error").filter(|msg| !msg.is_empty())
    }

    /// Numeric `id` of a created/updated record. Numeric strings count too.
    #[must_use]
    pub fn record_id(&self) -> Option<i64> {
        match self.as_json()?.as_object()?.get("id")? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
