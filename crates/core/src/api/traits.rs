use async_trait::async_trait;

use super::request::{HttpRequest, HttpResponse};
use crate::errors::ClientError;

/// The network layer underneath [`ApiClient`](super::ApiClient).
///
/// Production code uses [`ReqwestTransport`](super::ReqwestTransport); tests
/// plug in scripted transports. A transport only moves bytes: status
/// handling, error envelopes and notifications belong to the client.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Transport: Send + Sync {
    /// Human-readable name of this transport (for logs).
    fn name(&self) -> &str;

    /// Send one request and return whatever the server answered,
    /// including non-2xx responses. Errors are transport failures only.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}
