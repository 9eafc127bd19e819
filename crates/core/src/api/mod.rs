pub mod client;
pub mod http;
pub mod request;
pub mod traits;

pub use client::ApiClient;
pub use http::ReqwestTransport;
pub use request::{ApiResult, HttpRequest, HttpResponse, Method, RequestBody, RequestOptions};
pub use traits::Transport;
