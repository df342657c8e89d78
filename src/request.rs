//! HTTP transport trait and request parameter types

use crate::error::Result;
use crate::response::Response;

use std::future::Future;

pub mod call;
pub mod common;
pub mod params;
pub mod plan;

pub use plan::RequestDescriptor;

/// Trait for HTTP clients that can execute requests against the Meteocat services.
///
/// Implement this trait to use a custom HTTP client, or an in-memory stand-in
/// for tests. Timeouts and cancellation are the transport's business and must
/// surface as [`crate::error::TransportError`].
pub trait Request: Send + Sync {
    /// Associated response type
    type Response: Response;

    /// Create a new instance of the HTTP client
    fn new() -> Self
    where
        Self: Sized;

    /// Send `request` and return the raw response, whatever its status
    fn execute(&self, request: &RequestDescriptor) -> impl Future<Output = Result<Self::Response>> + Send;
}

/// HTTP response implementation
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: u16,
    body: String,
    request_id: Option<String>,
}

impl HttpResponse {
    /// Build a response from its parts
    pub fn new(status: u16, body: impl Into<String>, request_id: Option<String>) -> Self {
        Self {
            status,
            body: body.into(),
            request_id,
        }
    }
}

impl Response for HttpResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn body(&self) -> &str {
        &self.body
    }

    fn request_id(&self) -> &Option<String> {
        &self.request_id
    }
}

#[cfg(feature = "reqwest")]
impl Request for reqwest::Client {
    type Response = HttpResponse;

    fn new() -> Self {
        reqwest::Client::new()
    }

    async fn execute(&self, request: &RequestDescriptor) -> Result<Self::Response> {
        use crate::error::TransportError;

        let transport_error = |e: reqwest::Error| {
            if e.is_timeout() {
                TransportError::Timeout(e.to_string())
            } else if e.is_builder() {
                TransportError::InvalidRequest(e.to_string())
            } else {
                TransportError::Network(e.to_string())
            }
        };

        let mut builder = self.get(request.url());
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let request_id = response
            .headers()
            .get("X-Request-Id")
            .and_then(|h| h.to_str().ok().map(|s| s.to_string()));
        let body = response.text().await.map_err(transport_error)?;
        Ok(HttpResponse {
            status,
            body,
            request_id,
        })
    }
}

#[cfg(feature = "hyper")]
/// Hyper client wrapper
#[derive(Clone)]
pub struct HyperClient {
    client: std::sync::Arc<
        hyper_util::client::legacy::Client<
            hyper_tls::HttpsConnector<hyper_util::client::legacy::connect::HttpConnector>,
            http_body_util::Full<hyper::body::Bytes>,
        >,
    >,
}

#[cfg(feature = "hyper")]
impl std::fmt::Debug for HyperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClient").finish_non_exhaustive()
    }
}

#[cfg(feature = "hyper")]
impl Request for HyperClient {
    type Response = HttpResponse;

    fn new() -> Self {
        let https = hyper_tls::HttpsConnector::new();
        let client = hyper_util::client::legacy::Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);
        Self {
            client: std::sync::Arc::new(client),
        }
    }

    async fn execute(&self, request: &RequestDescriptor) -> Result<Self::Response> {
        use crate::error::TransportError;
        use http_body_util::BodyExt;

        let uri: hyper::Uri = request
            .url()
            .parse()
            .map_err(|e| TransportError::InvalidRequest(format!("Invalid URL: {e}")))?;

        let mut builder = hyper::Request::builder()
            .method(hyper::Method::GET)
            .uri(uri);
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let req = builder
            .body(http_body_util::Full::new(hyper::body::Bytes::new()))
            .map_err(|e| TransportError::InvalidRequest(format!("Failed to build request: {e}")))?;

        let response = self
            .client
            .request(req)
            .await
            .map_err(|e| TransportError::Network(format!("HTTP request failed: {e}")))?;

        let status = response.status().as_u16();
        let request_id = response
            .headers()
            .get("X-Request-Id")
            .and_then(|h| h.to_str().ok().map(|s| s.to_string()));

        let body_bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| TransportError::Network(format!("Failed to read response body: {e}")))?
            .to_bytes();

        let body = String::from_utf8(body_bytes.to_vec())
            .map_err(|e| TransportError::Network(format!("Invalid UTF-8 in response: {e}")))?;

        Ok(HttpResponse {
            status,
            body,
            request_id,
        })
    }
}
