//! Injected HTTP capability for the verification flow.
//!
//! Verification needs exactly one thing from HTTP: send a JSON POST, get
//! back the status code and the raw body. [`Transport`] models that seam
//! so the flow can be exercised against a stub without network access;
//! [`HttpTransport`] is the reqwest-backed implementation used in
//! production.

use std::time::Duration;

use http::StatusCode;
use serde_json::Value;
use url::Url;

/// The slice of an HTTP response the verification flow classifies.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code of the response.
    pub status: StatusCode,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// Capability to send one JSON POST and observe status and body.
pub trait Transport: Send + Sync {
    /// Transport-level failure: the request never produced an HTTP
    /// response.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Sends `body` as JSON to `url` and returns the raw response.
    ///
    /// Implementations must return `Ok` for *any* HTTP response, including
    /// 4xx and 5xx; `Err` is reserved for connection-level failures.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] when no HTTP response was received.
    fn post_json(
        &self,
        url: Url,
        body: &Value,
    ) -> impl Future<Output = Result<TransportResponse, Self::Error>> + Send;
}

/// Reqwest-backed [`Transport`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HttpTransport {
    /// Creates a transport with a fresh reqwest client and no timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a pre-configured reqwest client.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Applies a per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Transport for HttpTransport {
    type Error = reqwest::Error;

    async fn post_json(&self, url: Url, body: &Value) -> Result<TransportResponse, Self::Error> {
        let mut request = self.client.post(url).json(body);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}
