use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

/// Default timeout for one delivery attempt. APNs holds HTTP/2 connections
/// open, so an unbounded request could hang a caller indefinitely.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// One fully assembled APNs request, ready for the wire.
#[derive(Debug, Clone)]
pub struct ApnsRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Raw result of one completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
    /// Value of the `apns-id` response header, when Apple returned one.
    pub apns_id: Option<String>,
}

/// Transport-level failures: the request never produced an HTTP response.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to build HTTP client: {0}")]
    Init(String),
}

/// HTTP execution seam for the APNs client.
///
/// The production implementation is [`HttpTransport`]; tests substitute
/// their own to exercise delivery handling without network access.
#[async_trait]
pub trait ApnsTransport: Send + Sync {
    async fn execute(&self, request: ApnsRequest) -> Result<RawResponse, TransportError>;
}

/// reqwest-backed transport. Connections are pooled and reused across
/// sends, HTTP/2 is negotiated through ALPN, and certificate verification
/// stays at the library default (on).
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Init(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ApnsTransport for HttpTransport {
    async fn execute(&self, request: ApnsRequest) -> Result<RawResponse, TransportError> {
        let ApnsRequest { url, headers, body } = request;

        let mut builder = self.client.post(url).body(body);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(classify)?;

        let status = response.status().as_u16();
        let apns_id = response
            .headers()
            .get("apns-id")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let body = response.text().await.map_err(classify)?;

        debug!("APNs responded with status {}", status);

        Ok(RawResponse {
            status,
            body,
            apns_id,
        })
    }
}

fn classify(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(e.to_string())
    } else if e.is_connect() {
        TransportError::Connect(e.to_string())
    } else {
        TransportError::Request(e.to_string())
    }
}
