//! reqwest-backed image transport.

use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;

use crate::domain::errors::FetchError;
use crate::domain::ports::{ImageTransportPort, TransportResponse};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!("staff-directory/", env!("CARGO_PKG_VERSION"));

/// Configuration for the image transport.
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Downloads images over HTTP(S) with a fixed timeout.
#[derive(Debug, Clone)]
pub struct HttpImageTransport {
    http_client: reqwest::Client,
}

impl HttpImageTransport {
    /// Creates a transport with the given configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: &HttpTransportConfig) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::request(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http_client })
    }
}

fn map_request_error(e: &reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_connect() {
        FetchError::connection(e.to_string())
    } else {
        FetchError::request(e.to_string())
    }
}

#[async_trait]
impl ImageTransportPort for HttpImageTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, FetchError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| map_request_error(&e))?;

        let status = response.status();

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::body(e.to_string())
            }
        })?;

        trace!(url = %url, status = status.as_u16(), size = body.len(), "Image response received");

        Ok(TransportResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().map(String::from),
            content_type,
            body,
        })
    }
}
