//! Port definition for the HTTP transport used to download images.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::errors::FetchError;

/// Raw response of an image request. The status is not interpreted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Reason phrase, if known.
    pub reason: Option<String>,
    /// `Content-Type` header value.
    pub content_type: Option<String>,
    /// Response body.
    pub body: Bytes,
}

impl TransportResponse {
    /// Creates a response without a reason phrase.
    #[must_use]
    pub fn new(status: u16, content_type: Option<String>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            reason: None,
            content_type,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Port performing a bounded-timeout GET.
#[async_trait]
pub trait ImageTransportPort: Send + Sync {
    /// Issues a GET request.
    ///
    /// # Errors
    /// Returns error on timeout, connection or body read failure. Non-2xx
    /// statuses are returned as responses.
    async fn get(&self, url: &str) -> Result<TransportResponse, FetchError>;
}
