//! Image retrieval error types.

use thiserror::Error;

/// Reasons an image could not be retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum FetchError {
    #[error("no image reference")]
    EmptyReference,

    #[error("request timed out")]
    Timeout,

    #[error("failed to connect: {message}")]
    Connection { message: String },

    #[error("request failed: {message}")]
    Request { message: String },

    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("failed to read body: {message}")]
    Body { message: String },
}

impl FetchError {
    /// Creates connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates request error.
    #[must_use]
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    /// Creates status error.
    #[must_use]
    pub fn status(status: u16, reason: impl Into<String>) -> Self {
        Self::Status {
            status,
            reason: reason.into(),
        }
    }

    /// Creates body read error.
    #[must_use]
    pub fn body(message: impl Into<String>) -> Self {
        Self::Body {
            message: message.into(),
        }
    }

    /// Returns whether the failure should be shown to the user.
    ///
    /// A blank reference is a normal "no photo" state, not a failure.
    #[must_use]
    pub const fn is_reportable(&self) -> bool {
        !matches!(self, Self::EmptyReference)
    }
}
