//! Record loading error types.

use thiserror::Error;

/// Reasons the directory data could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum LoadError {
    #[error("no service-account credentials configured")]
    MissingCredentials,

    #[error("invalid service-account credentials: {message}")]
    InvalidCredentials { message: String },

    #[error("authorization failed: {message}")]
    Auth { message: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("data source returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to parse data source response: {message}")]
    Parse { message: String },

    #[error("column not found: {0}")]
    MissingColumn(String),

    #[error("io error: {message}")]
    Io { message: String },
}

impl LoadError {
    /// Creates invalid credentials error.
    #[must_use]
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            message: message.into(),
        }
    }

    /// Creates authorization error.
    #[must_use]
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Creates io error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        if e.is_io_error() {
            Self::io(e.to_string())
        } else {
            Self::parse(e.to_string())
        }
    }
}
