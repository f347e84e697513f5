//! Service-account credential bundle value object.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Service-account key as issued by the spreadsheet provider.
///
/// The private key is wiped from memory on drop and never printed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAccountCredentials {
    /// Account type, normally `service_account`.
    #[serde(rename = "type", default = "default_account_type")]
    pub account_type: String,
    /// Owning project.
    #[serde(default)]
    pub project_id: Option<String>,
    /// Identifier of the signing key.
    #[serde(default)]
    pub private_key_id: Option<String>,
    /// PEM-encoded RSA private key.
    pub private_key: String,
    /// Service-account e-mail, used as the JWT issuer.
    pub client_email: String,
    /// Numeric client id.
    #[serde(default)]
    pub client_id: Option<String>,
    /// OAuth token endpoint.
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_account_type() -> String {
    "service_account".to_string()
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountCredentials {
    /// Creates credentials with the default token endpoint.
    #[must_use]
    pub fn new(client_email: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            account_type: default_account_type(),
            project_id: None,
            private_key_id: None,
            private_key: private_key.into(),
            client_email: client_email.into(),
            client_id: None,
            token_uri: default_token_uri(),
        }
    }

    /// Returns true if the bundle has what is needed to sign an assertion.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.client_email.trim().is_empty() && self.private_key.contains("PRIVATE KEY")
    }

    /// Returns masked private key for display.
    #[must_use]
    pub fn masked_key(&self) -> String {
        if self.private_key.is_empty() {
            return String::new();
        }
        "*".repeat(8)
    }
}

impl Drop for ServiceAccountCredentials {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

impl fmt::Debug for ServiceAccountCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountCredentials")
            .field("account_type", &self.account_type)
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .field("private_key", &self.masked_key())
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}
