//! Wire types of the OAuth and Sheets APIs.

use serde::{Deserialize, Serialize};

/// OAuth token endpoint response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// Bearer token.
    pub access_token: String,
    /// Lifetime in seconds.
    #[serde(default = "default_expires_in")]
    pub expires_in: i64,
}

fn default_expires_in() -> i64 {
    3600
}

/// OAuth error body.
#[derive(Debug, Deserialize)]
pub struct TokenErrorResponse {
    /// Error code, e.g. `invalid_grant`.
    pub error: String,
    /// Human readable explanation.
    #[serde(default)]
    pub error_description: Option<String>,
}

/// JWT claims of the service-account assertion.
#[derive(Debug, Serialize)]
pub struct AssertionClaims<'a> {
    /// Service-account email.
    pub iss: &'a str,
    /// Space-separated OAuth scopes.
    pub scope: &'a str,
    /// Token endpoint the assertion is exchanged at.
    pub aud: &'a str,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// Spreadsheet metadata restricted to sheet properties.
#[derive(Debug, Deserialize)]
pub struct SpreadsheetResponse {
    /// Worksheets in tab order.
    #[serde(default)]
    pub sheets: Vec<SheetResponse>,
}

/// One worksheet entry.
#[derive(Debug, Deserialize)]
pub struct SheetResponse {
    /// Worksheet properties.
    pub properties: SheetProperties,
}

/// Worksheet properties used for lookup.
#[derive(Debug, Deserialize)]
pub struct SheetProperties {
    /// Tab title.
    pub title: String,
}

/// Cell grid of a value range.
#[derive(Debug, Deserialize)]
pub struct ValueRangeResponse {
    /// Rows of cell values; trailing empty cells are omitted by the API.
    #[serde(default)]
    pub values: Vec<Vec<serde_json::Value>>,
}

/// Google API error envelope.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    /// Error details.
    pub error: ApiError,
}

/// Error details of a failed API call.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    /// Human readable message.
    #[serde(default)]
    pub message: String,
}
