//! Google Sheets record source.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, info, warn};

use super::auth::ServiceAccountAuthenticator;
use super::dto::{ApiErrorResponse, SpreadsheetResponse, ValueRangeResponse};
use crate::domain::entities::ServiceAccountCredentials;
use crate::domain::errors::LoadError;
use crate::domain::ports::{RawRow, RecordSourcePort};

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Reads the first sheet of a spreadsheet through the Sheets v4 API.
#[derive(Debug)]
pub struct GoogleSheetsClient {
    client: Client,
    auth: ServiceAccountAuthenticator,
    spreadsheet_key: String,
    base_url: String,
}

impl GoogleSheetsClient {
    /// Creates a client for the given spreadsheet.
    ///
    /// # Errors
    /// Returns error if the credentials are incomplete or the HTTP client
    /// cannot be created.
    pub fn new(
        spreadsheet_key: impl Into<String>,
        credentials: ServiceAccountCredentials,
        timeout_secs: u64,
    ) -> Result<Self, LoadError> {
        Self::with_base_url(spreadsheet_key, credentials, timeout_secs, SHEETS_API_BASE)
    }

    /// Creates a client with a custom API base URL.
    ///
    /// # Errors
    /// Returns error if the credentials are incomplete or the HTTP client
    /// cannot be created.
    pub fn with_base_url(
        spreadsheet_key: impl Into<String>,
        credentials: ServiceAccountCredentials,
        timeout_secs: u64,
        base_url: impl Into<String>,
    ) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| LoadError::network(format!("failed to create HTTP client: {e}")))?;

        let auth = ServiceAccountAuthenticator::new(credentials, client.clone())?;

        Ok(Self {
            client,
            auth,
            spreadsheet_key: spreadsheet_key.into(),
            base_url: base_url.into(),
        })
    }

    fn spreadsheet_url(&self) -> Result<Url, LoadError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| LoadError::parse(format!("invalid API base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| LoadError::parse("API base URL cannot take a path"))?
            .push(&self.spreadsheet_key);
        Ok(url)
    }

    fn values_url(&self, sheet_title: &str) -> Result<Url, LoadError> {
        let mut url = self.spreadsheet_url()?;
        url.path_segments_mut()
            .map_err(|()| LoadError::parse("API base URL cannot take a path"))?
            .push("values")
            .push(sheet_title);
        Ok(url)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, LoadError> {
        let token = self.auth.access_token().await?;

        let response = self
            .client
            .get(url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to connect to Sheets API");
                if e.is_timeout() {
                    LoadError::network("request timed out")
                } else if e.is_connect() {
                    LoadError::network("failed to connect to Sheets API")
                } else {
                    LoadError::network(e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| LoadError::parse(e.to_string()))
    }

    async fn handle_error_response(status: StatusCode, response: reqwest::Response) -> LoadError {
        let message = match response.json::<ApiErrorResponse>().await {
            Ok(body) if !body.error.message.is_empty() => body.error.message,
            _ => format!("HTTP {status}"),
        };

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                LoadError::auth(format!("access denied: {message}"))
            }
            _ => LoadError::Status {
                status: status.as_u16(),
                message,
            },
        }
    }

    async fn first_sheet_title(&self) -> Result<String, LoadError> {
        let mut url = self.spreadsheet_url()?;
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties.title");

        let spreadsheet: SpreadsheetResponse = self.get_json(url).await?;

        spreadsheet
            .sheets
            .into_iter()
            .next()
            .map(|s| s.properties.title)
            .ok_or_else(|| LoadError::parse("spreadsheet has no sheets"))
    }
}

/// Maps a value grid to records keyed by the header row.
///
/// Rows shorter than the header are padded with empty strings; cells beyond
/// the header are dropped. A grid without a header yields no records.
#[must_use]
pub fn records_from_values(values: Vec<Vec<serde_json::Value>>) -> Vec<RawRow> {
    let mut rows = values.into_iter();

    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let header: Vec<String> = header
        .iter()
        .map(crate::domain::entities::cell_text)
        .collect();

    rows.map(|row| {
        let mut cells = row.into_iter();
        header
            .iter()
            .map(|column| {
                let value = cells
                    .next()
                    .unwrap_or_else(|| serde_json::Value::String(String::new()));
                (column.clone(), value)
            })
            .collect()
    })
    .collect()
}

#[async_trait]
impl RecordSourcePort for GoogleSheetsClient {
    async fn fetch_rows(&self) -> Result<Vec<RawRow>, LoadError> {
        let title = self.first_sheet_title().await?;
        debug!(sheet = %title, "Reading first worksheet");

        let range: ValueRangeResponse = self.get_json(self.values_url(&title)?).await?;
        let records = records_from_values(range.values);

        info!(
            spreadsheet = %self.spreadsheet_key,
            sheet = %title,
            records = records.len(),
            "Loaded records from Google Sheets"
        );

        Ok(records)
    }

    fn describe(&self) -> String {
        format!("google-sheets:{}", self.spreadsheet_key)
    }
}
