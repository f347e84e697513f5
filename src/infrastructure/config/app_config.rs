//! Application configuration.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::args::CliArgs;
use crate::domain::entities::{ColumnMapping, ServiceAccountCredentials};
use crate::domain::errors::LoadError;
use crate::domain::ports::RecordSourcePort;
use crate::infrastructure::sheets::{CsvRecordSource, GoogleSheetsClient};

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and CLI overrides.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Spreadsheet identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spreadsheet_key: Option<String>,

    /// Local CSV export used instead of the spreadsheet when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv_path: Option<PathBuf>,

    /// Service-account credential bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcp_service_account: Option<ServiceAccountCredentials>,

    /// Web server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Directory data configuration.
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Source column names.
    #[serde(default)]
    pub columns: ColumnMapping,

    /// Image retrieval configuration.
    #[serde(default)]
    pub images: ImagesConfig,
}

/// Web server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Page title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Cards per row.
    #[serde(default = "default_columns_per_row")]
    pub columns_per_row: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            title: default_title(),
            columns_per_row: default_columns_per_row(),
        }
    }
}

/// Directory data configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Seconds a loaded directory is reused before reading the source again.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// Timeout for data source requests in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl DirectoryConfig {
    /// Refresh interval as a duration.
    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

/// Image retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_image_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum cached images, 0 for unbounded.
    #[serde(default)]
    pub cache_capacity: usize,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_image_timeout_secs(),
            cache_capacity: 0,
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8501".to_string()
}

fn default_title() -> String {
    "社員名鑑".to_string()
}

fn default_columns_per_row() -> usize {
    3
}

fn default_refresh_interval_secs() -> u64 {
    600
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_image_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(bind) = &args.bind {
            self.server.bind.clone_from(bind);
        }
        if let Some(key) = &args.spreadsheet_key {
            self.spreadsheet_key = Some(key.clone());
        }
        if let Some(csv) = &args.csv {
            self.csv_path = Some(csv.clone());
        }
    }

    /// Builds the configured record source.
    ///
    /// A CSV path takes precedence over the spreadsheet.
    ///
    /// # Errors
    /// Returns error if neither source is configured or the spreadsheet
    /// credentials are missing or incomplete.
    pub fn record_source(&self) -> Result<Arc<dyn RecordSourcePort>, LoadError> {
        if let Some(path) = &self.csv_path {
            return Ok(Arc::new(CsvRecordSource::new(path.clone())));
        }

        let key = self
            .spreadsheet_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| LoadError::invalid_credentials("spreadsheet_key is not configured"))?;

        let credentials = self
            .gcp_service_account
            .clone()
            .ok_or(LoadError::MissingCredentials)?;

        Ok(Arc::new(GoogleSheetsClient::new(
            key,
            credentials,
            self.directory.request_timeout_secs,
        )?))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            spreadsheet_key: None,
            csv_path: None,
            gcp_service_account: None,
            server: ServerConfig::default(),
            directory: DirectoryConfig::default(),
            columns: ColumnMapping::default(),
            images: ImagesConfig::default(),
        }
    }
}
