//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Diagnostics adapters.
pub mod diagnostics;
/// Photo download and caching.
pub mod image;
/// Spreadsheet and CSV record sources.
pub mod sheets;

pub use config::{AppConfig, CliArgs, Command, ConfigError, ConfigStore, LogLevel};
pub use diagnostics::{BufferedDiagnostics, LogDiagnostics};
pub use image::{CacheStats, HttpImageTransport, HttpTransportConfig, MemoryImageCache};
pub use sheets::{CsvRecordSource, GoogleSheetsClient, UnconfiguredSource};
