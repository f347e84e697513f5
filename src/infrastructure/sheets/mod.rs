//! Directory data sources.

mod auth;
mod client;
mod csv_source;
mod dto;
mod unconfigured;

pub use client::{GoogleSheetsClient, records_from_values};
pub use csv_source::CsvRecordSource;
pub use unconfigured::UnconfiguredSource;
