//! Staff Directory - a filterable employee photo directory.
//!
//! This crate loads employee records from a spreadsheet, resolves their
//! Drive share links to thumbnail URLs, and serves the result as a
//! filterable card grid, with clean architecture between the layers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing the web page and CLI output.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "staff-directory";
