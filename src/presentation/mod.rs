//! Presentation layer with the web page and command-line output.

/// Command-line diagnostics.
pub mod cli;
/// Directory web server.
pub mod web;

pub use web::{AppState, PageRenderer, router, serve};
