use super::app_config::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments; set values override the configuration file.
#[derive(Debug, Parser)]
#[command(
    name = "staff-directory",
    version,
    about = "A filterable employee photo directory backed by a spreadsheet",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Listen address of the web server.
    #[arg(long, env = "STAFF_DIRECTORY_BIND", value_name = "ADDR")]
    pub bind: Option<String>,

    /// Spreadsheet identifier.
    #[arg(long, env = "STAFF_DIRECTORY_SPREADSHEET_KEY", value_name = "KEY")]
    pub spreadsheet_key: Option<String>,

    /// Read records from a local CSV export instead of the spreadsheet.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Subcommand; `serve` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl CliArgs {
    /// Subcommand to run, `serve` when none was given.
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

/// Subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Serve the directory page.
    Serve,
    /// Check that every photo link in the directory returns an image.
    CheckImages,
    /// Resolve a single photo reference and download it.
    Fetch {
        /// Share link or thumbnail URL.
        reference: String,
    },
}
