//! Application configuration.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{AppConfig, DirectoryConfig, ImagesConfig, LogLevel, ServerConfig};
pub use args::{CliArgs, Command};
pub use storage::{CONFIG_FILE_NAME, ConfigError, ConfigStore};
