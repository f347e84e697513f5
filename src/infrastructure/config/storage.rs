//! Configuration file discovery and loading.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::app_config::AppConfig;

/// File name of the configuration inside the user config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

const APP_NAME: &str = "staff-directory";

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration file was named explicitly but does not exist.
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The configuration file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The default configuration could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that was written.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The default configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Locates and reads the configuration file.
///
/// Without an explicit path the file lives in the per-user config directory
/// and is created with defaults on first run. An explicit path is only ever
/// read.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    default_path: Option<PathBuf>,
}

impl ConfigStore {
    /// Uses the per-user config directory of the platform.
    #[must_use]
    pub fn new() -> Self {
        let default_path = ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME));
        Self { default_path }
    }

    /// Uses `dir` in place of the per-user config directory.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            default_path: Some(dir.as_ref().join(CONFIG_FILE_NAME)),
        }
    }

    /// Default configuration file, if a config directory could be determined.
    #[must_use]
    pub fn default_path(&self) -> Option<&Path> {
        self.default_path.as_deref()
    }

    /// Loads the configuration.
    ///
    /// A malformed file is left untouched and defaults are used.
    ///
    /// # Errors
    /// Returns error if `explicit` names a missing file, a file cannot be
    /// read, or the default file cannot be created.
    pub fn load(&self, explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return read_config(path);
        }

        let Some(path) = self.default_path() else {
            warn!("No config directory available, using defaults");
            return Ok(AppConfig::default());
        };

        if path.exists() {
            read_config(path)
        } else {
            info!(path = %path.display(), "Config file not found, writing defaults");
            let config = AppConfig::default();
            write_config(path, &config)?;
            Ok(config)
        }
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => {
            debug!(path = %path.display(), "Config loaded");
            Ok(config)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Config file is malformed, using defaults");
            Ok(AppConfig::default())
        }
    }
}

fn write_config(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(config)?;
    let write_error = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(write_error)?;

    // Written beside the target and renamed so a crash never leaves a partial file.
    let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
    staged.write_all(content.as_bytes()).map_err(write_error)?;
    staged.persist(path).map_err(|e| write_error(e.error))?;

    Ok(())
}
