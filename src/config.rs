//! Configuration for the CLI driver.
//!
//! The driver reads an optional TOML file and then applies environment
//! variable overrides. The library never reads configuration itself; an
//! embedder constructs [`HttpRecordStore`](crate::store::HttpRecordStore)
//! with whatever URL it wants.
//!
//! # File Format
//!
//! ```toml
//! # ~/.config/shelfsync/config.toml
//! service_url = "http://localhost:8000"
//! trace_level = "debug"
//! ```
//!
//! # Environment Overrides
//!
//! - `SHELFSYNC_CONFIG`: path of the configuration file to read
//! - `SHELFSYNC_URL`: overrides `service_url`
//! - `SHELFSYNC_LOG`: overrides `trace_level` (read by the tracing setup)

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::error::{Result, ShelfsyncError};

/// Default base URL of the lending service, matching its development setup.
const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";

/// Driver configuration loaded from TOML and the environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the remote book service.
    pub service_url: String,

    /// Env-filter directive for tracing output.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `tracing_subscriber` filter expression. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration for the driver.
    ///
    /// Reads the file named by `SHELFSYNC_CONFIG`, falling back to
    /// `~/.config/shelfsync/config.toml`. A missing file yields defaults;
    /// a present but malformed file is an error. Environment overrides are
    /// applied last.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfsyncError::Io`] when the file exists but cannot be
    /// read, or [`ShelfsyncError::Config`] when it is not valid TOML.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os("SHELFSYNC_CONFIG")
            .map(PathBuf::from)
            .or_else(default_config_path);

        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Parses configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfsyncError::Io`] on read failure or
    /// [`ShelfsyncError::Config`] on a parse failure.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| ShelfsyncError::Config(format!("{}: {e}", path.display())))
    }

    /// Applies environment variable overrides on top of file values.
    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("SHELFSYNC_URL") {
            if !url.is_empty() {
                self.service_url = url;
            }
        }
    }
}

/// Default configuration file location under the user's home directory.
fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".config/shelfsync/config.toml"))
}
