//! Application configuration
//!
//! Read from `<config_dir>/portfolio/config.toml`, or from the file named by
//! `PORTFOLIO_CONFIG`. Every key is optional and a missing file means
//! defaults:
//!
//! ```toml
//! dark_mode = true
//! data_file = "/srv/portfolio/portfolio.json"
//! log_filter = "info,portfolio_catalog=debug"
//! tag_preview_limit = 3
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "PORTFOLIO_CONFIG";

/// Where the loaded configuration came from
///
/// Loading happens before tracing is installed, so the caller logs this
/// once the subscriber is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The expected file does not exist
    Missing(PathBuf),
    /// No config directory on this platform
    Defaults,
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!(path = %path.display(), "config loaded"),
            ConfigSource::Missing(path) => {
                info!(path = %path.display(), "no config file, using defaults")
            }
            ConfigSource::Defaults => info!("no config directory, using defaults"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Passed through to the presentation layer untouched
    pub dark_mode: bool,
    /// JSON data set to load instead of the bundled one
    pub data_file: Option<PathBuf>,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// How many tags list views show before the "+N" badge
    pub tag_preview_limit: usize,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            data_file: None,
            log_filter: "info".to_string(),
            tag_preview_limit: 3,
        }
    }
}

impl PortfolioConfig {
    /// Get the path where the config file is expected
    ///
    /// - `PORTFOLIO_CONFIG` when set
    /// - Linux: ~/.config/portfolio/config.toml
    /// - macOS: ~/Library/Application Support/portfolio/config.toml
    /// - Windows: %APPDATA%\portfolio\config.toml
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|mut path| {
            path.push("portfolio");
            path.push("config.toml");
            path
        })
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Result<(Self, ConfigSource), ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok((Self::default(), ConfigSource::Missing(path.to_path_buf())));
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok((config, ConfigSource::File(path.to_path_buf())))
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}
