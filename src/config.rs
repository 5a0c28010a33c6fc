//! Configuration file
//!
//! Looked up at `--config <path>` or `~/.egp-rates/config.toml`. Every key is
//! optional; command-line flags override whatever the file says.
//!
//! ```toml
//! endpoint = "https://open.er-api.com/v6/latest/EGP"
//! timeout = 5.0
//! amount = 100.0
//! ```

use crate::data::sources::DEFAULT_ENDPOINT;
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout")]
    pub timeout: f64,
    #[serde(default = "default_amount")]
    pub amount: f64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> f64 {
    10.0
}

fn default_amount() -> f64 {
    1.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: default_timeout(),
            amount: default_amount(),
        }
    }
}

/// `~/.egp-rates/config.toml`, if there is a home directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".egp-rates").join("config.toml"))
}

impl Config {
    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing default file is silent. Anything else that goes wrong is
    /// logged and the built-in defaults are used.
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(config_path) => Self::read(config_path),
            None => match default_config_path() {
                Some(default_path) if default_path.exists() => Self::read(&default_path),
                _ => Config::default(),
            },
        }
    }

    fn read(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read config {}: {}", path.display(), e);
                return Config::default();
            }
        };

        match toml::from_str::<Config>(&contents) {
            Ok(config) if config.timeout.is_finite() && config.timeout >= 0.0 => config,
            Ok(config) => {
                warn!(
                    "Ignoring invalid timeout {} in {}",
                    config.timeout,
                    path.display()
                );
                Config {
                    timeout: default_timeout(),
                    ..config
                }
            }
            Err(e) => {
                warn!("Failed to parse config {}: {}", path.display(), e);
                Config::default()
            }
        }
    }
}
