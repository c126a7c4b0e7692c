//! Configuration management for systemshub.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::catalogue::{defaults, Catalogue, Item, SiteConfig};
use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "systemshub";

/// Environment variable prefix for nested settings (`SYSTEMSHUB_SERVER__BIND`).
const ENV_PREFIX: &str = "SYSTEMSHUB_";

/// Environment variable holding the allowed CORS origin.
pub const CORS_ORIGIN_ENV: &str = "CORS_ORIGINS";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. `CORS_ORIGINS` (allowed origin only)
/// 2. Environment variables (prefixed with `SYSTEMSHUB_`, nested with `__`)
/// 3. TOML config file at `~/.config/systemshub/config.toml`
/// 4. Default values, including the built-in catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-level settings.
    pub site: SiteConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Catalogue items. A `[[items]]` list in the config file replaces the
    /// built-in catalogue entirely.
    pub items: Vec<Item>,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind: String,
    /// Value of `Access-Control-Allow-Origin` on every response.
    pub cors_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            server: ServerConfig::default(),
            items: defaults::builtin_items(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            cors_origin: "*".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing config file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(Env::raw().only(&[CORS_ORIGIN_ENV]).map(|_| "server.cors_origin".into()));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileRead`] if the file can't be read, or any error
    /// [`Config::load_from`] returns.
    pub fn load_file(path: &Path) -> Result<Self> {
        std::fs::metadata(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from(Some(path.to_path_buf()))
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid, including
    /// catalogue items that break the catalogue invariants.
    pub fn validate(&self) -> Result<()> {
        self.bind_addr()?;

        if self.server.cors_origin.trim().is_empty() {
            return Err(Error::config_validation("server.cors_origin must not be empty"));
        }
        if HeaderValue::from_str(&self.server.cors_origin).is_err() {
            return Err(Error::config_validation(format!(
                "server.cors_origin is not a valid header value: {:?}",
                self.server.cors_origin
            )));
        }

        self.catalogue().map(|_| ())
    }

    /// Parse the configured bind address.
    ///
    /// # Errors
    ///
    /// Returns an error if `server.bind` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind.parse().map_err(|_| {
            Error::config_validation(format!(
                "server.bind is not a socket address: {}",
                self.server.bind
            ))
        })
    }

    /// Build the catalogue described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the items are empty, duplicated or have invalid keys.
    pub fn catalogue(&self) -> Result<Catalogue> {
        Catalogue::new(self.site.clone(), self.items.clone())
    }
}
