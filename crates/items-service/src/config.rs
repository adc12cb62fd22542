//! Configuration loading and typed config structures for the items service.
//!
//! Configuration is optional. When `items-config.yaml` exists in the
//! working directory it is read with [`ServiceConfig::from_file`];
//! otherwise [`ServiceConfig::from_env`] starts from the defaults. Every
//! field has a default, so a partial file is valid.
//!
//! With no file and no environment variables the service listens on
//! `0.0.0.0:5000`.

use std::net::{AddrParseError, SocketAddr};
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

/// Environment variable overriding [`ServerConfig::host`].
pub const HOST_ENV: &str = "ITEMS_HOST";

/// Environment variable overriding [`ServerConfig::port`].
pub const PORT_ENV: &str = "ITEMS_PORT";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for the listener:
    /// - `ITEMS_HOST` overrides `server.host`
    /// - `ITEMS_PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.server.apply_env_overrides();
        Ok(config)
    }

    /// Default configuration with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.server.apply_env_overrides();
        config
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Resolve `host:port` into a socket address.
    ///
    /// The host must be a literal IP address; hostnames are not resolved.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    /// Override the listener with `ITEMS_HOST` / `ITEMS_PORT` when set.
    pub fn apply_env_overrides(&mut self) {
        let host = std::env::var(HOST_ENV).ok();
        let port = std::env::var(PORT_ENV).ok();
        self.apply_overrides(host, port.as_deref());
    }

    /// Apply explicit host and port overrides.
    ///
    /// Blank values count as unset. A port that does not parse as `u16`
    /// is ignored and the current value kept.
    pub fn apply_overrides(&mut self, host: Option<String>, port: Option<&str>) {
        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            self.host = host.trim().to_owned();
        }
        if let Some(raw) = port.filter(|p| !p.trim().is_empty()) {
            match raw.trim().parse::<u16>() {
                Ok(port) => self.port = port,
                Err(e) => warn!(value = raw, error = %e, "ignoring invalid {PORT_ENV}"),
            }
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    String::from("info")
}
