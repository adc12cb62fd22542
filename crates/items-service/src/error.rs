//! Top-level error type for the items service binary.
//!
//! [`ServiceError`] wraps every failure that can end the process, so
//! `main` can propagate with `?` and exit non-zero.

use crate::config::ConfigError;
use crate::server::ServerError;

/// Top-level error for the items service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: ServerError,
    },
}
