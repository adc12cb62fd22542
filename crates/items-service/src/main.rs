//! Items service binary.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `items-config.yaml` (defaults if absent)
//! 3. Apply the configured log level unless `RUST_LOG` is set
//! 4. Create the in-memory item store
//! 5. Serve HTTP until `Ctrl-C`

use std::path::Path;
use std::sync::Arc;

use items_service::{start_server, ItemStore, ServiceConfig, ServiceError};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{fmt, reload, EnvFilter};

/// Config file looked up relative to the working directory.
const CONFIG_PATH: &str = "items-config.yaml";

/// Level used until the configuration has been read.
const BOOTSTRAP_LOG_LEVEL: &str = "info";

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    // 1. Initialize structured logging.
    let env_filter = EnvFilter::try_from_default_env();
    let rust_log_set = env_filter.is_ok();
    let (filter, filter_handle) = reload::Layer::new(
        env_filter.unwrap_or_else(|_| EnvFilter::new(BOOTSTRAP_LOG_LEVEL)),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();

    info!("items-service starting");

    // 2. Load configuration.
    let config_path = Path::new(CONFIG_PATH);
    let config = if config_path.exists() {
        let config = ServiceConfig::from_file(config_path)?;
        info!(path = CONFIG_PATH, "Configuration loaded");
        config
    } else {
        info!("Config file not found, using defaults");
        ServiceConfig::from_env()
    };

    // 3. Apply the configured log level.
    if !rust_log_set {
        apply_log_level(&filter_handle, &config.logging.level);
    }
    info!(
        host = config.server.host,
        port = config.server.port,
        log_level = config.logging.level,
        "Listener configured"
    );

    // 4. Create the item store.
    let store = Arc::new(ItemStore::new());

    // 5. Serve.
    start_server(&config.server, store).await?;

    info!("items-service shutdown complete");
    Ok(())
}

/// Swap the bootstrap filter for the configured level.
fn apply_log_level(handle: &reload::Handle<EnvFilter, Registry>, level: &str) {
    match EnvFilter::try_new(level) {
        Ok(filter) => {
            if let Err(e) = handle.reload(filter) {
                warn!(error = %e, "failed to apply configured log level");
            }
        }
        Err(e) => warn!(value = level, error = %e, "invalid log level, keeping {BOOTSTRAP_LOG_LEVEL}"),
    }
}
