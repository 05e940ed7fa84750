/**
 * Server Configuration
 *
 * Loads `AppConfig` at startup and sets up logging from it.
 *
 * # Configuration Sources
 *
 * In increasing precedence: built-in defaults, the TOML file named by
 * `PCB_INSPECT_CONFIG`, then environment variables. A `.env` file is read
 * into the environment first.
 */

use tracing_subscriber::EnvFilter;

use crate::shared::config::{AppConfig, ConfigError};

/// Load `.env`, then the layered configuration
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenv::dotenv().ok();
    AppConfig::load()
}

/// Log the settings that matter at startup. Call after `init_tracing`.
pub fn log_summary(config: &AppConfig) {
    tracing::info!(
        bind = %config.bind_address(),
        static_dir = %config.server.static_dir.display(),
        session_ttl_secs = config.auth.session_ttl_secs,
        bcrypt_cost = config.auth.bcrypt_cost,
        detection_delay_ms = config.detection.delay_ms,
        "Configuration loaded"
    );
}

/// Filter from `RUST_LOG`, falling back to the configured one
pub fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Install the global tracing subscriber
pub fn init_tracing(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .init();
}
