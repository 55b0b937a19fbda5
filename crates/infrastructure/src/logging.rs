use gotify_srv_domain::{DomainError, LoggingConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured level. Fails instead of panicking
/// when a subscriber is already installed, e.g. by the host application.
pub fn init_logging(config: &LoggingConfig) -> Result<(), DomainError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            DomainError::ConfigError(format!("Invalid log level '{}': {}", config.level, e))
        })?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if config.json {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    result.map_err(|e| DomainError::ConfigError(format!("Failed to install logger: {}", e)))
}
