use crate::DomainError;

/// Problems with the `[srv]` / `[logging]` configuration, reported before
/// any lookup is attempted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse SRV config: {0}")]
    Parse(String),

    #[error("Invalid SRV config: {0}")]
    Validation(String),
}

impl From<ConfigError> for DomainError {
    fn from(err: ConfigError) -> Self {
        DomainError::ConfigError(err.to_string())
    }
}
