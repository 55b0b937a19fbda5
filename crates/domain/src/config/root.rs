use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::srv::SrvLookupConfig;

/// Configuration for the SRV re-resolution core, usually embedded in the
/// host application's own config file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub srv: SrvLookupConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse TOML text; missing sections and fields fall back to defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.srv.validate()?;
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Log level cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
