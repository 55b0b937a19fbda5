//! Gotify SRV Domain Layer
pub mod config;
pub mod errors;
pub mod resolved_endpoint;
pub mod server_settings;
pub mod service_name;
pub mod srv_target;

pub use config::{Config, ConfigError, LoggingConfig, SrvLookupConfig};
pub use errors::DomainError;
pub use resolved_endpoint::ResolvedEndpoint;
pub use server_settings::ServerSettings;
pub use service_name::{srv_query_name, SERVICE_LABEL};
pub use srv_target::SrvTarget;
