pub mod errors;
pub mod logging;
pub mod root;
pub mod srv;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::Config;
pub use srv::SrvLookupConfig;
