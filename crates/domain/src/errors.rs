use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS label: {0}")]
    InvalidLabel(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("No SRV records found for {0}")]
    NoSrvRecords(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
