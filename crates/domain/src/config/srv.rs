use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

use super::errors::ConfigError;

const DNS_PORT: u16 = 53;

/// SRV lookup settings: which resolvers to ask, in order, and how long to
/// wait for each.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SrvLookupConfig {
    #[serde(default = "default_resolvers")]
    pub resolvers: Vec<String>,

    /// Per-resolver timeout in milliseconds
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

impl Default for SrvLookupConfig {
    fn default() -> Self {
        Self {
            resolvers: default_resolvers(),
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

impl SrvLookupConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    /// Parses every resolver entry; a bare IPv4 address gets port 53.
    pub fn resolver_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.resolvers
            .iter()
            .map(|entry| parse_resolver(entry))
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolvers.is_empty() {
            return Err(ConfigError::Validation(
                "No SRV resolvers configured".to_string(),
            ));
        }
        if self.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "SRV query timeout cannot be 0".to_string(),
            ));
        }
        self.resolver_addrs().map(|_| ())
    }
}

fn parse_resolver(entry: &str) -> Result<SocketAddr, ConfigError> {
    let entry = entry.trim();
    let addr = if let Ok(addr) = entry.parse::<SocketAddr>() {
        addr
    } else if let Ok(ip) = entry.parse::<std::net::Ipv4Addr>() {
        SocketAddr::from((ip, DNS_PORT))
    } else {
        return Err(ConfigError::Validation(format!(
            "Invalid resolver address '{}'",
            entry
        )));
    };

    if !addr.is_ipv4() {
        return Err(ConfigError::Validation(format!(
            "Resolver '{}' is not an IPv4 address",
            entry
        )));
    }
    Ok(addr)
}

fn default_resolvers() -> Vec<String> {
    vec!["1.1.1.1:53".to_string(), "8.8.8.8:53".to_string()]
}

fn default_query_timeout_ms() -> u64 {
    3000
}
