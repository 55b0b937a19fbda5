use crate::SrvTarget;
use std::fmt;

/// Base URL rebuilt from the original URL's scheme and a selected SRV target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoint {
    pub scheme: &'static str,
    pub host: String,
    pub port: u16,
}

impl ResolvedEndpoint {
    /// `https` when `original_url` starts with `https://`, `http` otherwise.
    ///
    /// Returns `None` when the target host cannot appear in a URL authority.
    pub fn compose(original_url: &str, target: &SrvTarget) -> Option<Self> {
        let scheme = if original_url.starts_with("https://") {
            "https"
        } else {
            "http"
        };

        let host = target.host.strip_suffix('.').unwrap_or(&target.host);
        if host.is_empty() || host.contains(|c: char| c.is_whitespace() || "/?#@".contains(c)) {
            return None;
        }

        Some(Self {
            scheme,
            host: host.to_string(),
            port: target.port,
        })
    }

    pub fn to_url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResolvedEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}
