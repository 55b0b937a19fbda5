use crate::ports::SrvResolver;
use gotify_srv_domain::{ResolvedEndpoint, ServerSettings, SrvTarget};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// `scheme://host:port` for `target`, keeping `https` only when
/// `original_url` used it.
pub fn compose_resolved_url(original_url: &str, target: &SrvTarget) -> Option<String> {
    match ResolvedEndpoint::compose(original_url, target) {
        Some(endpoint) => Some(endpoint.to_url()),
        None => {
            error!(host = %target.host, port = target.port, "Failed to build resolved URL");
            None
        }
    }
}

/// Re-resolves the server URL through SRV before the HTTP client is
/// (re)configured.
///
/// May wait for `timeout × resolvers`; run it where blocking on network I/O
/// is acceptable.
pub struct ResolveServerUrlUseCase {
    resolver: Arc<dyn SrvResolver>,
}

impl ResolveServerUrlUseCase {
    pub fn new(resolver: Arc<dyn SrvResolver>) -> Self {
        Self { resolver }
    }

    /// Looks up the SRV target for the original URL's host and points
    /// `settings.url` at it.
    ///
    /// Returns the URL that was configured before this call. Without SRV
    /// lookup enabled, or without a usable original URL, nothing is looked
    /// up and `settings` is untouched. When the lookup or URL composition
    /// fails, `settings.url` is reset to the original URL.
    pub async fn execute(&self, settings: &mut ServerSettings) -> String {
        let Some((original_url, domain)) = Self::lookup_input(settings) else {
            return settings.url.clone();
        };

        info!(domain = %domain, "SRV lookup enabled, re-resolving");

        let previous = settings.url.clone();
        match self.resolve(&original_url, &domain).await {
            Some(resolved) => {
                info!(url = %resolved, "SRV re-resolved");
                settings.url = resolved;
            }
            None => {
                warn!(domain = %domain, "SRV re-resolution failed, using original URL");
                settings.url = original_url;
            }
        }
        previous
    }

    /// Same lookup as [`execute`](Self::execute) without touching
    /// `settings`: the resolved URL, or the current `url` on any failure.
    pub async fn current_resolved_url(&self, settings: &ServerSettings) -> String {
        let Some((original_url, domain)) = Self::lookup_input(settings) else {
            return settings.url.clone();
        };

        self.resolve(&original_url, &domain)
            .await
            .unwrap_or_else(|| settings.url.clone())
    }

    async fn resolve(&self, original_url: &str, domain: &str) -> Option<String> {
        let target = self.resolver.resolve_srv(domain).await?;
        compose_resolved_url(original_url, &target)
    }

    fn lookup_input(settings: &ServerSettings) -> Option<(String, String)> {
        if !settings.enable_srv_lookup {
            return None;
        }

        let Some(original_url) = settings.original_url() else {
            debug!("SRV lookup enabled but no original URL stored");
            return None;
        };

        let Some(domain) = settings.original_host() else {
            debug!(original_url = %original_url, "SRV lookup enabled but original URL is invalid");
            return None;
        };

        Some((original_url.to_string(), domain))
    }
}
