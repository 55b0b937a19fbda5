use async_trait::async_trait;
use gotify_srv_domain::SrvTarget;

/// Capability "resolve SRV": find the preferred `_gotify._tcp` target for a
/// domain.
///
/// Every failure (blank input, unreachable resolvers, malformed replies, no
/// records) is reported as `None`; implementations log the cause.
#[async_trait]
pub trait SrvResolver: Send + Sync {
    async fn resolve_srv(&self, domain: &str) -> Option<SrvTarget>;
}
