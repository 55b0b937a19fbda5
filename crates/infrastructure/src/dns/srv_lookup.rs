use super::transport::{DnsTransport, UdpTransport};
use super::wire::{MessageBuilder, ResponseParser, TYPE_SRV};
use crate::random::FastrandSource;
use async_trait::async_trait;
use gotify_srv_application::ports::{RandomSource, SrvResolver};
use gotify_srv_application::services::SrvSelector;
use gotify_srv_domain::{srv_query_name, DomainError, SrvLookupConfig, SrvTarget};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// SRV resolution over plain UDP against a fixed, ordered resolver list.
///
/// The query is encoded once; resolvers are then tried once each, in order,
/// until one returns at least one usable SRV record. The transaction id is
/// not matched against the reply.
pub struct SrvLookup {
    upstreams: Vec<Arc<dyn DnsTransport>>,
    timeout: Duration,
    random: Arc<dyn RandomSource>,
}

impl SrvLookup {
    pub fn new(
        upstreams: Vec<Arc<dyn DnsTransport>>,
        timeout: Duration,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            upstreams,
            timeout,
            random,
        }
    }

    /// UDP transports for every configured resolver, `fastrand` for ties.
    pub fn from_config(config: &SrvLookupConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let upstreams = config
            .resolver_addrs()?
            .into_iter()
            .map(|addr| Arc::new(UdpTransport::new(addr)) as Arc<dyn DnsTransport>)
            .collect();

        Ok(Self::new(
            upstreams,
            config.query_timeout(),
            Arc::new(FastrandSource),
        ))
    }

    pub fn upstream_count(&self) -> usize {
        self.upstreams.len()
    }

    /// Normalized owner name, transaction id and encoded query. Input
    /// errors surface here, before any resolver is contacted.
    fn encode(domain: &str) -> Result<(String, u16, Vec<u8>), DomainError> {
        let query_name = srv_query_name(domain)?;
        let (id, query) = MessageBuilder::build_query_with_id(&query_name, TYPE_SRV)?;
        Ok((query_name, id, query))
    }

    async fn query_upstream(
        &self,
        transport: &dyn DnsTransport,
        query_name: &str,
        id: u16,
        query: &[u8],
    ) -> Result<Vec<SrvTarget>, DomainError> {
        let response = transport.send(query, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes)?;

        if parsed.id != id {
            debug!(sent = id, received = parsed.id, "Transaction id mismatch ignored");
        }
        if parsed.targets.is_empty() {
            return Err(DomainError::NoSrvRecords(query_name.to_string()));
        }
        Ok(parsed.targets)
    }
}

#[async_trait]
impl SrvResolver for SrvLookup {
    async fn resolve_srv(&self, domain: &str) -> Option<SrvTarget> {
        let (query_name, id, query) = match Self::encode(domain) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(domain = %domain, error = %e, "Invalid SRV lookup input");
                return None;
            }
        };

        info!(query = %query_name, resolvers = self.upstreams.len(), "SRV lookup");

        for (position, transport) in self.upstreams.iter().enumerate() {
            let attempt = self.query_upstream(transport.as_ref(), &query_name, id, &query);
            let candidates = match attempt.await {
                Ok(candidates) => candidates,
                Err(e) => {
                    debug!(
                        server = %transport.server_addr(),
                        protocol = transport.protocol_name(),
                        error = %e,
                        position,
                        "SRV query failed, trying next resolver"
                    );
                    continue;
                }
            };

            if let Some(target) = SrvSelector::select(&candidates, self.random.as_ref()) {
                info!(
                    host = %target.host,
                    port = target.port,
                    priority = target.priority,
                    server = %transport.server_addr(),
                    "SRV record found"
                );
                return Some(target);
            }
        }

        warn!(
            domain = %domain,
            tried = self.upstreams.len(),
            "SRV lookup failed on every resolver"
        );
        None
    }
}
