pub mod udp;

use async_trait::async_trait;
use gotify_srv_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// One request/response exchange with a single resolver.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Sends `message_bytes` and waits at most `timeout` for the reply.
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn server_addr(&self) -> SocketAddr;

    fn protocol_name(&self) -> &'static str;
}
