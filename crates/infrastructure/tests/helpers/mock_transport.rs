#![allow(dead_code)]

use super::builders::SrvResponseBuilder;
use async_trait::async_trait;
use gotify_srv_domain::DomainError;
use gotify_srv_infrastructure::dns::{DnsTransport, TransportResponse};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

type Responder = Box<dyn Fn(&[u8]) -> Vec<u8> + Send + Sync>;

enum Outcome {
    Fail(DomainError),
    Respond(Responder),
}

/// Scripted transport: either always fails or answers every query.
pub struct MockTransport {
    addr: SocketAddr,
    outcome: Outcome,
    calls: AtomicU64,
    queries: Mutex<Vec<Vec<u8>>>,
}

impl MockTransport {
    fn with_outcome(addr: &str, outcome: Outcome) -> Self {
        Self {
            addr: addr.parse().unwrap(),
            outcome,
            calls: AtomicU64::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable(addr: &str) -> Self {
        let server = addr.to_string();
        Self::with_outcome(addr, Outcome::Fail(DomainError::TransportTimeout { server }))
    }

    pub fn failing(addr: &str, error: DomainError) -> Self {
        Self::with_outcome(addr, Outcome::Fail(error))
    }

    pub fn responding<F>(addr: &str, respond: F) -> Self
    where
        F: Fn(&[u8]) -> Vec<u8> + Send + Sync + 'static,
    {
        Self::with_outcome(addr, Outcome::Respond(Box::new(respond)))
    }

    /// Answers with one SRV record per `(priority, weight, port, target)`.
    pub fn with_srv(addr: &str, answers: &[(u16, u16, u16, &str)]) -> Self {
        let answers: Vec<(u16, u16, u16, String)> = answers
            .iter()
            .map(|(p, w, port, t)| (*p, *w, *port, t.to_string()))
            .collect();

        Self::responding(addr, move |query| {
            answers
                .iter()
                .fold(SrvResponseBuilder::for_query(query), |b, (p, w, port, t)| {
                    b.srv(*p, *w, *port, t)
                })
                .build()
        })
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn queries(&self) -> Vec<Vec<u8>> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        _timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.queries.lock().unwrap().push(message_bytes.to_vec());

        match &self.outcome {
            Outcome::Fail(error) => Err(error.clone()),
            Outcome::Respond(respond) => Ok(TransportResponse {
                bytes: respond(message_bytes),
                protocol_used: "mock",
            }),
        }
    }

    fn server_addr(&self) -> SocketAddr {
        self.addr
    }

    fn protocol_name(&self) -> &'static str {
        "mock"
    }
}
