#![allow(dead_code)]

use super::builders::SrvResponseBuilder;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// UDP server on localhost answering each datagram through a closure.
///
/// Returning `None` from the closure drops the query unanswered.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicU64>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start<F>(respond: F) -> Result<Self, std::io::Error>
    where
        F: Fn(&[u8]) -> Option<Vec<u8>> + Send + 'static,
    {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&queries);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::Relaxed);
                            if let Some(response) = respond(&buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Answers every query with the given SRV records.
    pub async fn with_srv(answers: Vec<(u16, u16, u16, &'static str)>) -> Result<Self, std::io::Error> {
        Self::start(move |query| {
            if query.len() < 12 {
                return None;
            }
            let builder = answers
                .iter()
                .fold(SrvResponseBuilder::for_query(query), |b, (p, w, port, t)| {
                    b.srv(*p, *w, *port, t)
                });
            Some(builder.build())
        })
        .await
    }

    /// Receives queries and never answers.
    pub async fn silent() -> Result<Self, std::io::Error> {
        Self::start(|_| None).await
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> u64 {
        self.queries.load(Ordering::Relaxed)
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
