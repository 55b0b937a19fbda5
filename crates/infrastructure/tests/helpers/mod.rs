#![allow(dead_code)]

pub mod dns_server_mock;
pub mod mock_transport;

pub use builders::{encode_name, SrvResponseBuilder};
pub use dns_server_mock::MockDnsServer;
pub use mock_transport::MockTransport;

use gotify_srv_application::ports::RandomSource;

/// Always returns the same draw, clamped into range.
pub struct FixedRandom(pub u32);

impl RandomSource for FixedRandom {
    fn next_below(&self, bound: u32) -> u32 {
        self.0.min(bound.saturating_sub(1))
    }
}
