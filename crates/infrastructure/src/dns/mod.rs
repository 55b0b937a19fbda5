pub mod srv_lookup;
pub mod transport;
pub mod wire;

pub use srv_lookup::SrvLookup;
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
pub use wire::{MessageBuilder, ResponseParser, SrvResponse};
