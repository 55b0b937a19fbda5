//! Hand-rolled DNS wire format (RFC 1035 §4), limited to what an SRV
//! lookup needs: one outgoing question, SRV answers coming back.

mod byte_reader;
pub mod message_builder;
mod name;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use response_parser::{ResponseParser, SrvResponse};

use thiserror::Error;

/// Fixed DNS header length
pub const HEADER_LEN: usize = 12;

/// RR type code for SRV (RFC 2782)
pub const TYPE_SRV: u16 = 33;

/// RR class code for Internet
pub const CLASS_IN: u16 = 1;

/// Standard query with RD set
pub const QUERY_FLAGS: u16 = 0x0100;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum WireError {
    #[error("message truncated at offset {offset}")]
    Truncated { offset: usize },

    #[error("compression pointer at {at} targets {target}, not an earlier offset")]
    BadPointer { at: usize, target: usize },

    #[error("unsupported label type 0x{kind:02x} at offset {at}")]
    UnsupportedLabel { at: usize, kind: u8 },

    #[error("decoded name exceeds 255 bytes")]
    NameTooLong,
}

impl WireError {
    /// A truncated buffer ends parsing; anything else only spoils the
    /// current record.
    pub(crate) fn is_truncation(&self) -> bool {
        matches!(self, WireError::Truncated { .. })
    }
}
