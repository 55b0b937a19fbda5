//! DNS Query Builder
//!
//! Encodes a single-question recursive query in wire format. Names are
//! written uncompressed; there is nothing earlier in the message to point at.

use super::{CLASS_IN, HEADER_LEN, MAX_LABEL_LEN, MAX_NAME_LEN, QUERY_FLAGS, TYPE_SRV};
use gotify_srv_domain::{srv_query_name, DomainError};

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build the `_gotify._tcp` SRV query for `domain`.
    ///
    /// Returns the transaction id alongside the message bytes.
    pub fn build_srv_query(domain: &str) -> Result<(u16, Vec<u8>), DomainError> {
        let name = srv_query_name(domain)?;
        Self::build_query_with_id(&name, TYPE_SRV)
    }

    /// Build a query and return the random id it carries
    pub fn build_query_with_id(name: &str, record_type: u16) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);
        let bytes = Self::encode_query(name, record_type, id)?;
        Ok((id, bytes))
    }

    /// Encode header and question for a fixed transaction id
    ///
    /// Header: id, flags `0x0100`, QDCOUNT=1, ANCOUNT=NSCOUNT=ARCOUNT=0.
    /// Question: QNAME, QTYPE=`record_type`, QCLASS=IN.
    pub fn encode_query(name: &str, record_type: u16, id: u16) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(HEADER_LEN + name.len() + 6);

        buf.extend_from_slice(&id.to_be_bytes());
        buf.extend_from_slice(&QUERY_FLAGS.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&[0u8; 6]);

        Self::encode_name(name, &mut buf)?;

        buf.extend_from_slice(&record_type.to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());

        Ok(buf)
    }

    /// Writes `name` as length-prefixed labels plus the root byte.
    fn encode_name(name: &str, buf: &mut Vec<u8>) -> Result<(), DomainError> {
        let dotted = name.strip_suffix('.').unwrap_or(name);
        let start = buf.len();

        for label in dotted.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidLabel(format!(
                    "empty label in '{}'",
                    name
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidLabel(format!(
                    "label '{}' is longer than {} bytes",
                    label, MAX_LABEL_LEN
                )));
            }
            if !label.is_ascii() {
                return Err(DomainError::InvalidLabel(format!(
                    "label '{}' is not ASCII",
                    label
                )));
            }

            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0);

        if buf.len() - start > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' encodes to more than {} bytes",
                name, MAX_NAME_LEN
            )));
        }
        Ok(())
    }
}
