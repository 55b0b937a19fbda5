use super::byte_reader::ByteReader;
use super::name::{read_name, skip_name};
use super::{WireError, HEADER_LEN, TYPE_SRV};
use gotify_srv_domain::{DomainError, SrvTarget};
use std::sync::Arc;
use tracing::{debug, warn};

/// PRIORITY + WEIGHT + PORT, ahead of the target name
const SRV_FIXED_LEN: usize = 6;

const FLAG_TRUNCATED: u16 = 0x0200;
const RCODE_MASK: u16 = 0x000F;

/// What an SRV response yielded.
///
/// `targets` holds every SRV answer decoded before parsing stopped; answers
/// of other types are skipped.
#[derive(Debug, Clone)]
pub struct SrvResponse {
    pub id: u16,

    pub rcode: u8,

    /// TC bit. There is no TCP retry; whatever fitted is used.
    pub truncated: bool,

    /// ANCOUNT as declared in the header
    pub answer_count: u16,

    pub targets: Vec<SrvTarget>,

    /// Parsing hit the end of the buffer before all declared records
    pub incomplete: bool,
}

impl SrvResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == 3
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decode the SRV answers of a raw response.
    ///
    /// Only a buffer shorter than the header is an error. Past that, a
    /// truncated buffer stops parsing with the targets collected so far, and
    /// a malformed name discards only the record it belongs to.
    pub fn parse(response_bytes: &[u8]) -> Result<SrvResponse, DomainError> {
        if response_bytes.len() < HEADER_LEN {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response is {} bytes, shorter than the {}-byte header",
                response_bytes.len(),
                HEADER_LEN
            )));
        }

        let mut reader = ByteReader::new(response_bytes);
        let (id, flags, question_count, answer_count) = Self::read_header(&mut reader)
            .map_err(|e| DomainError::InvalidDnsResponse(e.to_string()))?;

        let mut response = SrvResponse {
            id,
            rcode: (flags & RCODE_MASK) as u8,
            truncated: flags & FLAG_TRUNCATED != 0,
            answer_count,
            targets: Vec::new(),
            incomplete: false,
        };

        if let Err(e) = Self::skip_questions(&mut reader, question_count) {
            warn!(error = %e, "Malformed question section in DNS response");
            response.incomplete = true;
            return Ok(response);
        }

        for index in 0..answer_count {
            match Self::read_answer(&mut reader) {
                Ok(Some(target)) => response.targets.push(target),
                Ok(None) => {}
                Err(e) => {
                    warn!(
                        error = %e,
                        record = index,
                        declared = answer_count,
                        parsed = response.targets.len(),
                        "Malformed DNS response, keeping parsed SRV records"
                    );
                    response.incomplete = true;
                    break;
                }
            }
        }

        debug!(
            id = response.id,
            rcode = response.rcode,
            truncated = response.truncated,
            answers = answer_count,
            srv_targets = response.targets.len(),
            "DNS response parsed"
        );

        Ok(response)
    }

    /// Shorthand for the targets of [`parse`](Self::parse); empty on any
    /// failure.
    pub fn parse_srv_targets(response_bytes: &[u8]) -> Vec<SrvTarget> {
        Self::parse(response_bytes)
            .map(|response| response.targets)
            .unwrap_or_default()
    }

    fn read_header(reader: &mut ByteReader<'_>) -> Result<(u16, u16, u16, u16), WireError> {
        let id = reader.read_u16()?;
        let flags = reader.read_u16()?;
        let question_count = reader.read_u16()?;
        let answer_count = reader.read_u16()?;
        // NSCOUNT, ARCOUNT
        reader.skip(4)?;
        Ok((id, flags, question_count, answer_count))
    }

    fn skip_questions(reader: &mut ByteReader<'_>, count: u16) -> Result<(), WireError> {
        for _ in 0..count {
            skip_name(reader)?;
            // QTYPE, QCLASS
            reader.skip(4)?;
        }
        Ok(())
    }

    /// One answer record. `Ok(None)` for records that are skipped: other
    /// types, empty targets, or SRV data that does not decode. `Err` when
    /// the record boundary is lost, which ends parsing.
    fn read_answer(reader: &mut ByteReader<'_>) -> Result<Option<SrvTarget>, WireError> {
        skip_name(reader)?;
        let record_type = reader.read_u16()?;
        // CLASS, TTL
        reader.skip(2)?;
        let _ttl = reader.read_u32()?;
        let rdata_len = usize::from(reader.read_u16()?);

        let rdata_start = reader.position();
        let rdata_end = rdata_start + rdata_len;
        if rdata_end > reader.len() {
            return Err(WireError::Truncated {
                offset: rdata_start,
            });
        }

        if record_type != TYPE_SRV {
            debug!(record_type, rdata_len, "Skipping non-SRV answer");
            reader.seek(rdata_end)?;
            return Ok(None);
        }

        if rdata_len <= SRV_FIXED_LEN {
            debug!(rdata_len, "SRV answer too short, skipping");
            reader.seek(rdata_end)?;
            return Ok(None);
        }

        let priority = reader.read_u16()?;
        let weight = reader.read_u16()?;
        let port = reader.read_u16()?;

        let target = match read_name(reader) {
            Ok(name) => name,
            Err(e) if e.is_truncation() => return Err(e),
            Err(e) => {
                debug!(error = %e, "Undecodable SRV target, skipping record");
                reader.seek(rdata_end)?;
                return Ok(None);
            }
        };
        reader.seek(rdata_end)?;

        if target.is_empty() {
            debug!(priority, port, "SRV answer with root target, skipping");
            return Ok(None);
        }

        Ok(Some(SrvTarget {
            host: Arc::from(target),
            port,
            priority,
            weight,
        }))
    }
}
