use super::byte_reader::ByteReader;
use super::{WireError, MAX_NAME_LEN};

const POINTER_MASK: u8 = 0xC0;

/// Steps over a name without decoding it: labels up to the root byte, or up
/// to and including a compression pointer.
pub(crate) fn skip_name(reader: &mut ByteReader<'_>) -> Result<(), WireError> {
    loop {
        let at = reader.position();
        let len = reader.read_u8()?;
        match len & POINTER_MASK {
            0x00 if len == 0 => return Ok(()),
            0x00 => reader.skip(usize::from(len))?,
            POINTER_MASK => return reader.skip(1),
            kind => return Err(WireError::UnsupportedLabel { at, kind }),
        }
    }
}

/// Decodes a possibly compressed name into dotted form (no trailing dot;
/// the root name decodes to `""`).
///
/// Each pointer must target an offset before the label run it ends, which
/// rules out loops. Afterwards the reader sits right after the first pointer
/// taken, or after the terminating root byte when there was none.
pub(crate) fn read_name(reader: &mut ByteReader<'_>) -> Result<String, WireError> {
    let data = reader.data();
    let mut cursor = reader.position();
    let mut run_start = cursor;
    let mut resume_at: Option<usize> = None;
    let mut labels: Vec<String> = Vec::new();
    let mut wire_len = 1usize;

    loop {
        let len = *data
            .get(cursor)
            .ok_or(WireError::Truncated { offset: cursor })?;

        match len & POINTER_MASK {
            0x00 if len == 0 => {
                cursor += 1;
                break;
            }
            0x00 => {
                let start = cursor + 1;
                let end = start + usize::from(len);
                let label = data
                    .get(start..end)
                    .ok_or(WireError::Truncated { offset: start })?;

                wire_len += label.len() + 1;
                if wire_len > MAX_NAME_LEN {
                    return Err(WireError::NameTooLong);
                }
                labels.push(String::from_utf8_lossy(label).into_owned());
                cursor = end;
            }
            POINTER_MASK => {
                let low = *data
                    .get(cursor + 1)
                    .ok_or(WireError::Truncated { offset: cursor + 1 })?;
                let target = (usize::from(len & !POINTER_MASK) << 8) | usize::from(low);

                if target >= run_start {
                    return Err(WireError::BadPointer { at: cursor, target });
                }
                resume_at.get_or_insert(cursor + 2);
                cursor = target;
                run_start = target;
            }
            kind => return Err(WireError::UnsupportedLabel { at: cursor, kind }),
        }
    }

    reader.seek(resume_at.unwrap_or(cursor))?;
    Ok(labels.join("."))
}
