use super::bytes::{read_u8, slice};
use super::{MAX_LABEL_LEN, MAX_NAME_LEN};
use crate::errors::WireError;

const POINTER_TAG: u8 = 0xC0;
const POINTER_OFFSET_MASK: u16 = 0x3FFF;

/// Upper bound on pointers followed while decoding one name. Every pointer
/// must move strictly backwards, so this is never the limiting factor for a
/// message that fits in a datagram; it caps the loop regardless of input.
pub const MAX_POINTER_HOPS: usize = 128;

/// Encodes a dotted domain name as a sequence of length-prefixed labels
/// terminated by a zero byte.
///
/// A single trailing dot is accepted; `""` and `"."` encode the root name.
///
/// # Example
/// ```
/// # use rootwalk_domain::wire::encode_domain;
/// let encoded = encode_domain("www.example.com").unwrap();
/// assert_eq!(&encoded, b"\x03www\x07example\x03com\x00");
/// ```
pub fn encode_domain(domain: &str) -> Result<Vec<u8>, WireError> {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    if domain.is_empty() {
        return Ok(vec![0]);
    }

    let mut buf = Vec::with_capacity(domain.len() + 2);
    for label in domain.split('.') {
        if label.is_empty() {
            return Err(WireError::EmptyLabel);
        }
        if !label.is_ascii() {
            return Err(WireError::NonAsciiLabel);
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(WireError::LabelTooLong {
                label: label.to_string(),
            });
        }
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);

    if buf.len() > MAX_NAME_LEN {
        return Err(WireError::NameTooLong { length: buf.len() });
    }

    Ok(buf)
}

/// Decodes the domain name starting at `offset` of `message`.
///
/// Returns the dotted name (no trailing dot, `""` for the root) and the
/// number of bytes the name occupies at `offset`. When the name ends in a
/// compression pointer the count stops after the two pointer bytes; bytes
/// reached through the pointer are not included.
///
/// Pointers may only target an offset below the start of the label run that
/// contains them. A pointer back into the run being read is a loop, one past
/// it is a forward reference; both are rejected, as are targets outside the
/// message.
pub fn decode_label(message: &[u8], offset: usize) -> Result<(String, usize), WireError> {
    let mut name = String::new();
    let mut cursor = offset;
    // start of the label run currently being read
    let mut run_start = offset;
    let mut consumed = None;
    let mut wire_len = 0usize;
    let mut hops = 0usize;

    loop {
        let byte = read_u8(message, cursor)?;

        match byte & POINTER_TAG {
            POINTER_TAG => {
                let low = read_u8(message, cursor + 1).map_err(|_| WireError::Truncated {
                    offset: cursor,
                    needed: 2,
                })?;
                let target = usize::from(u16::from_be_bytes([byte, low]) & POINTER_OFFSET_MASK);

                if target >= message.len() {
                    return Err(WireError::PointerOutOfBounds {
                        offset: cursor,
                        target,
                    });
                }
                if target > cursor {
                    return Err(WireError::ForwardPointer {
                        offset: cursor,
                        target,
                    });
                }
                if target >= run_start {
                    return Err(WireError::PointerLoop { offset: cursor });
                }

                hops += 1;
                if hops > MAX_POINTER_HOPS {
                    return Err(WireError::PointerLoop { offset: cursor });
                }

                consumed.get_or_insert(cursor + 2 - offset);
                run_start = target;
                cursor = target;
            }
            0x00 => {
                let len = usize::from(byte);
                if len == 0 {
                    let consumed = *consumed.get_or_insert(cursor + 1 - offset);
                    return Ok((name, consumed));
                }

                wire_len += len + 1;
                if wire_len + 1 > MAX_NAME_LEN {
                    return Err(WireError::NameTooLong {
                        length: wire_len + 1,
                    });
                }

                let label = slice(message, cursor + 1, len)?;
                if !name.is_empty() {
                    name.push('.');
                }
                name.extend(label.iter().map(|&b| char::from(b)));
                cursor += len + 1;
            }
            _ => {
                return Err(WireError::UnsupportedLabelType {
                    offset: cursor,
                    byte,
                })
            }
        }
    }
}
