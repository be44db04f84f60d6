use super::name::encode_domain;
use super::{HEADER_LEN, QCLASS_IN, QTYPE_A};
use crate::dns_message::{DnsHeader, DnsQuestion};
use crate::errors::WireError;

pub fn encode_header(header: &DnsHeader) -> [u8; HEADER_LEN] {
    let mut buf = [0u8; HEADER_LEN];
    buf[0..2].copy_from_slice(&header.id.to_be_bytes());
    buf[2..4].copy_from_slice(&header.flag_word().to_be_bytes());
    buf[4..6].copy_from_slice(&header.question_count.to_be_bytes());
    buf[6..8].copy_from_slice(&header.answer_count.to_be_bytes());
    buf[8..10].copy_from_slice(&header.nameserver_count.to_be_bytes());
    buf[10..12].copy_from_slice(&header.additional_count.to_be_bytes());
    buf
}

pub fn encode_question(question: &DnsQuestion) -> Result<Vec<u8>, WireError> {
    let mut buf = encode_domain(&question.name)?;
    buf.extend_from_slice(&question.qtype.to_be_bytes());
    buf.extend_from_slice(&question.qclass.to_be_bytes());
    Ok(buf)
}

/// Builds a standard query for the IPv4 address of `domain`.
///
/// The header carries `id`, flags `0x0100` (query, standard opcode,
/// recursion desired) and a question count of one; the single question has
/// QTYPE 1 and QCLASS 1.
///
/// # Example
/// ```
/// # use rootwalk_domain::wire::encode_query;
/// let bytes = encode_query("abc.com", 0xBEEF).unwrap();
/// assert_eq!(&bytes[..4], &[0xBE, 0xEF, 0x01, 0x00]);
/// assert_eq!(&bytes[12..], b"\x03abc\x03com\x00\x00\x01\x00\x01");
/// ```
pub fn encode_query(domain: &str, id: u16) -> Result<Vec<u8>, WireError> {
    let question = encode_question(&DnsQuestion::new(domain, QTYPE_A, QCLASS_IN))?;

    let mut buf = Vec::with_capacity(HEADER_LEN + question.len());
    buf.extend_from_slice(&encode_header(&DnsHeader::query(id)));
    buf.extend_from_slice(&question);
    Ok(buf)
}

/// Same as [`encode_query`] with the id drawn from `rng`.
///
/// Returns the id alongside the bytes for response matching.
pub fn encode_query_with_rng(
    domain: &str,
    rng: &mut fastrand::Rng,
) -> Result<(u16, Vec<u8>), WireError> {
    let id = rng.u16(..);
    Ok((id, encode_query(domain, id)?))
}
