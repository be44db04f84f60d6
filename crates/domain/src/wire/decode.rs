use std::net::{Ipv4Addr, Ipv6Addr};

use super::bytes::{read_u16, read_u32, slice};
use super::name::decode_label;
use super::HEADER_LEN;
use crate::dns_message::{
    DnsHeader, DnsMessage, DnsQuestion, DnsResourceRecord, RecordData, ResourceClass,
    ResourceType,
};
use crate::errors::WireError;

// type + class + ttl + rdlength
const RR_FIXED_LEN: usize = 10;
// qtype + qclass
const QUESTION_FIXED_LEN: usize = 4;

pub fn decode_header(bytes: &[u8]) -> Result<DnsHeader, WireError> {
    let header = slice(bytes, 0, HEADER_LEN)?;
    let field = |i: usize| u16::from_be_bytes([header[i * 2], header[i * 2 + 1]]);

    Ok(DnsHeader::from_parts(
        field(0),
        field(1),
        [field(2), field(3), field(4), field(5)],
    ))
}

/// Decodes `count` questions starting at `offset`.
///
/// Returns the questions and the offset just past the last one.
pub fn decode_question_section(
    message: &[u8],
    count: u16,
    offset: usize,
) -> Result<(Vec<DnsQuestion>, usize), WireError> {
    let mut questions = Vec::with_capacity(section_capacity(message, count, offset));
    let mut cursor = offset;

    for _ in 0..count {
        let (name, consumed) = decode_label(message, cursor)?;
        cursor += consumed;

        let qtype = read_u16(message, cursor)?;
        let qclass = read_u16(message, cursor + 2)?;
        cursor += QUESTION_FIXED_LEN;

        questions.push(DnsQuestion::new(name, qtype, qclass));
    }

    Ok((questions, cursor))
}

/// Decodes `count` resource records starting at `offset`.
///
/// RDATA is kept verbatim in [`DnsResourceRecord::rdata`]. For class IN the
/// types the resolver acts on are also interpreted into
/// [`DnsResourceRecord::data`]; NS and CNAME targets are decoded here because
/// they may be compressed against any earlier part of the message.
pub fn decode_resource_section(
    message: &[u8],
    count: u16,
    offset: usize,
) -> Result<(Vec<DnsResourceRecord>, usize), WireError> {
    let mut records = Vec::with_capacity(section_capacity(message, count, offset));
    let mut cursor = offset;

    for _ in 0..count {
        let (name, consumed) = decode_label(message, cursor)?;
        cursor += consumed;

        let rtype = ResourceType::from_u16(read_u16(message, cursor)?);
        let rclass = ResourceClass::from_u16(read_u16(message, cursor + 2)?);
        let ttl = read_u32(message, cursor + 4)?;
        let rdlength = usize::from(read_u16(message, cursor + 8)?);
        cursor += RR_FIXED_LEN;

        let rdata = slice(message, cursor, rdlength)?;
        let data = interpret_rdata(message, rtype, rclass, cursor, rdata)?;
        cursor += rdlength;

        records.push(DnsResourceRecord {
            name,
            rtype,
            rclass,
            ttl,
            rdata: rdata.to_vec(),
            data,
        });
    }

    Ok((records, cursor))
}

/// Decodes a complete message. Sections are read back to back in header
/// order; any byte past the additional section is ignored.
pub fn decode_message(bytes: &[u8]) -> Result<DnsMessage, WireError> {
    let header = decode_header(bytes)?;

    let (questions, offset) = decode_question_section(bytes, header.question_count, HEADER_LEN)?;
    let (answers, offset) = decode_resource_section(bytes, header.answer_count, offset)?;
    let (nameservers, offset) = decode_resource_section(bytes, header.nameserver_count, offset)?;
    let (additional, _) = decode_resource_section(bytes, header.additional_count, offset)?;

    Ok(DnsMessage {
        header,
        questions,
        answers,
        nameservers,
        additional,
    })
}

fn interpret_rdata(
    message: &[u8],
    rtype: ResourceType,
    rclass: ResourceClass,
    rdata_offset: usize,
    rdata: &[u8],
) -> Result<RecordData, WireError> {
    if rclass != ResourceClass::In {
        return Ok(RecordData::Opaque);
    }

    match rtype {
        ResourceType::Ipv4 => {
            let octets: [u8; 4] = rdata.try_into().map_err(|_| invalid_length(rtype, 4, rdata))?;
            Ok(RecordData::Ipv4(Ipv4Addr::from(octets)))
        }
        ResourceType::Ipv6 => {
            let octets: [u8; 16] = rdata
                .try_into()
                .map_err(|_| invalid_length(rtype, 16, rdata))?;
            Ok(RecordData::Ipv6(Ipv6Addr::from(octets)))
        }
        ResourceType::Ns | ResourceType::Cname => {
            let (target, consumed) = decode_label(message, rdata_offset)?;
            if consumed != rdata.len() {
                return Err(WireError::InvalidRecordData {
                    rtype,
                    reason: format!(
                        "name occupies {} bytes but rdlength is {}",
                        consumed,
                        rdata.len()
                    ),
                });
            }
            if rtype == ResourceType::Ns {
                Ok(RecordData::Ns(target))
            } else {
                Ok(RecordData::Cname(target))
            }
        }
        ResourceType::Unknown(_) => Ok(RecordData::Opaque),
    }
}

fn invalid_length(rtype: ResourceType, expected: usize, rdata: &[u8]) -> WireError {
    WireError::InvalidRecordData {
        rtype,
        reason: format!("expected {} bytes, got {}", expected, rdata.len()),
    }
}

// counts come from the wire; never reserve more entries than bytes remain
fn section_capacity(message: &[u8], count: u16, offset: usize) -> usize {
    usize::from(count).min(message.len().saturating_sub(offset))
}
