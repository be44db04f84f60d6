use std::fmt;

const QR_BIT: u16 = 1 << 15;
const OPCODE_SHIFT: u16 = 11;
const OPCODE_MASK: u16 = 0x0F;
const AA_BIT: u16 = 1 << 10;
const TC_BIT: u16 = 1 << 9;
const RD_BIT: u16 = 1 << 8;
const RA_BIT: u16 = 1 << 7;
const RCODE_MASK: u16 = 0x000F;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    Query,
    Response,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Standard,
    Inverse,
    Status,
    Other(u8),
}

impl Opcode {
    pub fn from_u8(code: u8) -> Self {
        match code {
            0 => Opcode::Standard,
            1 => Opcode::Inverse,
            2 => Opcode::Status,
            other => Opcode::Other(other),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            Opcode::Standard => 0,
            Opcode::Inverse => 1,
            Opcode::Status => 2,
            Opcode::Other(code) => code,
        }
    }
}

/// RCODE of a response (RFC 1035 §4.1.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Other(u8),
}

impl ResponseCode {
    pub fn from_u8(code: u8) -> Self {
        match code {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormatError,
            2 => ResponseCode::ServerFailure,
            3 => ResponseCode::NameError,
            4 => ResponseCode::NotImplemented,
            5 => ResponseCode::Refused,
            other => ResponseCode::Other(other),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormatError => 1,
            ResponseCode::ServerFailure => 2,
            ResponseCode::NameError => 3,
            ResponseCode::NotImplemented => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Other(code) => code,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormatError => "FORMERR",
            ResponseCode::ServerFailure => "SERVFAIL",
            ResponseCode::NameError => "NXDOMAIN",
            ResponseCode::NotImplemented => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "RESERVED",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Other(code) => write!(f, "RCODE{}", code),
            _ => f.write_str(self.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderFlags {
    pub authoritative_answer: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsHeader {
    pub id: u16,
    pub message_type: MessageType,
    pub opcode: Opcode,
    pub flags: HeaderFlags,
    pub response_code: ResponseCode,
    pub question_count: u16,
    pub answer_count: u16,
    pub nameserver_count: u16,
    pub additional_count: u16,
}

impl DnsHeader {
    /// Header of an outgoing standard query with recursion desired and a
    /// single question.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            message_type: MessageType::Query,
            opcode: Opcode::Standard,
            flags: HeaderFlags {
                recursion_desired: true,
                ..HeaderFlags::default()
            },
            response_code: ResponseCode::NoError,
            question_count: 1,
            answer_count: 0,
            nameserver_count: 0,
            additional_count: 0,
        }
    }

    /// Splits the 16-bit flag word into its fields.
    ///
    /// Bits 6..4 (the reserved Z field) are ignored.
    pub fn from_parts(id: u16, flag_word: u16, counts: [u16; 4]) -> Self {
        let message_type = if flag_word & QR_BIT != 0 {
            MessageType::Response
        } else {
            MessageType::Query
        };

        Self {
            id,
            message_type,
            opcode: Opcode::from_u8(((flag_word >> OPCODE_SHIFT) & OPCODE_MASK) as u8),
            flags: HeaderFlags {
                authoritative_answer: flag_word & AA_BIT != 0,
                truncated: flag_word & TC_BIT != 0,
                recursion_desired: flag_word & RD_BIT != 0,
                recursion_available: flag_word & RA_BIT != 0,
            },
            response_code: ResponseCode::from_u8((flag_word & RCODE_MASK) as u8),
            question_count: counts[0],
            answer_count: counts[1],
            nameserver_count: counts[2],
            additional_count: counts[3],
        }
    }

    pub fn flag_word(&self) -> u16 {
        let mut word = 0u16;
        if self.message_type == MessageType::Response {
            word |= QR_BIT;
        }
        word |= (u16::from(self.opcode.to_u8()) & OPCODE_MASK) << OPCODE_SHIFT;
        if self.flags.authoritative_answer {
            word |= AA_BIT;
        }
        if self.flags.truncated {
            word |= TC_BIT;
        }
        if self.flags.recursion_desired {
            word |= RD_BIT;
        }
        if self.flags.recursion_available {
            word |= RA_BIT;
        }
        word | (u16::from(self.response_code.to_u8()) & RCODE_MASK)
    }
}
