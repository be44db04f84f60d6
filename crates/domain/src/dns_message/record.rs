use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Ipv4,
    Ns,
    Cname,
    Ipv6,
    Unknown(u16),
}

impl ResourceType {
    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => ResourceType::Ipv4,
            2 => ResourceType::Ns,
            5 => ResourceType::Cname,
            28 => ResourceType::Ipv6,
            other => ResourceType::Unknown(other),
        }
    }

    pub fn to_u16(self) -> u16 {
        match self {
            ResourceType::Ipv4 => 1,
            ResourceType::Ns => 2,
            ResourceType::Cname => 5,
            ResourceType::Ipv6 => 28,
            ResourceType::Unknown(code) => code,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Ipv4 => "A",
            ResourceType::Ns => "NS",
            ResourceType::Cname => "CNAME",
            ResourceType::Ipv6 => "AAAA",
            ResourceType::Unknown(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceType::Unknown(code) => write!(f, "TYPE{}", code),
            _ => f.write_str(self.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceClass {
    In,
    Other(u16),
}

impl ResourceClass {
    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => ResourceClass::In,
            other => ResourceClass::Other(other),
        }
    }

    pub fn to_u16(self) -> u16 {
        match self {
            ResourceClass::In => 1,
            ResourceClass::Other(code) => code,
        }
    }
}

/// Interpretation of a record's RDATA for the types the resolver consults.
///
/// Names inside NS and CNAME RDATA may be compressed against the enclosing
/// message, so this is computed while the whole message is still at hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    Ipv4(Ipv4Addr),
    Ns(String),
    Cname(String),
    Ipv6(Ipv6Addr),
    Opaque,
}

impl RecordData {
    pub fn as_ipv4(&self) -> Option<Ipv4Addr> {
        match self {
            RecordData::Ipv4(ip) => Some(*ip),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResourceRecord {
    pub name: String,
    pub rtype: ResourceType,
    pub rclass: ResourceClass,
    pub ttl: u32,
    /// RDATA exactly as it appeared on the wire.
    pub rdata: Vec<u8>,
    pub data: RecordData,
}
