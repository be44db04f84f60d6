pub mod header;
pub mod question;
pub mod record;

pub use header::{DnsHeader, HeaderFlags, MessageType, Opcode, ResponseCode};
pub use question::DnsQuestion;
pub use record::{DnsResourceRecord, RecordData, ResourceClass, ResourceType};

/// A fully decoded DNS message.
///
/// Messages only exist in decoded form: [`crate::wire::decode_message`] either
/// returns every section or fails, so there is no partially populated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsMessage {
    pub header: DnsHeader,
    pub questions: Vec<DnsQuestion>,
    pub answers: Vec<DnsResourceRecord>,
    pub nameservers: Vec<DnsResourceRecord>,
    pub additional: Vec<DnsResourceRecord>,
}

impl DnsMessage {
    pub fn is_response(&self) -> bool {
        self.header.message_type == MessageType::Response
    }

    /// First IPv4 address in the answer section, in wire order.
    pub fn first_ipv4_answer(&self) -> Option<std::net::Ipv4Addr> {
        self.answers.iter().find_map(|record| record.data.as_ipv4())
    }

    /// Glue records: every IPv4 record in the additional section.
    pub fn glue(&self) -> impl Iterator<Item = (&str, std::net::Ipv4Addr)> {
        self.additional
            .iter()
            .filter_map(|record| record.data.as_ipv4().map(|ip| (record.name.as_str(), ip)))
    }

    /// Nameserver names carried by NS records in the authority section.
    pub fn nameserver_names(&self) -> impl Iterator<Item = &str> {
        self.nameservers
            .iter()
            .filter_map(|record| match &record.data {
                RecordData::Ns(name) => Some(name.as_str()),
                _ => None,
            })
    }
}
