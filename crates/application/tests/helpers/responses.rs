#![allow(dead_code)]

use std::net::{Ipv4Addr, Ipv6Addr};

/// Minimal response writer. Names are written uncompressed; the id is
/// filled in by the mock transport.
pub struct ResponseBuilder {
    rcode: u8,
    question: Option<String>,
    answers: Vec<Vec<u8>>,
    authority: Vec<Vec<u8>>,
    additional: Vec<Vec<u8>>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            rcode: 0,
            question: None,
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    pub fn for_question(name: &str) -> Self {
        Self {
            question: Some(name.to_string()),
            ..Self::new()
        }
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn a(mut self, name: &str, ip: Ipv4Addr) -> Self {
        self.answers.push(rr(name, 1, ip.octets().to_vec()));
        self
    }

    pub fn aaaa(mut self, name: &str, ip: Ipv6Addr) -> Self {
        self.answers.push(rr(name, 28, ip.octets().to_vec()));
        self
    }

    pub fn cname(mut self, name: &str, target: &str) -> Self {
        self.answers.push(rr(name, 5, wire_name(target)));
        self
    }

    pub fn ns(mut self, zone: &str, nameserver: &str) -> Self {
        self.authority.push(rr(zone, 2, wire_name(nameserver)));
        self
    }

    pub fn glue(mut self, nameserver: &str, ip: Ipv4Addr) -> Self {
        self.additional.push(rr(nameserver, 1, ip.octets().to_vec()));
        self
    }

    pub fn glue_v6(mut self, nameserver: &str, ip: Ipv6Addr) -> Self {
        self.additional.push(rr(nameserver, 28, ip.octets().to_vec()));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let flags: u16 = 0x8000 | u16::from(self.rcode & 0x0F);
        let mut out = Vec::new();
        out.extend_from_slice(&0u16.to_be_bytes());
        out.extend_from_slice(&flags.to_be_bytes());
        for count in [
            usize::from(self.question.is_some()),
            self.answers.len(),
            self.authority.len(),
            self.additional.len(),
        ] {
            out.extend_from_slice(&(count as u16).to_be_bytes());
        }
        if let Some(name) = &self.question {
            out.extend(wire_name(name));
            out.extend_from_slice(&[0, 1, 0, 1]);
        }
        for record in self
            .answers
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
        {
            out.extend_from_slice(record);
        }
        out
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn wire_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

fn rr(name: &str, rtype: u16, rdata: Vec<u8>) -> Vec<u8> {
    let mut out = wire_name(name);
    out.extend_from_slice(&rtype.to_be_bytes());
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&300u32.to_be_bytes());
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend(rdata);
    out
}
