#![allow(dead_code)]
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};

pub enum RData {
    A(Ipv4Addr),
    Ns(String),
    Cname(String),
    Aaaa(Ipv6Addr),
    Raw(u16, Vec<u8>),
}

impl RData {
    fn type_code(&self) -> u16 {
        match self {
            RData::A(_) => 1,
            RData::Ns(_) => 2,
            RData::Cname(_) => 5,
            RData::Aaaa(_) => 28,
            RData::Raw(code, _) => *code,
        }
    }
}

struct Record {
    name: String,
    ttl: u32,
    data: RData,
}

/// Writes raw DNS responses, compressing repeated name suffixes the way
/// real servers do.
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    questions: Vec<(String, u16)>,
    answers: Vec<Record>,
    authority: Vec<Record>,
    additional: Vec<Record>,
    compress: bool,
}

impl ResponseBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: 0x8000,
            questions: Vec::new(),
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
            compress: true,
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.flags = (self.flags & !0x000F) | u16::from(rcode & 0x0F);
        self
    }

    pub fn question(mut self, name: &str) -> Self {
        self.questions.push((name.to_string(), 1));
        self
    }

    pub fn answer(mut self, name: &str, data: RData) -> Self {
        self.answers.push(record(name, data));
        self
    }

    pub fn authority(mut self, name: &str, data: RData) -> Self {
        self.authority.push(record(name, data));
        self
    }

    pub fn additional(mut self, name: &str, data: RData) -> Self {
        self.additional.push(record(name, data));
        self
    }

    pub fn without_compression(mut self) -> Self {
        self.compress = false;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        for count in [
            self.questions.len(),
            self.answers.len(),
            self.authority.len(),
            self.additional.len(),
        ] {
            out.extend_from_slice(&(count as u16).to_be_bytes());
        }

        let mut names = HashMap::new();
        for (name, qtype) in &self.questions {
            self.write_name(&mut out, &mut names, name);
            out.extend_from_slice(&qtype.to_be_bytes());
            out.extend_from_slice(&1u16.to_be_bytes());
        }
        for record in self
            .answers
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
        {
            self.write_record(&mut out, &mut names, record);
        }
        out
    }

    fn write_record(&self, out: &mut Vec<u8>, names: &mut HashMap<String, usize>, record: &Record) {
        self.write_name(out, names, &record.name);
        out.extend_from_slice(&record.data.type_code().to_be_bytes());
        out.extend_from_slice(&1u16.to_be_bytes());
        out.extend_from_slice(&record.ttl.to_be_bytes());

        let length_at = out.len();
        out.extend_from_slice(&[0, 0]);
        match &record.data {
            RData::A(ip) => out.extend_from_slice(&ip.octets()),
            RData::Aaaa(ip) => out.extend_from_slice(&ip.octets()),
            RData::Ns(target) | RData::Cname(target) => self.write_name(out, names, target),
            RData::Raw(_, bytes) => out.extend_from_slice(bytes),
        }
        let rdlength = (out.len() - length_at - 2) as u16;
        out[length_at..length_at + 2].copy_from_slice(&rdlength.to_be_bytes());
    }

    fn write_name(&self, out: &mut Vec<u8>, names: &mut HashMap<String, usize>, name: &str) {
        let labels: Vec<&str> = name.split('.').filter(|l| !l.is_empty()).collect();

        for i in 0..labels.len() {
            let suffix = labels[i..].join(".").to_ascii_lowercase();
            if self.compress {
                if let Some(&offset) = names.get(&suffix) {
                    out.extend_from_slice(&(0xC000 | offset as u16).to_be_bytes());
                    return;
                }
                if out.len() < 0x4000 {
                    names.insert(suffix, out.len());
                }
            }
            out.push(labels[i].len() as u8);
            out.extend_from_slice(labels[i].as_bytes());
        }
        out.push(0);
    }
}

fn record(name: &str, data: RData) -> Record {
    Record {
        name: name.to_string(),
        ttl: 3600,
        data,
    }
}

/// A referral from a TLD server: NS records in authority and IPv4 glue for
/// each nameserver in additional.
pub fn referral(id: u16, qname: &str, zone: &str, glue: &[(&str, Ipv4Addr)]) -> ResponseBuilder {
    let mut builder = ResponseBuilder::new(id).question(qname);
    for (ns, _) in glue {
        builder = builder.authority(zone, RData::Ns(ns.to_string()));
    }
    for (ns, ip) in glue {
        builder = builder.additional(ns, RData::A(*ip));
    }
    builder
}
