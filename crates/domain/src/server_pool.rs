use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

/// A nameserver candidate: its host name and IPv4 address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct NameServer {
    pub name: String,
    pub address: Ipv4Addr,
}

impl NameServer {
    pub fn new(name: impl Into<String>, address: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

/// Candidate nameservers for one resolution step.
///
/// Candidates are drawn uniformly at random and removed as they are drawn,
/// so a pool is tried at most once per server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerPool {
    servers: Vec<NameServer>,
}

impl ServerPool {
    pub fn new(servers: Vec<NameServer>) -> Self {
        Self { servers }
    }

    pub fn single(server: NameServer) -> Self {
        Self {
            servers: vec![server],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    /// Removes and returns a uniformly chosen candidate.
    pub fn take_random(&mut self, rng: &mut fastrand::Rng) -> Option<NameServer> {
        if self.servers.is_empty() {
            return None;
        }
        let index = rng.usize(..self.servers.len());
        Some(self.servers.swap_remove(index))
    }
}

impl From<Vec<NameServer>> for ServerPool {
    fn from(servers: Vec<NameServer>) -> Self {
        Self::new(servers)
    }
}

impl FromIterator<NameServer> for ServerPool {
    fn from_iter<I: IntoIterator<Item = NameServer>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

const ROOT_SERVERS: [(&str, [u8; 4]); 13] = [
    ("a.root-servers.net", [198, 41, 0, 4]),
    ("b.root-servers.net", [199, 9, 14, 201]),
    ("c.root-servers.net", [192, 33, 4, 12]),
    ("d.root-servers.net", [199, 7, 91, 13]),
    ("e.root-servers.net", [192, 203, 230, 10]),
    ("f.root-servers.net", [192, 5, 5, 241]),
    ("g.root-servers.net", [192, 112, 36, 4]),
    ("h.root-servers.net", [198, 97, 190, 53]),
    ("i.root-servers.net", [192, 36, 148, 17]),
    ("j.root-servers.net", [192, 58, 128, 30]),
    ("k.root-servers.net", [193, 0, 14, 129]),
    ("l.root-servers.net", [199, 7, 83, 42]),
    ("m.root-servers.net", [202, 12, 27, 33]),
];

/// The 13 well-known root servers, A through M.
pub fn root_servers() -> Vec<NameServer> {
    ROOT_SERVERS
        .iter()
        .map(|(name, octets)| NameServer::new(*name, Ipv4Addr::from(*octets)))
        .collect()
}
