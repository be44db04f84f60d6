#![allow(dead_code)]

use async_trait::async_trait;
use rootwalk_application::ports::NameserverTransport;
use rootwalk_domain::wire::decode_message;
use rootwalk_domain::DomainError;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tokio::sync::RwLock;

/// What a scripted server does with a query.
#[derive(Clone)]
pub enum Scripted {
    /// Reply with these bytes, the id rewritten to match the query.
    Respond(Vec<u8>),
    /// Reply with these bytes and a different id.
    WrongId(Vec<u8>),
    /// Reply with these bytes untouched.
    Raw(Vec<u8>),
    Timeout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedQuery {
    pub server: Ipv4Addr,
    pub name: String,
    pub id: u16,
}

/// In-memory nameserver network. Replies are looked up by (server, query
/// name) first, then by server alone; unknown servers time out.
#[derive(Clone, Default)]
pub struct MockTransport {
    by_name: Arc<RwLock<HashMap<(Ipv4Addr, String), Scripted>>>,
    by_server: Arc<RwLock<HashMap<Ipv4Addr, Scripted>>>,
    queries: Arc<RwLock<Vec<RecordedQuery>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn on(&self, server: Ipv4Addr, name: &str, reply: Scripted) {
        self.by_name
            .write()
            .await
            .insert((server, name.to_ascii_lowercase()), reply);
    }

    pub async fn on_any(&self, server: Ipv4Addr, reply: Scripted) {
        self.by_server.write().await.insert(server, reply);
    }

    pub async fn queries(&self) -> Vec<RecordedQuery> {
        self.queries.read().await.clone()
    }

    pub async fn servers_queried(&self) -> Vec<Ipv4Addr> {
        self.queries.read().await.iter().map(|q| q.server).collect()
    }

    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }
}

#[async_trait]
impl NameserverTransport for MockTransport {
    async fn send_and_receive(
        &self,
        server: Ipv4Addr,
        payload: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        let query = decode_message(payload).expect("resolver sent an undecodable query");
        let name = query.questions[0].name.to_ascii_lowercase();
        let id = query.header.id;

        self.queries.write().await.push(RecordedQuery {
            server,
            name: name.clone(),
            id,
        });

        let scripted = match self.by_name.read().await.get(&(server, name)) {
            Some(reply) => Some(reply.clone()),
            None => self.by_server.read().await.get(&server).cloned(),
        };

        match scripted {
            Some(Scripted::Respond(bytes)) => Ok(with_id(bytes, id)),
            Some(Scripted::WrongId(bytes)) => Ok(with_id(bytes, id.wrapping_add(1))),
            Some(Scripted::Raw(bytes)) => Ok(bytes),
            Some(Scripted::Timeout) | None => Err(DomainError::TransportTimeout {
                server: server.to_string(),
            }),
        }
    }
}

fn with_id(mut bytes: Vec<u8>, id: u16) -> Vec<u8> {
    if bytes.len() >= 2 {
        bytes[..2].copy_from_slice(&id.to_be_bytes());
    }
    bytes
}
