use async_trait::async_trait;
use rootwalk_domain::DomainError;
use std::net::Ipv4Addr;

/// Single-datagram exchange with one nameserver.
///
/// Implementations send `payload` to `server` and return the first reply
/// datagram, or `TransportTimeout` / `Transport` when none arrives. The port
/// number and receive size cap belong to the implementation.
#[async_trait]
pub trait NameserverTransport: Send + Sync {
    async fn send_and_receive(&self, server: Ipv4Addr, payload: &[u8])
        -> Result<Vec<u8>, DomainError>;
}
