//! UDP transport for iterative queries (RFC 1035 §4.2.1)
//!
//! One ephemeral socket per exchange. Replies larger than the receive buffer
//! are cut at the buffer size and there is no TCP fallback, so a truncated
//! referral may decode with fewer records than the server sent.

use async_trait::async_trait;
use rootwalk_application::ports::NameserverTransport;
use rootwalk_domain::{DomainError, ResolverConfig};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

pub struct UdpTransport {
    port: u16,
    timeout: Duration,
    receive_buffer_size: usize,
}

impl UdpTransport {
    pub fn new(port: u16, timeout: Duration, receive_buffer_size: usize) -> Self {
        Self {
            port,
            timeout,
            receive_buffer_size,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(
            config.port,
            config.query_timeout(),
            config.receive_buffer_size,
        )
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn exchange(
        &self,
        socket: &UdpSocket,
        target: SocketAddr,
        payload: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        let bytes_sent = socket
            .send_to(payload, target)
            .await
            .map_err(|e| transport_error(target, format!("send failed: {}", e)))?;

        debug!(server = %target, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; self.receive_buffer_size];
        loop {
            let (bytes_received, from_addr) = socket
                .recv_from(&mut recv_buf)
                .await
                .map_err(|e| transport_error(target, format!("receive failed: {}", e)))?;

            if from_addr != target {
                warn!(
                    expected = %target,
                    received_from = %from_addr,
                    "Ignoring UDP datagram from unexpected source"
                );
                continue;
            }

            recv_buf.truncate(bytes_received);
            debug!(
                server = %target,
                bytes_received = bytes_received,
                "UDP response received"
            );
            return Ok(recv_buf);
        }
    }
}

#[async_trait]
impl NameserverTransport for UdpTransport {
    async fn send_and_receive(
        &self,
        server: Ipv4Addr,
        payload: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        let target = SocketAddr::from((server, self.port));

        let socket = UdpSocket::bind(SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)))
            .await
            .map_err(|e| transport_error(target, format!("bind failed: {}", e)))?;

        tokio::time::timeout(self.timeout, self.exchange(&socket, target, payload))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: target.to_string(),
            })?
    }
}

fn transport_error(target: SocketAddr, reason: String) -> DomainError {
    DomainError::Transport {
        server: target.to_string(),
        reason,
    }
}
