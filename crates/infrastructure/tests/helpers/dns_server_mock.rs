#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

pub const ANSWER_ADDRESS: [u8; 4] = [93, 184, 216, 34];

#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// Answer every query with one A record.
    Answer,
    /// Receive queries and never reply.
    Silent,
    /// Reply with `size` bytes: an answer padded with trailing zeros.
    Oversized(usize),
    /// Send the answer from a second socket on another port.
    WrongSource,
}

/// Loopback UDP nameserver on an ephemeral port.
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let local_addr = socket.local_addr()?;
        let stray = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let response = Self::build_mock_response(&buf[..len]);

                        match behavior {
                            MockBehavior::Answer => {
                                let _ = socket.send_to(&response, peer).await;
                            }
                            MockBehavior::Silent => {}
                            MockBehavior::Oversized(size) => {
                                let mut padded = response;
                                padded.resize(size, 0);
                                let _ = socket.send_to(&padded, peer).await;
                            }
                            MockBehavior::WrongSource => {
                                let _ = stray.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr: local_addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Echoes the query id and question and adds one A record for it.
    pub fn build_mock_response(query: &[u8]) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let mut response = Vec::with_capacity(512);
        response.extend_from_slice(&query[0..2]);
        response.extend_from_slice(&[0x84, 0x00]);
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);
        response.extend_from_slice(&query[12..]);
        response.extend_from_slice(&[
            0xc0, 0x0c, // name: pointer to the question
            0x00, 0x01, // A
            0x00, 0x01, // IN
            0x00, 0x00, 0x00, 0x3c, // ttl
            0x00, 0x04,
        ]);
        response.extend_from_slice(&ANSWER_ADDRESS);
        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
