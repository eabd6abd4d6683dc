//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Standard DNS transport. Messages are sent as-is (no framing).
//! One association is one ephemeral socket; datagrams from any source other
//! than the server are discarded.

use async_trait::async_trait;
use ferrous_stub_application::ports::{DatagramChannel, DatagramTransport};
use ferrous_stub_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// DNS over UDP transport
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpTransport;

impl UdpTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DatagramTransport for UdpTransport {
    async fn open(&self, server: SocketAddr) -> Result<Box<dyn DatagramChannel>, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if server.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        debug!(server = %server, local = ?socket.local_addr().ok(), "UDP association opened");

        Ok(Box::new(UdpChannel {
            server,
            socket: Some(socket),
        }))
    }
}

pub struct UdpChannel {
    server: SocketAddr,
    socket: Option<UdpSocket>,
}

impl UdpChannel {
    fn socket(&self) -> Result<&UdpSocket, DomainError> {
        self.socket.as_ref().ok_or_else(|| {
            DomainError::IoError(format!("UDP association to {} is closed", self.server))
        })
    }
}

#[async_trait]
impl DatagramChannel for UdpChannel {
    async fn send(&mut self, bytes: &[u8]) -> Result<(), DomainError> {
        let server = self.server;
        let bytes_sent = self.socket()?.send_to(bytes, server).await.map_err(|e| {
            DomainError::IoError(format!("Failed to send UDP query to {}: {}", server, e))
        })?;

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");
        Ok(())
    }

    async fn receive(
        &mut self,
        max_bytes: usize,
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        let server = self.server;
        let socket = self.socket()?;
        let mut recv_buf = vec![0u8; max_bytes];

        let received = tokio::time::timeout(timeout, async {
            loop {
                let (len, from_addr) = socket.recv_from(&mut recv_buf).await?;
                if from_addr == server {
                    return Ok::<usize, std::io::Error>(len);
                }
                warn!(
                    expected = %server,
                    received_from = %from_addr,
                    "UDP response from unexpected source"
                );
            }
        })
        .await
        .map_err(|_| DomainError::QueryTimeout)?
        .map_err(|e| {
            DomainError::IoError(format!(
                "Failed to receive UDP response from {}: {}",
                server, e
            ))
        })?;

        recv_buf.truncate(received);
        debug!(server = %server, bytes_received = received, "UDP response received");
        Ok(recv_buf)
    }

    async fn close(&mut self) {
        if self.socket.take().is_some() {
            debug!(server = %self.server, "UDP association closed");
        }
    }
}
