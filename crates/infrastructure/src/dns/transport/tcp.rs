use async_trait::async_trait;
use ferrous_stub_application::ports::StreamConnector;
use ferrous_stub_domain::{DomainError, StreamOptions};
use std::io::ErrorKind;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpStream;
use tracing::debug;

/// Plain TCP stream connector.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

impl TcpConnector {
    pub fn new() -> Self {
        Self
    }
}

pub(crate) async fn connect_tcp(
    server_addr: SocketAddr,
    timeout: Duration,
) -> Result<TcpStream, DomainError> {
    let stream = tokio::time::timeout(timeout, TcpStream::connect(server_addr))
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: server_addr.to_string(),
        })?
        .map_err(|e| match e.kind() {
            ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused {
                server: server_addr.to_string(),
            },
            _ => DomainError::IoError(format!(
                "Failed to connect to {}: {}",
                server_addr, e
            )),
        })?;

    stream.set_nodelay(true).map_err(|e| {
        DomainError::IoError(format!(
            "Failed to set TCP_NODELAY on {}: {}",
            server_addr, e
        ))
    })?;

    debug!(server = %server_addr, "TCP connection established");
    Ok(stream)
}

#[async_trait]
impl StreamConnector for TcpConnector {
    type Stream = TcpStream;

    async fn connect(
        &self,
        address: IpAddr,
        port: u16,
        options: &StreamOptions,
    ) -> Result<TcpStream, DomainError> {
        connect_tcp(SocketAddr::new(address, port), options.timeout).await
    }
}
