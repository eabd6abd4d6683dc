use async_trait::async_trait;
use ferrous_stub_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

/// Opens datagram associations to a single server.
#[async_trait]
pub trait DatagramTransport: Send + Sync {
    async fn open(&self, server: SocketAddr) -> Result<Box<dyn DatagramChannel>, DomainError>;
}

/// An open datagram association.
///
/// `close` releases the underlying socket on every normal exit. When the
/// calling future is cancelled (dropped by an outer timeout or `select!`)
/// `close` never runs, so implementations must also release the socket in
/// `Drop`.
#[async_trait]
pub trait DatagramChannel: Send {
    async fn send(&mut self, bytes: &[u8]) -> Result<(), DomainError>;

    /// Waits up to `timeout` for one datagram of at most `max_bytes`.
    /// An elapsed deadline is reported as [`DomainError::QueryTimeout`].
    async fn receive(
        &mut self,
        max_bytes: usize,
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError>;

    async fn close(&mut self);
}
