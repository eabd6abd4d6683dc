use async_trait::async_trait;
use ferrous_stub_domain::{DomainError, StreamOptions};
use std::net::IpAddr;

/// Opens a stream connection to one concrete address.
#[async_trait]
pub trait StreamConnector: Send + Sync {
    type Stream: Send;

    async fn connect(
        &self,
        address: IpAddr,
        port: u16,
        options: &StreamOptions,
    ) -> Result<Self::Stream, DomainError>;
}
