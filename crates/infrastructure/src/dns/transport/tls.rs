//! TLS stream connector.
//!
//! The certificate is checked against the verification name when one is
//! given, otherwise against the IP address itself.

use super::tcp::connect_tcp;
use async_trait::async_trait;
use ferrous_stub_application::ports::StreamConnector;
use ferrous_stub_domain::{DomainError, StreamOptions};
use rustls::pki_types::ServerName;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, LazyLock};
use tokio::net::TcpStream;
use tokio_rustls::client::TlsStream;
use tracing::debug;

/// Shared TLS config, built once from the webpki root set.
static SHARED_TLS_CONFIG: LazyLock<Arc<rustls::ClientConfig>> = LazyLock::new(|| {
    let mut root_store = rustls::RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    Arc::new(config)
});

#[derive(Clone)]
pub struct TlsConnector {
    config: Arc<rustls::ClientConfig>,
}

impl TlsConnector {
    pub fn new() -> Self {
        Self {
            config: SHARED_TLS_CONFIG.clone(),
        }
    }
}

impl Default for TlsConnector {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn server_name(
    address: IpAddr,
    verification_name: Option<&str>,
) -> Result<ServerName<'static>, DomainError> {
    match verification_name {
        Some(name) => ServerName::try_from(name.to_string()).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid TLS hostname '{}': {}", name, e))
        }),
        None => Ok(ServerName::from(address)),
    }
}

#[async_trait]
impl StreamConnector for TlsConnector {
    type Stream = TlsStream<TcpStream>;

    async fn connect(
        &self,
        address: IpAddr,
        port: u16,
        options: &StreamOptions,
    ) -> Result<TlsStream<TcpStream>, DomainError> {
        let server_addr = SocketAddr::new(address, port);
        let server_name = server_name(address, options.verification_name.as_deref())?;
        let connector = tokio_rustls::TlsConnector::from(Arc::clone(&self.config));

        let tcp_stream = connect_tcp(server_addr, options.timeout).await?;

        let handshake = connector.connect(server_name, tcp_stream);
        let tls_stream = tokio::time::timeout(options.timeout, handshake)
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server_addr.to_string(),
            })?
            .map_err(|e| {
                DomainError::IoError(format!("TLS handshake failed with {}: {}", server_addr, e))
            })?;

        debug!(
            server = %server_addr,
            hostname = ?options.verification_name,
            "TLS connection established"
        );
        Ok(tls_stream)
    }
}
