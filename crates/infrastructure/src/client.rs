//! Ready-made stub client wiring the application services to the real
//! UDP transport, the hickory codec and the TCP/TLS connectors.

use crate::dns::{HickoryCodec, TcpConnector, UdpTransport};
use ferrous_stub_application::ports::{
    AddressResolver, DatagramTransport, DnsExecutor, MessageCodec,
};
use ferrous_stub_application::{Connector, MultiExecutor, Resolver};
use ferrous_stub_domain::{
    ClientConfig, ConnectOptions, DomainError, QueryOptions, QueryType, ResolveMode,
    ResolveOptions, Response, ServerDescriptor,
};
use std::net::IpAddr;
use std::sync::Arc;
use tokio::net::TcpStream;
use tracing::info;

pub struct StubClient {
    executor: Arc<MultiExecutor>,
    resolver: Arc<Resolver>,
    options: QueryOptions,
}

impl StubClient {
    pub fn new(servers: &[ServerDescriptor], options: QueryOptions) -> Self {
        let transport: Arc<dyn DatagramTransport> = Arc::new(UdpTransport::new());
        let codec: Arc<dyn MessageCodec> = Arc::new(HickoryCodec::new());
        Self::with_parts(servers, options, transport, codec)
    }

    pub fn with_parts(
        servers: &[ServerDescriptor],
        options: QueryOptions,
        transport: Arc<dyn DatagramTransport>,
        codec: Arc<dyn MessageCodec>,
    ) -> Self {
        let executor = Arc::new(MultiExecutor::from_servers(servers, transport, codec));
        let resolver = Arc::new(Resolver::new(Arc::clone(&executor) as Arc<dyn DnsExecutor>));
        Self {
            executor,
            resolver,
            options,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, DomainError> {
        let servers = config.dns.server_descriptors()?;
        let options = config.dns.query_options()?;
        info!(
            servers = %servers.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(","),
            timeout = ?options.timeout,
            retries = options.retries,
            "Stub client configured"
        );
        Ok(Self::new(&servers, options))
    }

    pub fn options(&self) -> QueryOptions {
        self.options
    }

    pub fn executor(&self) -> Arc<MultiExecutor> {
        Arc::clone(&self.executor)
    }

    pub fn resolver(&self) -> Arc<Resolver> {
        Arc::clone(&self.resolver)
    }

    /// Raw query of any record type against the configured servers.
    pub async fn query(
        &self,
        name: &str,
        record_type: impl Into<QueryType>,
    ) -> Result<Response, DomainError> {
        self.executor
            .execute(name, &record_type.into(), &self.options)
            .await
    }

    pub async fn resolve(
        &self,
        domain: &str,
        mode: ResolveMode,
    ) -> Result<Vec<IpAddr>, DomainError> {
        self.resolver
            .resolve(domain, &ResolveOptions::new(mode, self.options))
            .await
    }

    /// Connect options carrying this client's query budget.
    pub fn connect_options(&self, mode: ResolveMode) -> ConnectOptions {
        ConnectOptions {
            resolve: ResolveOptions::new(mode, self.options),
            ..ConnectOptions::default()
        }
    }

    pub async fn connect_tcp(
        &self,
        name: &str,
        port: u16,
        options: &ConnectOptions,
    ) -> Result<TcpStream, DomainError> {
        let resolver: Arc<dyn AddressResolver> = self.resolver.clone();
        Connector::new(resolver, TcpConnector::new())
            .connect(name, port, options)
            .await
    }

    #[cfg(feature = "tls")]
    pub async fn connect_tls(
        &self,
        name: &str,
        port: u16,
        options: &ConnectOptions,
    ) -> Result<tokio_rustls::client::TlsStream<TcpStream>, DomainError> {
        let resolver: Arc<dyn AddressResolver> = self.resolver.clone();
        Connector::new(resolver, crate::dns::TlsConnector::new())
            .connect(name, port, options)
            .await
    }
}
