//! Name-to-connection pipeline.
//!
//! Literal addresses are dialed directly. Anything else is resolved first and
//! the resulting addresses are tried one at a time, in response order, until
//! one accepts.

use crate::ports::{AddressResolver, StreamConnector};
use ferrous_stub_domain::{AddressFailure, ConnectOptions, DomainError, StreamOptions};
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub struct Connector<S: StreamConnector> {
    resolver: Arc<dyn AddressResolver>,
    streams: S,
}

impl<S: StreamConnector> Connector<S> {
    pub fn new(resolver: Arc<dyn AddressResolver>, streams: S) -> Self {
        Self { resolver, streams }
    }

    pub fn stream_connector(&self) -> &S {
        &self.streams
    }

    pub async fn connect(
        &self,
        name: &str,
        port: u16,
        options: &ConnectOptions,
    ) -> Result<S::Stream, DomainError> {
        let timeout = options.effective_connect_timeout();

        if let Some(address) = parse_literal_ip(name) {
            debug!(%address, port, "Literal address, skipping resolution");
            let stream_options = StreamOptions {
                timeout,
                verification_name: options.verification_name.clone(),
            };
            return self
                .attempt(address, port, &stream_options)
                .await
                .map_err(|error| DomainError::ConnectionFailed {
                    name: name.to_string(),
                    failures: vec![AddressFailure {
                        address: SocketAddr::new(address, port).to_string(),
                        error,
                    }],
                });
        }

        let addresses = self
            .resolver
            .resolve(name, &options.resolve)
            .await
            .map_err(|e| DomainError::ResolutionFailed {
                name: name.to_string(),
                source: Box::new(e),
            })?;

        if addresses.is_empty() {
            warn!(%name, mode = %options.resolve.mode, "No address of the requested family");
            return Err(DomainError::NameNotFound {
                name: name.to_string(),
            });
        }

        let stream_options = StreamOptions {
            timeout,
            verification_name: Some(
                options
                    .verification_name
                    .clone()
                    .unwrap_or_else(|| name.to_string()),
            ),
        };

        let mut failures = Vec::with_capacity(addresses.len());
        for (index, address) in addresses.into_iter().enumerate() {
            match self.attempt(address, port, &stream_options).await {
                Ok(stream) => {
                    debug!(%name, %address, port, position = index, "Connected");
                    return Ok(stream);
                }
                Err(error) => {
                    debug!(
                        %name,
                        %address,
                        port,
                        error = %error,
                        position = index,
                        "Trying next address"
                    );
                    failures.push(AddressFailure {
                        address: SocketAddr::new(address, port).to_string(),
                        error,
                    });
                }
            }
        }

        warn!(%name, port, attempted = failures.len(), "All addresses failed");
        Err(DomainError::ConnectionFailed {
            name: name.to_string(),
            failures,
        })
    }

    async fn attempt(
        &self,
        address: IpAddr,
        port: u16,
        options: &StreamOptions,
    ) -> Result<S::Stream, DomainError> {
        let connect = self.streams.connect(address, port, options);
        bounded(options.timeout, address, port, connect).await
    }
}

async fn bounded<T>(
    limit: Duration,
    address: IpAddr,
    port: u16,
    attempt: impl std::future::Future<Output = Result<T, DomainError>>,
) -> Result<T, DomainError> {
    match tokio::time::timeout(limit, attempt).await {
        Ok(result) => result,
        Err(_) => Err(DomainError::TransportTimeout {
            server: SocketAddr::new(address, port).to_string(),
        }),
    }
}

/// Recognizes `192.0.2.1`, `2001:db8::1` and `[2001:db8::1]`.
pub fn parse_literal_ip(name: &str) -> Option<IpAddr> {
    if let Ok(ip) = name.parse::<IpAddr>() {
        return Some(ip);
    }
    let inner = name.strip_prefix('[')?.strip_suffix(']')?;
    inner.parse::<Ipv6Addr>().ok().map(IpAddr::V6)
}
