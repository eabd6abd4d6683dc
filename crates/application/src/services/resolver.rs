use super::multi_executor::MultiExecutor;
use crate::ports::{AddressResolver, DatagramTransport, DnsExecutor, MessageCodec};
use async_trait::async_trait;
use ferrous_stub_domain::{DomainError, QueryType, ResolveMode, ResolveOptions, ServerDescriptor};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use tracing::debug;

/// Maps a name to the addresses of one family using an underlying executor.
pub struct Resolver {
    executor: Arc<dyn DnsExecutor>,
}

impl Resolver {
    pub fn new(executor: Arc<dyn DnsExecutor>) -> Self {
        Self { executor }
    }

    /// Resolver over the public default servers (8.8.8.8, 8.8.4.4).
    pub fn with_default_servers(
        transport: Arc<dyn DatagramTransport>,
        codec: Arc<dyn MessageCodec>,
    ) -> Self {
        let executor = MultiExecutor::from_servers(&ServerDescriptor::defaults(), transport, codec);
        Self::new(Arc::new(executor))
    }

    pub async fn resolve(
        &self,
        domain: &str,
        options: &ResolveOptions,
    ) -> Result<Vec<IpAddr>, DomainError> {
        if let Some(address) = localhost_address(domain, options.mode) {
            debug!(%domain, mode = %options.mode, "Answered locally");
            return Ok(vec![address]);
        }

        let wanted = options.mode.record_type();
        let response = self
            .executor
            .execute(domain, &QueryType::from(wanted), &options.query)
            .await?;

        let addresses: Vec<IpAddr> = response
            .answers
            .iter()
            .filter(|record| record.record_type == wanted)
            .filter_map(|record| record.ip_address())
            .collect();

        debug!(
            %domain,
            mode = %options.mode,
            answers = response.answers.len(),
            addresses = addresses.len(),
            "Resolved"
        );
        Ok(addresses)
    }
}

fn localhost_address(domain: &str, mode: ResolveMode) -> Option<IpAddr> {
    if !domain.eq_ignore_ascii_case("localhost") {
        return None;
    }
    Some(match mode {
        ResolveMode::Ipv4 => IpAddr::V4(Ipv4Addr::LOCALHOST),
        ResolveMode::Ipv6 => IpAddr::V6(Ipv6Addr::LOCALHOST),
    })
}

#[async_trait]
impl AddressResolver for Resolver {
    async fn resolve(
        &self,
        domain: &str,
        options: &ResolveOptions,
    ) -> Result<Vec<IpAddr>, DomainError> {
        Resolver::resolve(self, domain, options).await
    }
}
