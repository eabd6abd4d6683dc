use async_trait::async_trait;
use ferrous_stub_domain::{DomainError, ResolveOptions};
use std::net::IpAddr;

#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Addresses of the requested family, in response order. An empty list
    /// means the name exists but has no address of that family.
    async fn resolve(
        &self,
        domain: &str,
        options: &ResolveOptions,
    ) -> Result<Vec<IpAddr>, DomainError>;
}
