use async_trait::async_trait;
use ferrous_stub_domain::{DomainError, QueryOptions, QueryType, Response};

/// Runs one logical DNS transaction and returns the validated response.
#[async_trait]
pub trait DnsExecutor: Send + Sync {
    async fn execute(
        &self,
        name: &str,
        record_type: &QueryType,
        options: &QueryOptions,
    ) -> Result<Response, DomainError>;

    /// Human readable identity used in logs and aggregate failures.
    fn label(&self) -> String;
}
