use super::executor::BasicExecutor;
use crate::ports::{DatagramTransport, DnsExecutor, MessageCodec};
use async_trait::async_trait;
use ferrous_stub_domain::{
    DomainError, QueryOptions, QueryType, Response, ServerDescriptor, ServerFailure,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Sequential failover across an ordered set of executors.
///
/// Executors are tried strictly in insertion order; there is no ranking by
/// latency or health.
#[derive(Default)]
pub struct MultiExecutor {
    executors: Vec<Arc<dyn DnsExecutor>>,
}

impl MultiExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_executors(executors: Vec<Arc<dyn DnsExecutor>>) -> Self {
        Self { executors }
    }

    /// One [`BasicExecutor`] per server, sharing a transport and codec.
    pub fn from_servers(
        servers: &[ServerDescriptor],
        transport: Arc<dyn DatagramTransport>,
        codec: Arc<dyn MessageCodec>,
    ) -> Self {
        let executors = servers
            .iter()
            .map(|server| {
                Arc::new(BasicExecutor::new(
                    *server,
                    Arc::clone(&transport),
                    Arc::clone(&codec),
                )) as Arc<dyn DnsExecutor>
            })
            .collect();
        Self { executors }
    }

    /// Appends to the end of the failover order.
    pub fn add(&mut self, executor: Arc<dyn DnsExecutor>) {
        self.executors.push(executor);
    }

    pub fn len(&self) -> usize {
        self.executors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executors.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.executors.iter().map(|e| e.label()).collect()
    }
}

#[async_trait]
impl DnsExecutor for MultiExecutor {
    async fn execute(
        &self,
        name: &str,
        record_type: &QueryType,
        options: &QueryOptions,
    ) -> Result<Response, DomainError> {
        if self.executors.is_empty() {
            return Err(DomainError::NoServersConfigured);
        }
        debug!(
            strategy = "failover",
            servers = self.executors.len(),
            domain = %name,
            "Trying sequentially"
        );

        let mut failures = Vec::with_capacity(self.executors.len());
        for (index, executor) in self.executors.iter().enumerate() {
            match executor.execute(name, record_type, options).await {
                Ok(response) => {
                    debug!(server = %executor.label(), position = index, "Server responded");
                    return Ok(response);
                }
                Err(e) if !e.is_failover_eligible() => return Err(e),
                Err(e) => {
                    warn!(server = %executor.label(), error = %e, position = index, "Failing over");
                    failures.push(ServerFailure {
                        server: executor.label(),
                        error: e,
                    });
                }
            }
        }

        Err(DomainError::AllServersFailed(failures))
    }

    fn label(&self) -> String {
        self.labels().join(",")
    }
}
