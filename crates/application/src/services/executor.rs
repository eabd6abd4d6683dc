//! Single-server DNS executor.
//!
//! One call is one logical transaction: the datagram association is opened
//! once, every attempt sends a freshly built query (new transaction id), and
//! only an elapsed receive deadline triggers another attempt. The association
//! is closed exactly once on every exit path; a cancelled call releases it
//! through `Drop` instead.

use crate::ports::{DatagramChannel, DatagramTransport, DnsExecutor, MessageCodec};
use async_trait::async_trait;
use ferrous_stub_domain::{
    rcode_name, DomainError, Query, QueryOptions, QueryType, RecordType, Response,
    ServerDescriptor,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Receive ceiling for plain (non-EDNS) DNS over UDP.
pub const MAX_PACKET_SIZE: usize = 512;

/// Produces the transaction id for each outgoing query.
pub type IdSource = Arc<dyn Fn() -> u16 + Send + Sync>;

pub struct BasicExecutor {
    server: ServerDescriptor,
    transport: Arc<dyn DatagramTransport>,
    codec: Arc<dyn MessageCodec>,
    ids: Option<IdSource>,
}

impl BasicExecutor {
    pub fn new(
        server: ServerDescriptor,
        transport: Arc<dyn DatagramTransport>,
        codec: Arc<dyn MessageCodec>,
    ) -> Self {
        Self {
            server,
            transport,
            codec,
            ids: None,
        }
    }

    /// Replaces the random transaction ids with ids drawn from `ids`.
    pub fn with_id_source(mut self, ids: IdSource) -> Self {
        self.ids = Some(ids);
        self
    }

    /// IP address of the name server used by this executor.
    pub fn address(&self) -> IpAddr {
        self.server.address
    }

    pub fn port(&self) -> u16 {
        self.server.port
    }

    pub fn server(&self) -> ServerDescriptor {
        self.server
    }

    fn build_request(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<(Query, Vec<u8>), DomainError> {
        let query = match &self.ids {
            Some(next_id) => Query::with_id(next_id(), name, record_type),
            None => Query::new(name, record_type),
        };
        let bytes = self.codec.encode(&query)?;
        Ok((query, bytes))
    }

    async fn run_attempts(
        &self,
        channel: &mut dyn DatagramChannel,
        mut request: (Query, Vec<u8>),
        options: &QueryOptions,
    ) -> Result<Response, DomainError> {
        let total = options.total_attempts();

        for attempt in 1..=total {
            if attempt > 1 {
                request = self.build_request(request.0.name(), request.0.record_type())?;
            }
            let (query, bytes) = &request;

            channel.send(bytes).await?;
            debug!(
                server = %self.server,
                id = query.id(),
                attempt = attempt,
                "Query sent"
            );

            match channel.receive(MAX_PACKET_SIZE, options.timeout).await {
                Ok(datagram) => {
                    let response = self.codec.decode(&datagram).map_err(|e| match e {
                        DomainError::DecodeFailure(_) => e,
                        other => DomainError::DecodeFailure(other.to_string()),
                    })?;
                    return validate_response(query, response);
                }
                Err(DomainError::QueryTimeout) => {
                    debug!(
                        server = %self.server,
                        attempt = attempt,
                        remaining = total - attempt,
                        "Receive timed out"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        warn!(server = %self.server, attempts = total, "No response from server");
        Err(DomainError::NoResponse {
            server: self.server.to_string(),
            attempts: total,
        })
    }
}

fn validate_response(query: &Query, response: Response) -> Result<Response, DomainError> {
    if response.id != query.id() {
        return Err(DomainError::ResponseMismatch {
            expected: query.id(),
            received: response.id,
        });
    }

    if !response.is_success() {
        return Err(DomainError::ResponseCode {
            code: response.response_code,
            name: rcode_name(response.response_code),
        });
    }

    Ok(response)
}

#[async_trait]
impl DnsExecutor for BasicExecutor {
    async fn execute(
        &self,
        name: &str,
        record_type: &QueryType,
        options: &QueryOptions,
    ) -> Result<Response, DomainError> {
        // Everything that can be rejected locally is rejected before the socket opens.
        let record_type = record_type.resolve()?;
        let request = self.build_request(name, record_type)?;

        // If this future is dropped mid-call, dropping `channel` releases the socket.
        let mut channel = self.transport.open(self.server.socket_addr()).await?;
        let result = self.run_attempts(channel.as_mut(), request, options).await;
        channel.close().await;

        if let Ok(response) = &result {
            debug!(
                server = %self.server,
                %name,
                %record_type,
                answers = response.answers.len(),
                "Response accepted"
            );
        }
        result
    }

    fn label(&self) -> String {
        self.server.to_string()
    }
}
