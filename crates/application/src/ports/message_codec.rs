use ferrous_stub_domain::{DomainError, Query, Response};

/// Wire codec for DNS messages.
///
/// `decode` must report malformed input as [`DomainError::DecodeFailure`].
pub trait MessageCodec: Send + Sync {
    fn encode(&self, query: &Query) -> Result<Vec<u8>, DomainError>;

    fn decode(&self, bytes: &[u8]) -> Result<Response, DomainError>;
}
