pub mod message_builder;
pub mod record_type_map;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use record_type_map::RecordTypeMapper;
pub use response_parser::ResponseParser;

use ferrous_stub_application::ports::MessageCodec;
use ferrous_stub_domain::{DomainError, Query, Response};

/// Standard DNS wire format, backed by `hickory-proto`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HickoryCodec;

impl HickoryCodec {
    pub fn new() -> Self {
        Self
    }
}

impl MessageCodec for HickoryCodec {
    fn encode(&self, query: &Query) -> Result<Vec<u8>, DomainError> {
        MessageBuilder::build_query(query)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Response, DomainError> {
        ResponseParser::parse(bytes)
    }
}
