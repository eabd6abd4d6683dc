//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use ferrous_stub_domain::{DomainError, Query};
use hickory_proto::op::{Message, MessageType, OpCode, Query as HickoryQuery};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Serialize a query as a standard recursive question:
    /// the query's transaction id, RD set, one question of class IN.
    pub fn build_query(query: &Query) -> Result<Vec<u8>, DomainError> {
        let name = Name::from_str(query.name()).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", query.name(), e))
        })?;

        let mut question = HickoryQuery::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(query.record_type()));
        question.set_query_class(hickory_proto::rr::DNSClass::IN);

        let mut message = Message::new(query.id(), MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(question);

        Self::serialize_message(&message)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::IoError(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
