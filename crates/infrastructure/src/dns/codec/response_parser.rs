use super::record_type_map::RecordTypeMapper;
use ferrous_stub_domain::{AnswerRecord, DomainError, RecordData, Response};
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use std::net::IpAddr;
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<Response, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::DecodeFailure(format!("Failed to parse DNS response: {}", e))
        })?;

        // Header fields are read straight from the wire; the message parsed,
        // so the fixed 12-byte header is present.
        let id = match response_bytes {
            [hi, lo, ..] => u16::from_be_bytes([*hi, *lo]),
            _ => return Err(DomainError::DecodeFailure("Truncated header".to_string())),
        };
        let response_code = u16::from(message.response_code());
        let truncated = message.truncated();

        let answers: Vec<AnswerRecord> = message.answers().iter().map(Self::to_answer).collect();

        debug!(
            id = id,
            rcode = response_code,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(Response {
            id,
            response_code,
            truncated,
            answers,
        })
    }

    fn to_answer(record: &Record) -> AnswerRecord {
        let data = match record.data() {
            RData::A(a) => RecordData::Address(IpAddr::V4(a.0)),
            RData::AAAA(aaaa) => RecordData::Address(IpAddr::V6(aaaa.0)),
            RData::CNAME(canonical) => RecordData::Name(canonical.to_utf8()),
            RData::NS(ns) => RecordData::Name(ns.to_utf8()),
            RData::PTR(ptr) => RecordData::Name(ptr.to_utf8()),
            other => RecordData::Other(other.to_string()),
        };

        AnswerRecord::new(
            record.name().to_utf8(),
            RecordTypeMapper::from_hickory(record.record_type()),
            record.ttl(),
            data,
        )
    }
}
