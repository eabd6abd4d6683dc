use super::RecordType;
use std::net::IpAddr;

/// Decoded payload of an answer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    /// A / AAAA payload.
    Address(IpAddr),
    /// CNAME, NS, PTR and other name-valued payloads.
    Name(String),
    /// Anything else, in presentation form.
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub name: String,

    pub record_type: RecordType,

    pub ttl: u32,

    pub data: RecordData,
}

impl AnswerRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        data: RecordData,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data,
        }
    }

    /// Convenience constructor for an A or AAAA record matching the address family.
    pub fn address(name: impl Into<String>, ttl: u32, address: IpAddr) -> Self {
        let record_type = match address {
            IpAddr::V4(_) => RecordType::A,
            IpAddr::V6(_) => RecordType::AAAA,
        };
        Self::new(name, record_type, ttl, RecordData::Address(address))
    }

    pub fn ip_address(&self) -> Option<IpAddr> {
        match self.data {
            RecordData::Address(ip) => Some(ip),
            _ => None,
        }
    }
}
