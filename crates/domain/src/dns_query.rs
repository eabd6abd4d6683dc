use crate::{DomainError, RecordType};
use std::fmt;
use std::sync::Arc;

/// A single DNS question with the transaction id used to correlate its response.
///
/// Built fresh for every network attempt; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    id: u16,
    name: Arc<str>,
    record_type: RecordType,
}

impl Query {
    /// Creates a query with a random transaction id over the full 16-bit range.
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self::with_id(fastrand::u16(..), name, record_type)
    }

    pub fn with_id(id: u16, name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            id,
            name: name.into(),
            record_type,
        }
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }
}

/// Record type as supplied by a caller: a symbolic name ("A", "mx") or a raw code.
///
/// Validation is deferred to [`QueryType::resolve`] so that executors can reject
/// bad input before touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryType {
    Symbolic(String),
    Numeric(i64),
}

impl QueryType {
    pub fn resolve(&self) -> Result<RecordType, DomainError> {
        match self {
            QueryType::Symbolic(name) => name.parse(),
            QueryType::Numeric(code) => RecordType::from_code(*code),
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryType::Symbolic(name) => f.write_str(name),
            QueryType::Numeric(code) => write!(f, "{}", code),
        }
    }
}

impl From<&str> for QueryType {
    fn from(value: &str) -> Self {
        QueryType::Symbolic(value.to_string())
    }
}

impl From<String> for QueryType {
    fn from(value: String) -> Self {
        QueryType::Symbolic(value)
    }
}

impl From<RecordType> for QueryType {
    fn from(value: RecordType) -> Self {
        QueryType::Numeric(i64::from(value.to_u16()))
    }
}

impl From<u16> for QueryType {
    fn from(value: u16) -> Self {
        QueryType::Numeric(i64::from(value))
    }
}

impl From<i32> for QueryType {
    fn from(value: i32) -> Self {
        QueryType::Numeric(i64::from(value))
    }
}

impl From<i64> for QueryType {
    fn from(value: i64) -> Self {
        QueryType::Numeric(value)
    }
}
