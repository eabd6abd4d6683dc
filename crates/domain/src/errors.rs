use std::fmt;
use thiserror::Error;

/// One server's contribution to an [`DomainError::AllServersFailed`] aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerFailure {
    pub server: String,
    pub error: DomainError,
}

/// One address's contribution to a [`DomainError::ConnectionFailed`] aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressFailure {
    pub address: String,
    pub error: DomainError,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("No response from server {server} after {attempts} attempt(s)")]
    NoResponse { server: String, attempts: u32 },

    #[error("Response ID {received} did not match request ID {expected}")]
    ResponseMismatch { expected: u16, received: u16 },

    #[error("Server returned response code {code} ({name})")]
    ResponseCode { code: u16, name: &'static str },

    #[error("Failed to decode DNS response: {0}")]
    DecodeFailure(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("No name servers configured")]
    NoServersConfigured,

    #[error("All name servers failed: {}", FailureList(.0))]
    AllServersFailed(Vec<ServerFailure>),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("No address found for {name}")]
    NameNotFound { name: String },

    #[error("Could not resolve {name}: {source}")]
    ResolutionFailed {
        name: String,
        source: Box<DomainError>,
    },

    #[error("Could not connect to {name}: {}", AddressList(.failures))]
    ConnectionFailed {
        name: String,
        failures: Vec<AddressFailure>,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Whether a multi-server executor may move on to the next server after
    /// this failure. Argument errors would fail identically everywhere.
    pub fn is_failover_eligible(&self) -> bool {
        !matches!(
            self,
            DomainError::InvalidRecordType(_)
                | DomainError::InvalidArgument(_)
                | DomainError::InvalidDomainName(_)
        )
    }

    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self,
            DomainError::NameNotFound { .. }
                | DomainError::ResolutionFailed { .. }
                | DomainError::ConnectionFailed { .. }
        )
    }
}

struct FailureList<'a>(&'a [ServerFailure]);

impl fmt::Display for FailureList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", failure.server, failure.error)?;
        }
        Ok(())
    }
}

struct AddressList<'a>(&'a [AddressFailure]);

impl fmt::Display for AddressList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("no addresses attempted");
        }
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", failure.address, failure.error)?;
        }
        Ok(())
    }
}
