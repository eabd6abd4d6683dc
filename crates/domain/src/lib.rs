//! Ferrous Stub Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod errors;
pub mod name_server;
pub mod options;

pub use config::{CliOverrides, ClientConfig, ConfigError};
pub use dns_query::{Query, QueryType};
pub use dns_record::{AnswerRecord, RecordData, RecordType, RECORD_TYPES};
pub use dns_response::{rcode_name, Response};
pub use errors::{AddressFailure, DomainError, ServerFailure};
pub use name_server::{ServerDescriptor, DEFAULT_DNS_PORT};
pub use options::{
    ConnectOptions, QueryOptions, ResolveMode, ResolveOptions, StreamOptions, DEFAULT_RETRIES,
    DEFAULT_TIMEOUT,
};
