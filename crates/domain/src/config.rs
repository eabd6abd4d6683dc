pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, ClientConfig};
