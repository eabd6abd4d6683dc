pub mod connector;
pub mod executor;
pub mod multi_executor;
pub mod resolver;

pub use connector::{parse_literal_ip, Connector};
pub use executor::{BasicExecutor, IdSource, MAX_PACKET_SIZE};
pub use multi_executor::MultiExecutor;
pub use resolver::Resolver;
