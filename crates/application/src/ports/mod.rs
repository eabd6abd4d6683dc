mod address_resolver;
mod datagram_transport;
mod dns_executor;
mod message_codec;
mod stream_connector;

pub use address_resolver::AddressResolver;
pub use datagram_transport::{DatagramChannel, DatagramTransport};
pub use dns_executor::DnsExecutor;
pub use message_codec::MessageCodec;
pub use stream_connector::StreamConnector;
