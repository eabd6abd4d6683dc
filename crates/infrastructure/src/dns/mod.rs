pub mod codec;
pub mod transport;

pub use codec::HickoryCodec;
pub use transport::{TcpConnector, UdpTransport};

#[cfg(feature = "tls")]
pub use transport::TlsConnector;
