pub mod tcp;
#[cfg(feature = "tls")]
pub mod tls;
pub mod udp;

pub use tcp::TcpConnector;
#[cfg(feature = "tls")]
pub use tls::TlsConnector;
pub use udp::{UdpChannel, UdpTransport};
