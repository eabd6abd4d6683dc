use crate::DomainError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// A configured name server: literal IP address plus port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServerDescriptor {
    pub address: IpAddr,
    pub port: u16,
}

impl ServerDescriptor {
    pub fn new(address: IpAddr, port: u16) -> Self {
        Self { address, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }

    /// The two public resolvers used when no servers are configured.
    pub fn defaults() -> Vec<ServerDescriptor> {
        vec![
            ServerDescriptor::new(IpAddr::from([8, 8, 8, 8]), DEFAULT_DNS_PORT),
            ServerDescriptor::new(IpAddr::from([8, 8, 4, 4]), DEFAULT_DNS_PORT),
        ]
    }
}

impl From<SocketAddr> for ServerDescriptor {
    fn from(addr: SocketAddr) -> Self {
        Self::new(addr.ip(), addr.port())
    }
}

impl fmt::Display for ServerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.socket_addr())
    }
}

/// Accepts `8.8.8.8`, `8.8.8.8:5353`, `2001:4860:4860::8888` and
/// `[2001:4860:4860::8888]:53`. Host names are rejected: a stub resolver
/// cannot resolve its own servers.
impl FromStr for ServerDescriptor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(addr.into());
        }
        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(Self::new(ip, DEFAULT_DNS_PORT));
        }
        if let Some(inner) = s.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            if let Ok(ip) = inner.parse::<IpAddr>() {
                return Ok(Self::new(ip, DEFAULT_DNS_PORT));
            }
        }
        Err(DomainError::InvalidIpAddress(s.to_string()))
    }
}
