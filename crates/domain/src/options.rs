use crate::{DomainError, RecordType};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);
pub const DEFAULT_RETRIES: u32 = 1;

/// Per-call timeout and retry budget for one executor transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Deadline for each individual receive.
    pub timeout: Duration,
    /// Additional attempts after the first one times out.
    pub retries: u32,
}

impl QueryOptions {
    pub fn new(timeout: Duration, retries: u32) -> Self {
        Self { timeout, retries }
    }

    /// Build from loosely typed caller input: fractional seconds and a
    /// possibly negative retry count, which clamps to zero.
    pub fn from_secs(timeout_secs: f64, retries: i64) -> Result<Self, DomainError> {
        let timeout = Duration::try_from_secs_f64(timeout_secs).map_err(|_| {
            DomainError::InvalidArgument(format!("invalid timeout: {}", timeout_secs))
        })?;
        let retries = u32::try_from(retries.max(0)).unwrap_or(u32::MAX);
        Ok(Self { timeout, retries })
    }

    pub fn total_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_RETRIES)
    }
}

/// Address family requested from a resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResolveMode {
    #[default]
    Ipv4,
    Ipv6,
}

impl ResolveMode {
    pub fn record_type(self) -> RecordType {
        match self {
            ResolveMode::Ipv4 => RecordType::A,
            ResolveMode::Ipv6 => RecordType::AAAA,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResolveMode::Ipv4 => "ipv4",
            ResolveMode::Ipv6 => "ipv6",
        }
    }
}

impl fmt::Display for ResolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the A (1) and AAAA (28) codes name a resolver mode.
impl TryFrom<u16> for ResolveMode {
    type Error = DomainError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match RecordType::from_u16(code) {
            RecordType::A => Ok(ResolveMode::Ipv4),
            RecordType::AAAA => Ok(ResolveMode::Ipv6),
            _ => Err(DomainError::InvalidArgument(format!(
                "invalid resolver mode: {}",
                code
            ))),
        }
    }
}

impl FromStr for ResolveMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ipv4" | "4" | "a" => Ok(ResolveMode::Ipv4),
            "ipv6" | "6" | "aaaa" => Ok(ResolveMode::Ipv6),
            _ => Err(DomainError::InvalidArgument(format!(
                "invalid resolver mode: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveOptions {
    pub mode: ResolveMode,
    pub query: QueryOptions,
}

impl ResolveOptions {
    pub fn new(mode: ResolveMode, query: QueryOptions) -> Self {
        Self { mode, query }
    }

    pub fn ipv4() -> Self {
        Self::new(ResolveMode::Ipv4, QueryOptions::default())
    }

    pub fn ipv6() -> Self {
        Self::new(ResolveMode::Ipv6, QueryOptions::default())
    }
}

/// Options for one connector call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectOptions {
    pub resolve: ResolveOptions,

    /// Connect timeout per address. `None` uses the resolver timeout.
    pub connect_timeout: Option<Duration>,

    /// Name to verify the peer identity against (TLS SNI / certificate name).
    /// Defaults to the requested host name when resolution is performed.
    pub verification_name: Option<String>,
}

impl ConnectOptions {
    pub fn with_verification_name(mut self, name: impl Into<String>) -> Self {
        self.verification_name = Some(name.into());
        self
    }

    pub fn with_mode(mut self, mode: ResolveMode) -> Self {
        self.resolve.mode = mode;
        self
    }

    pub fn effective_connect_timeout(&self) -> Duration {
        self.connect_timeout.unwrap_or(self.resolve.query.timeout)
    }
}

/// Options handed to a stream connector for a single address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamOptions {
    pub timeout: Duration,
    pub verification_name: Option<String>,
}
