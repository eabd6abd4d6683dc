use super::errors::ConfigError;
use crate::{QueryOptions, ServerDescriptor, DEFAULT_RETRIES, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Name servers in failover order, e.g. `"8.8.8.8"` or `"[::1]:5353"`.
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,

    /// Negative values are accepted and clamp to zero.
    #[serde(default = "default_retries")]
    pub retries: i64,
}

impl DnsConfig {
    pub fn server_descriptors(&self) -> Result<Vec<ServerDescriptor>, ConfigError> {
        self.servers
            .iter()
            .map(|s| {
                s.parse::<ServerDescriptor>().map_err(|e| {
                    ConfigError::Validation(format!("Invalid server '{}': {}", s, e))
                })
            })
            .collect()
    }

    pub fn query_options(&self) -> Result<QueryOptions, ConfigError> {
        QueryOptions::from_secs(self.timeout_secs, self.retries)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            servers: default_servers(),
            timeout_secs: default_timeout_secs(),
            retries: default_retries(),
        }
    }
}

fn default_servers() -> Vec<String> {
    ServerDescriptor::defaults()
        .iter()
        .map(|s| s.address.to_string())
        .collect()
}

fn default_timeout_secs() -> f64 {
    DEFAULT_TIMEOUT.as_secs_f64()
}

fn default_retries() -> i64 {
    i64::from(DEFAULT_RETRIES)
}
