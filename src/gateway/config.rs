//! Gateway configuration read once at process start.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the engine host
pub const HOST_VAR: &str = "UE_TCP_HOST";
/// Environment variable holding the engine port
pub const PORT_VAR: &str = "UE_TCP_PORT";
/// Environment variable holding the per-call timeout in milliseconds
pub const TIMEOUT_VAR: &str = "UE_TCP_TIMEOUT_MS";

/// Configuration for the scene gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Engine host (default: 127.0.0.1)
    pub host: String,

    /// Engine port (default: 9000)
    pub port: u16,

    /// Default per-call timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9000,
            timeout_ms: 30_000,
        }
    }
}

impl GatewayConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset or blank variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(host) = read(HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = read(PORT_VAR) {
            config.port = parse_var(PORT_VAR, &port)?;
        }
        if let Some(timeout) = read(TIMEOUT_VAR) {
            config.timeout_ms = parse_var(TIMEOUT_VAR, &timeout)?;
        }

        Ok(config)
    }

    /// `host:port` of the engine. IPv6 literals are bracketed.
    pub fn address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Default per-call timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|err: T::Err| ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
        detail: err.to_string(),
    })
}
