//! Client configuration.
//!
//! [`ClientConfig`] holds everything the client needs besides credentials.
//! It is handed to [`HuobiRestClientBuilder::config`](crate::rest::HuobiRestClientBuilder::config)
//! once and never changes afterwards.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::HuobiError;
use crate::rest::{DEFAULT_TIMEOUT_MS, HUOBI_HOSTNAME, PROTOCOL};

/// Environment variable overriding the API hostname.
pub const HOSTNAME_VAR: &str = "HUOBI_HOSTNAME";
/// Environment variable holding the proxy host.
pub const PROXY_HOST_VAR: &str = "HUOBI_PROXY_HOST";
/// Environment variable holding the proxy port.
pub const PROXY_PORT_VAR: &str = "HUOBI_PROXY_PORT";
/// Environment variable overriding the request timeout, in milliseconds.
pub const TIMEOUT_MS_VAR: &str = "HUOBI_TIMEOUT_MS";

/// An HTTP proxy every request is tunneled through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Proxy host
    pub host: String,
    /// Proxy port
    pub port: u16,
}

impl ProxyConfig {
    /// Create a proxy configuration.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// The proxy URL.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Connection settings for the REST client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API hostname without scheme, also part of the signing payload
    pub hostname: String,
    /// Optional HTTP proxy; `None` disables proxying entirely
    pub proxy: Option<ProxyConfig>,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            hostname: HUOBI_HOSTNAME.to_string(),
            proxy: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// The request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// The origin requests are signed for, e.g. `https://api.huobi.pro`.
    pub fn host(&self) -> String {
        format!("{}://{}", PROTOCOL, self.hostname)
    }

    /// Load configuration from the environment.
    ///
    /// Reads `HUOBI_HOSTNAME`, `HUOBI_PROXY_HOST`, `HUOBI_PROXY_PORT` and
    /// `HUOBI_TIMEOUT_MS`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, HuobiError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HuobiError> {
        let mut config = Self::default();

        if let Some(hostname) = lookup(HOSTNAME_VAR) {
            config.hostname = hostname;
        }

        config.proxy = match (lookup(PROXY_HOST_VAR), lookup(PROXY_PORT_VAR)) {
            (Some(host), Some(port)) => {
                let port = port.parse().map_err(|e| {
                    HuobiError::Configuration(format!("Invalid {PROXY_PORT_VAR} {port:?}: {e}"))
                })?;
                Some(ProxyConfig::new(host, port))
            }
            (None, None) => None,
            _ => {
                return Err(HuobiError::Configuration(format!(
                    "{PROXY_HOST_VAR} and {PROXY_PORT_VAR} must be set together"
                )));
            }
        };

        if let Some(timeout) = lookup(TIMEOUT_MS_VAR) {
            config.timeout_ms = timeout.parse().map_err(|e| {
                HuobiError::Configuration(format!("Invalid {TIMEOUT_MS_VAR} {timeout:?}: {e}"))
            })?;
        }

        Ok(config)
    }
}
