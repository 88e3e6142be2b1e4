// Runtime configuration, read from the environment (and `.env` in `main`).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("SECURITY_LIST_LIMIT ({default_limit}) must be between 1 and SECURITY_MAX_LIST_LIMIT ({max_limit})")]
    LimitOutOfRange { default_limit: u64, max_limit: u64 },
}

/// Page sizes for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimits {
    pub default_limit: u64,
    pub max_limit: u64,
}

impl Default for ListLimits {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
        }
    }
}

impl ListLimits {
    pub fn resolve(&self, requested: Option<u64>) -> u64 {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub list_limits: ListLimits,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ListLimits::default();
        let list_limits = ListLimits {
            default_limit: parse(&lookup, "SECURITY_LIST_LIMIT", defaults.default_limit)?,
            max_limit: parse(&lookup, "SECURITY_MAX_LIST_LIMIT", defaults.max_limit)?,
        };
        if list_limits.default_limit == 0 || list_limits.default_limit > list_limits.max_limit {
            return Err(ConfigError::LimitOutOfRange {
                default_limit: list_limits.default_limit,
                max_limit: list_limits.max_limit,
            });
        }

        Ok(Self {
            host: parse(&lookup, "SECURITY_HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: parse(&lookup, "SECURITY_PORT", 8080)?,
            log_filter: lookup("SECURITY_LOG").unwrap_or_else(|| "info".to_string()),
            list_limits,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
