use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "shop.db";
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_POOL_SIZE: u32 = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got '{value}'")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// How order creation treats ids that do not resolve to an existing row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReferentialChecks {
    /// Unknown customers are accepted and stock updates that hit no product
    /// are only logged.
    #[default]
    Loose,
    /// Unknown customers or products abort the order.
    Strict,
}

impl FromStr for ReferentialChecks {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "loose" => Ok(ReferentialChecks::Loose),
            "strict" => Ok(ReferentialChecks::Strict),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ReferentialChecks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferentialChecks::Loose => f.write_str("loose"),
            ReferentialChecks::Strict => f.write_str("strict"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub database_url: String,
    pub referential_checks: ReferentialChecks,
    pub busy_timeout: Duration,
    pub pool_size: u32,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            referential_checks: ReferentialChecks::default(),
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

impl ShopConfig {
    /// Read configuration from the process environment. Call
    /// `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup. Missing keys fall
    /// back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);

        let referential_checks = match lookup("SHOP_REFERENTIAL_CHECKS") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SHOP_REFERENTIAL_CHECKS",
                expected: "'loose' or 'strict'",
                value,
            })?,
            None => defaults.referential_checks,
        };

        let busy_timeout = match lookup("SHOP_BUSY_TIMEOUT_MS") {
            Some(value) => Duration::from_millis(value.trim().parse().map_err(|_| {
                ConfigError::InvalidValue {
                    key: "SHOP_BUSY_TIMEOUT_MS",
                    expected: "a number of milliseconds",
                    value,
                }
            })?),
            None => defaults.busy_timeout,
        };

        let pool_size = match lookup("SHOP_POOL_SIZE") {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "SHOP_POOL_SIZE",
                        expected: "a positive integer",
                        value,
                    })
                }
            },
            None => defaults.pool_size,
        };

        Ok(Self {
            database_url,
            referential_checks,
            busy_timeout,
            pool_size,
        })
    }
}
