//! Connection pool sizing and timeout configuration.
//!
//! The pool itself (acquisition, eviction, health checking) lives in the
//! session layer; this module only carries its settings. Legacy parameter
//! names from older driver generations are accepted alongside the
//! canonical ones.

use crate::connection::params::first_present;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::warn;

/// Behavior when the pool has no spare capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Wait until a pooled connection is released
    Block,

    /// Fail the acquisition immediately
    Reject,

    /// Open an unpooled extra connection
    CreateNew,
}

/// Sizing and timeout settings consumed by the connection pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionPoolConfig {
    /// Maximum number of pooled connections (valid range 1..=1000)
    pub max_pool_size: u32,

    /// Minimum number of connections kept open (valid range 0..=100)
    pub min_pool_size: u32,

    /// Timeout for establishing a single connection
    pub connection_timeout: Duration,

    /// How long an idle connection may sit in the pool
    pub idle_timeout: Duration,

    /// Maximum lifetime of a pooled connection
    pub max_connection_lifetime: Duration,

    /// Validate connections when they are taken from the pool
    pub validate_on_acquire: bool,

    /// Interval between pool maintenance sweeps
    pub cleanup_interval: Duration,

    /// Whether pooling is enabled at all
    pub enabled: bool,

    /// Behavior when the pool is exhausted
    pub overflow_policy: OverflowPolicy,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_pool_size: 10,
            min_pool_size: 0,
            connection_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            max_connection_lifetime: Duration::from_secs(3600),
            validate_on_acquire: true,
            cleanup_interval: Duration::from_secs(60),
            enabled: true,
            overflow_policy: OverflowPolicy::Block,
        }
    }
}

impl ConnectionPoolConfig {
    /// Extract pool settings from a merged parameter map.
    ///
    /// Absent keys leave the default in place. Integer keys
    /// (`maxpoolsize` / `max_pool_size`) that fail to parse are ignored
    /// with a warning; duration keys (`waitingforidlesessiontimeout` /
    /// `pool_idle_timeout` and `expirationtimeout` / `pool_max_lifetime`)
    /// are strict and propagate the parse failure.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = first_present(params, &["maxpoolsize", "max_pool_size"]) {
            match value.trim().parse::<u32>() {
                Ok(size) => config.max_pool_size = size,
                Err(_) => warn!(value, "ignoring unparseable max pool size, keeping default"),
            }
        }

        if let Some(value) = first_present(params, &["waitingforidlesessiontimeout", "pool_idle_timeout"])
        {
            config.idle_timeout = parse_duration(value)?;
        }

        if let Some(value) = first_present(params, &["expirationtimeout", "pool_max_lifetime"]) {
            config.max_connection_lifetime = parse_duration(value)?;
        }

        Ok(config)
    }
}

/// Parse a textual duration.
///
/// Accepts a bare non-negative base-10 integer (whole seconds) or an
/// integer with an `s`, `m`, or `h` suffix (case-insensitive) denoting
/// seconds, minutes, or hours. Decimals and negative values are rejected.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDurationFormat`] for anything else.
pub fn parse_duration(text: &str) -> Result<Duration, ConfigError> {
    let trimmed = text.trim();
    let invalid = || ConfigError::InvalidDurationFormat {
        value: text.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid());
    }

    let (number_part, seconds_per_unit) = match trimmed.chars().last() {
        Some(unit) if unit.is_ascii_alphabetic() => {
            let multiplier = match unit.to_ascii_lowercase() {
                's' => 1,
                'm' => 60,
                'h' => 3600,
                _ => return Err(invalid()),
            };
            (&trimmed[..trimmed.len() - 1], multiplier)
        }
        _ => (trimmed, 1),
    };

    let count: u64 = number_part.parse().map_err(|_| invalid())?;
    let seconds = count.checked_mul(seconds_per_unit).ok_or_else(invalid)?;
    Ok(Duration::from_secs(seconds))
}
