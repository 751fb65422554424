use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// Twin lookup constraints
pub const MIN_INTERVAL_MS: u64 = 10;
pub const MAX_INTERVAL_MS: u64 = 600_000;
pub const DEFAULT_INTERVAL_MS: u64 = 5000;

pub const MIN_BACKOFF_MULTIPLIER: f64 = 1.0;
pub const MAX_BACKOFF_MULTIPLIER: f64 = 10.0;
pub const DEFAULT_BACKOFF_MULTIPLIER: f64 = 1.0;

pub const MIN_MAX_INTERVAL_SECS: u64 = 1;
pub const MAX_MAX_INTERVAL_SECS: u64 = 3600;
pub const DEFAULT_MAX_INTERVAL_SECS: u64 = 60;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 0;
pub const DEFAULT_TIMEOUT_SECS: u64 = 0;
pub const DEFAULT_JITTER: bool = false;

/// Polling policy for finding an item's twin on another board.
///
/// The twin may not exist yet when another automation is still creating it,
/// so the lookup is repeated. Defaults poll every 5 seconds forever; a
/// multiplier above 1.0 turns that into exponential backoff capped at
/// `max_interval_secs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TwinLookupConfig {
    /// Delay before the second attempt in milliseconds
    pub interval_ms: u64,
    /// Growth factor applied to the delay after each miss
    pub backoff_multiplier: f64,
    /// Upper bound for the delay in seconds
    pub max_interval_secs: u64,
    /// Give up after this many attempts (0 = never)
    pub max_attempts: u32,
    /// Give up after this many seconds (0 = never)
    pub timeout_secs: u64,
    /// Randomize each delay by ±50%
    pub jitter: bool,
}

impl Default for TwinLookupConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
            max_interval_secs: DEFAULT_MAX_INTERVAL_SECS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            jitter: DEFAULT_JITTER,
        }
    }
}

impl TwinLookupConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.interval_ms < MIN_INTERVAL_MS || self.interval_ms > MAX_INTERVAL_MS {
            return Err(ConfigError::config(format!(
                "twin_lookup.interval_ms must be {}-{}, got {}",
                MIN_INTERVAL_MS, MAX_INTERVAL_MS, self.interval_ms
            )));
        }

        if self.backoff_multiplier < MIN_BACKOFF_MULTIPLIER
            || self.backoff_multiplier > MAX_BACKOFF_MULTIPLIER
        {
            return Err(ConfigError::config(format!(
                "twin_lookup.backoff_multiplier must be {}-{}, got {}",
                MIN_BACKOFF_MULTIPLIER, MAX_BACKOFF_MULTIPLIER, self.backoff_multiplier
            )));
        }

        if self.max_interval_secs < MIN_MAX_INTERVAL_SECS
            || self.max_interval_secs > MAX_MAX_INTERVAL_SECS
        {
            return Err(ConfigError::config(format!(
                "twin_lookup.max_interval_secs must be {}-{}, got {}",
                MIN_MAX_INTERVAL_SECS, MAX_MAX_INTERVAL_SECS, self.max_interval_secs
            )));
        }

        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn max_interval(&self) -> Duration {
        Duration::from_secs(self.max_interval_secs)
    }

    pub fn max_attempts(&self) -> Option<u32> {
        (self.max_attempts > 0).then_some(self.max_attempts)
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
