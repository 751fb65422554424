use rb_config::TwinLookupConfig;

use std::time::Duration;

/// How long and how often to look for a twin item that may not exist yet
#[derive(Debug, Clone, PartialEq)]
pub struct TwinLookupPolicy {
    /// Delay after the first miss
    pub interval: Duration,
    /// Growth factor for the delay after each further miss
    pub backoff_multiplier: f64,
    /// Upper bound for the delay
    pub max_interval: Duration,
    /// Give up after this many attempts; `None` polls until found
    pub max_attempts: Option<u32>,
    /// Give up after this much time; `None` has no deadline
    pub timeout: Option<Duration>,
    /// Randomize each delay by ±50%
    pub jitter: bool,
}

impl TwinLookupPolicy {
    /// Fixed delay, no limits
    pub fn fixed(interval: Duration) -> Self {
        Self {
            interval,
            backoff_multiplier: 1.0,
            max_interval: interval,
            max_attempts: None,
            timeout: None,
            jitter: false,
        }
    }

    /// Delay that follows `current` under exponential backoff
    pub fn next_delay(&self, current: Duration) -> Duration {
        Duration::from_secs_f64(
            (current.as_secs_f64() * self.backoff_multiplier)
                .min(self.max_interval.as_secs_f64()),
        )
    }

    /// Delay actually slept, with jitter applied when enabled
    pub fn sleep_for(&self, delay: Duration) -> Duration {
        if self.jitter {
            let jitter_factor = 0.5 + rand::random::<f64>(); // 0.5 to 1.5
            Duration::from_secs_f64(delay.as_secs_f64() * jitter_factor)
        } else {
            delay
        }
    }
}

impl From<&TwinLookupConfig> for TwinLookupPolicy {
    fn from(config: &TwinLookupConfig) -> Self {
        Self {
            interval: config.interval(),
            backoff_multiplier: config.backoff_multiplier,
            max_interval: config.max_interval().max(config.interval()),
            max_attempts: config.max_attempts(),
            timeout: config.timeout(),
            jitter: config.jitter,
        }
    }
}
