use crate::TwinLookupPolicy;

use rb_config::Config;

use std::time::Duration;

/// Per-action tunables taken from config at startup
#[derive(Debug, Clone)]
pub struct ActionSettings {
    /// Account subdomain used in link column URLs
    pub account_subdomain: String,
    pub twin_lookup: TwinLookupPolicy,
    /// Wait between answering a webhook and firing its trigger callbacks
    pub callback_delay: Duration,
}

impl ActionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            account_subdomain: config.platform.account_subdomain.clone(),
            twin_lookup: TwinLookupPolicy::from(&config.twin_lookup),
            callback_delay: config.callback.delay(),
        }
    }
}
