use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_URL, DEFAULT_API_VERSION,
    DEFAULT_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, MIN_REQUEST_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Platform GraphQL API settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// GraphQL endpoint
    pub api_url: String,
    /// Sent as the `API-Version` header; empty omits the header
    pub api_version: String,
    /// Account subdomain used to build item URLs in link columns
    pub account_subdomain: String,
    /// Per-request timeout for API calls
    pub request_timeout_secs: u64,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            api_url: String::from(DEFAULT_API_URL),
            api_version: String::from(DEFAULT_API_VERSION),
            account_subdomain: String::new(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl PlatformConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ConfigError::platform(format!(
                "platform.api_url must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }

        if self.account_subdomain.trim().is_empty() {
            return Err(ConfigError::platform(
                "platform.account_subdomain is required (RB_PLATFORM_ACCOUNT_SUBDOMAIN or MONDAY_ACCOUNT_SUBDOMAIN)",
            ));
        }

        if self.account_subdomain.contains(['/', '.', ':']) {
            return Err(ConfigError::platform(format!(
                "platform.account_subdomain must be a bare subdomain, got '{}'",
                self.account_subdomain
            )));
        }

        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::platform(format!(
                "platform.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn api_version(&self) -> Option<&str> {
        let version = self.api_version.trim();
        (!version.is_empty()).then_some(version)
    }
}
