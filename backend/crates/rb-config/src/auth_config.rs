use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// App signing secret: verifies inbound JWTs and authorizes outbound
    /// trigger callbacks
    pub signing_secret: Option<String>,
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.signing_secret.as_deref() {
            Some(secret) if !secret.trim().is_empty() => Ok(()),
            Some(_) => Err(ConfigError::auth("auth.signing_secret cannot be empty")),
            None => Err(ConfigError::auth(
                "auth.signing_secret is required (RB_AUTH_SIGNING_SECRET or MONDAY_SIGNING_SECRET)",
            )),
        }
    }

    /// Secret bytes for JWT verification; empty when unset
    pub fn signing_secret_bytes(&self) -> &[u8] {
        self.signing_secret.as_deref().unwrap_or_default().as_bytes()
    }
}
