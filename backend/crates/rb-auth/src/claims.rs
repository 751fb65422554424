use crate::{AuthError, Result as AuthErrorResult};

use rb_core::deserialize_id;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims signed by the platform on every action request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    #[serde(deserialize_with = "deserialize_id")]
    pub account_id: i64,
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: i64,
    /// Where the platform wants the user sent after an authorization flow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_to_url: Option<String>,
    /// API token scoped to this invocation
    #[serde(default)]
    pub short_lived_token: String,
    /// Expiration timestamp (Unix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Issued at timestamp (Unix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.short_lived_token.trim().is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "shortLivedToken".to_string(),
                message: "shortLivedToken cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.account_id <= 0 {
            return Err(AuthError::InvalidClaim {
                claim: "accountId".to_string(),
                message: format!("accountId must be positive, got {}", self.account_id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
