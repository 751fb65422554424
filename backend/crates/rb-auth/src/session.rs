use crate::Claims;

use std::fmt;

/// Verified caller context available to action handlers
#[derive(Clone)]
pub struct Session {
    pub account_id: i64,
    pub user_id: i64,
    pub back_to_url: Option<String>,
    pub short_lived_token: String,
}

impl Session {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            account_id: claims.account_id,
            user_id: claims.user_id,
            back_to_url: claims.back_to_url,
            short_lived_token: claims.short_lived_token,
        }
    }

    /// Token for platform API calls made on behalf of this session
    pub fn token(&self) -> &str {
        &self.short_lived_token
    }
}

// Keeps the API token out of logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("account_id", &self.account_id)
            .field("user_id", &self.user_id)
            .field("back_to_url", &self.back_to_url)
            .field("short_lived_token", &"<redacted>")
            .finish()
    }
}
