use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

const BEARER_PREFIX: &str = "Bearer ";

/// Pick the JWT out of a request.
///
/// The `Authorization` header wins; it may carry the raw token or a
/// `Bearer ` prefixed one. The `token` query parameter is the fallback.
#[track_caller]
pub fn extract_token<'a>(
    authorization: Option<&'a str>,
    query_token: Option<&'a str>,
) -> AuthErrorResult<&'a str> {
    let header_token = authorization
        .map(|value| value.strip_prefix(BEARER_PREFIX).unwrap_or(value).trim())
        .filter(|token| !token.is_empty());

    header_token
        .or_else(|| query_token.map(str::trim).filter(|token| !token.is_empty()))
        .ok_or_else(|| AuthError::MissingToken {
            location: ErrorLocation::from(Location::caller()),
        })
}
