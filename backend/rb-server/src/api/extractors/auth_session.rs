//! Axum extractor for the platform-signed session token

use crate::AppState;

use rb_auth::{Session, extract_token};

use std::future::Future;

use axum::{
    Json,
    extract::{FromRequestParts, Query},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

/// Verified session of the platform user the action runs for
pub struct AuthSession(pub Session);

/// Rejection for requests without a valid token
#[derive(Debug)]
pub struct Unauthenticated;

impl IntoResponse for Unauthenticated {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "not authenticated" })),
        )
            .into_response()
    }
}

#[derive(Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = Unauthenticated;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let authorization = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let query_token = Query::<TokenQuery>::try_from_uri(&parts.uri)
                .ok()
                .and_then(|Query(query)| query.token);

            let token = extract_token(authorization, query_token.as_deref()).map_err(|e| {
                log::warn!("Rejected {}: {}", parts.uri.path(), e);
                Unauthenticated
            })?;

            let session = state.jwt_validator.session(token).map_err(|e| {
                log::warn!("JWT validation failed for {}: {}", parts.uri.path(), e);
                Unauthenticated
            })?;

            log::debug!(
                "Authenticated account {} user {}",
                session.account_id,
                session.user_id
            );

            Ok(AuthSession(session))
        }
    }
}
