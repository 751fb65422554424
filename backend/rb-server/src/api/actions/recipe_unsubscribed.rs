use crate::AppState;
use crate::api::error::Result as ActionResult;
use crate::api::extractors::auth_session::AuthSession;
use crate::api::outcome::{ActionOutcome, finish};

use axum::{Json, extract::State};
use log::info;
use serde_json::Value;

const ACTION: &str = "recipe_unsubscribed";

/// POST /monday/recipe_unsubscribed
///
/// Nothing is kept per subscription, so there is nothing to tear down.
pub async fn recipe_unsubscribed(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
) -> ActionResult<Json<Value>> {
    info!(
        "{} by account {} user {}",
        ACTION, session.account_id, session.user_id
    );

    finish(&state, ACTION, Ok(ActionOutcome::Completed))
}
