use crate::AppState;
use crate::api::error::Result as ActionResult;
use crate::api::extractors::{action_json::ActionJson, auth_session::AuthSession};
use crate::api::outcome::{ActionOutcome, finish};
use crate::api::requests::recipe_request::RecipeRequest;
use crate::api::workflow::{fire_triggers, require_webhook_url};

use rb_monday::TriggerOutput;

use axum::{Json, extract::State};
use log::info;
use serde_json::Value;

const ACTION: &str = "recipe_subscribed";

/// POST /monday/recipe_subscribed
///
/// Fire the new recipe once, without output fields, after the callback delay.
pub async fn recipe_subscribed(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    ActionJson(request): ActionJson<RecipeRequest>,
) -> ActionResult<Json<Value>> {
    info!(
        "{} by account {} user {}",
        ACTION, session.account_id, session.user_id
    );

    let result = require_webhook_url(request.payload.webhook_url).map(|webhook_url| {
        let task = state.tasks.spawn_deferred(
            ACTION,
            state.settings.callback_delay,
            fire_triggers(state.clone(), webhook_url, vec![TriggerOutput::empty()]),
        );
        info!(
            "Scheduled subscription trigger (task {} '{}')",
            task.id(),
            task.label()
        );
        ActionOutcome::Completed
    });

    finish(&state, ACTION, result)
}
