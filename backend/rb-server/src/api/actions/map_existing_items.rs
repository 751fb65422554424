use crate::AppState;
use crate::api::error::Result as ActionResult;
use crate::api::extractors::{action_json::ActionJson, auth_session::AuthSession};
use crate::api::outcome::{ActionOutcome, finish};
use crate::api::requests::{
    action_request::ActionRequest, map_existing_items_input::MapExistingItemsInput,
};
use crate::api::workflow::{fire_triggers, require_webhook_url};

use rb_monday::TriggerOutput;

use axum::{Json, extract::State};
use log::{debug, info};
use serde_json::Value;

const ACTION: &str = "map_existing_items";

/// POST /monday/map_existing_items
///
/// Fire the recipe once per item already on the board. The callbacks run
/// after the configured delay, once this request has been answered.
pub async fn map_existing_items(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    ActionJson(request): ActionJson<ActionRequest<MapExistingItemsInput>>,
) -> ActionResult<Json<Value>> {
    let payload = request.payload;
    debug!("{} started: {:?}", ACTION, payload.input_fields);

    let result = run(
        &state,
        session.token(),
        &payload.input_fields,
        payload.webhook_url,
    )
    .await;
    finish(&state, ACTION, result)
}

async fn run(
    state: &AppState,
    token: &str,
    input: &MapExistingItemsInput,
    webhook_url: Option<String>,
) -> ActionResult<ActionOutcome> {
    let webhook_url = require_webhook_url(webhook_url)?;
    let items = state.monday.get_board_items(token, input.board_id).await?;

    let outputs: Vec<TriggerOutput> = items
        .iter()
        .map(|item| TriggerOutput::for_item(input.board_id, item.id))
        .collect();

    let task = state.tasks.spawn_deferred(
        ACTION,
        state.settings.callback_delay,
        fire_triggers(state.clone(), webhook_url, outputs),
    );

    info!(
        "Scheduled {} trigger callbacks for board {} (task {} '{}')",
        items.len(),
        input.board_id,
        task.id(),
        task.label()
    );

    Ok(ActionOutcome::Completed)
}
