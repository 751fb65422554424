use crate::AppState;
use crate::api::error::Result as ActionResult;
use crate::api::extractors::{action_json::ActionJson, auth_session::AuthSession};
use crate::api::outcome::{ActionOutcome, finish};
use crate::api::requests::{
    action_request::ActionRequest, assign_creator_input::AssignCreatorInput,
};
use crate::api::workflow::passes_name_gate;

use rb_core::person_assignment_value;

use axum::{Json, extract::State};
use log::{debug, info};
use serde_json::Value;

const ACTION: &str = "assign_creator";

/// POST /monday/assign_creator
pub async fn assign_creator(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    ActionJson(request): ActionJson<ActionRequest<AssignCreatorInput>>,
) -> ActionResult<Json<Value>> {
    let input = request.payload.input_fields;
    debug!("{} started: {:?}", ACTION, input);

    let result = run(&state, session.token(), &input).await;
    finish(&state, ACTION, result)
}

async fn run(
    state: &AppState,
    token: &str,
    input: &AssignCreatorInput,
) -> ActionResult<ActionOutcome> {
    if !passes_name_gate(state, token, input.item_id, &input.name_contains).await? {
        return Ok(ActionOutcome::skipped(format!(
            "item {} name contains '{}'",
            input.item_id, input.name_contains
        )));
    }

    let creator_id = state
        .monday
        .get_item_creator_id(token, input.item_id)
        .await?;

    state
        .monday
        .change_column_value(
            token,
            input.board_id,
            input.item_id,
            &input.column_id,
            Some(&person_assignment_value(creator_id)),
        )
        .await?;

    info!(
        "Assigned creator {} to column '{}' of item {}",
        creator_id, input.column_id, input.item_id
    );

    Ok(ActionOutcome::Completed)
}
