use crate::AppState;
use crate::api::error::Result as ActionResult;
use crate::api::extractors::{action_json::ActionJson, auth_session::AuthSession};
use crate::api::outcome::{ActionOutcome, finish};
use crate::api::requests::{action_request::ActionRequest, set_month_input::SetMonthInput};
use crate::api::workflow::passes_name_gate;

use rb_core::current_month_start_value;

use axum::{Json, extract::State};
use log::{debug, info};
use serde_json::Value;

const ACTION: &str = "set_month";

/// POST /monday/set_month
///
/// Stamp the first day of the current UTC month into a date column.
pub async fn set_month(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    ActionJson(request): ActionJson<ActionRequest<SetMonthInput>>,
) -> ActionResult<Json<Value>> {
    let input = request.payload.input_fields;
    debug!("{} started: {:?}", ACTION, input);

    let result = run(&state, session.token(), &input).await;
    finish(&state, ACTION, result)
}

async fn run(state: &AppState, token: &str, input: &SetMonthInput) -> ActionResult<ActionOutcome> {
    if !passes_name_gate(state, token, input.item_id, &input.name_contains).await? {
        return Ok(ActionOutcome::skipped(format!(
            "item {} name contains '{}'",
            input.item_id, input.name_contains
        )));
    }

    let value = current_month_start_value();

    state
        .monday
        .change_column_value(
            token,
            input.board_id,
            input.item_id,
            &input.column_id,
            Some(&value),
        )
        .await?;

    info!(
        "Set column '{}' of item {} to {}",
        input.column_id, input.item_id, value
    );

    Ok(ActionOutcome::Completed)
}
