use crate::AppState;
use crate::api::error::Result as ActionResult;
use crate::api::extractors::{action_json::ActionJson, auth_session::AuthSession};
use crate::api::outcome::{ActionOutcome, finish};
use crate::api::requests::{action_request::ActionRequest, clone_item_input::CloneItemInput};
use crate::api::workflow::passes_name_gate;

use rb_core::{
    ColumnLookup, LinkValue, clone_item_name, find_column, find_group_by_title,
    project_column_values,
};

use axum::{Json, extract::State};
use log::{debug, info};
use serde_json::Value;

const ACTION: &str = "clone_item";

/// POST /monday/clone_item
///
/// Copy an item onto another board. Columns are carried over by matching
/// title and the copy's link column points back at the original.
pub async fn clone_item(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    ActionJson(request): ActionJson<ActionRequest<CloneItemInput>>,
) -> ActionResult<Json<Value>> {
    let input = request.payload.input_fields;
    debug!("{} started: {:?}", ACTION, input);

    let result = run(&state, session.token(), &input).await;
    finish(&state, ACTION, result)
}

async fn run(state: &AppState, token: &str, input: &CloneItemInput) -> ActionResult<ActionOutcome> {
    if !passes_name_gate(state, token, input.item_id, &input.name_contains).await? {
        return Ok(ActionOutcome::skipped(format!(
            "item {} name contains '{}'",
            input.item_id, input.name_contains
        )));
    }

    let groups = state
        .monday
        .get_board_groups(token, input.target_board_id)
        .await?;
    let group = find_group_by_title(input.target_board_id, &groups, &input.target_group_title)?;

    let board_name = state.monday.get_board_name(token, input.board_id).await?;
    let item_name = clone_item_name(&board_name);

    let target_columns = state
        .monday
        .get_board_columns(token, input.target_board_id)
        .await?;
    let link_column = find_column(
        input.target_board_id,
        &target_columns,
        &ColumnLookup::title(input.link_column_title.as_str()),
    )?;

    let fields = state.monday.get_item_fields(token, input.item_id).await?;
    let link = LinkValue::for_item(
        &state.settings.account_subdomain,
        input.board_id,
        input.item_id,
    );
    let column_values = project_column_values(&fields, &target_columns, &link_column.id, &link)?;

    let new_item_id = state
        .monday
        .create_item(
            token,
            input.target_board_id,
            &group.id,
            &item_name,
            &column_values,
        )
        .await?;

    info!(
        "Cloned item {} to item {} on board {} ({} column values)",
        input.item_id,
        new_item_id,
        input.target_board_id,
        column_values.len()
    );

    Ok(ActionOutcome::Completed)
}
