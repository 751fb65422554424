use crate::AppState;
use crate::api::error::{ActionError, Result as ActionResult};
use crate::api::extractors::{action_json::ActionJson, auth_session::AuthSession};
use crate::api::outcome::{ActionOutcome, finish};
use crate::api::requests::{action_request::ActionRequest, sync_item_input::SyncItemInput};
use crate::api::workflow::{passes_name_gate, resolve_twin};

use rb_core::{ColumnLookup, CoreError, column_by_title, convert_status_value, find_column};

use axum::{Json, extract::State};
use log::{debug, info};
use serde_json::Value;

const ACTION: &str = "sync_item";

/// POST /monday/sync_item
///
/// Copy one column value from an item to its twin. Status values travel as
/// labels because label indices differ between boards.
pub async fn sync_item(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    ActionJson(request): ActionJson<ActionRequest<SyncItemInput>>,
) -> ActionResult<Json<Value>> {
    let input = request.payload.input_fields;
    debug!("{} started: {:?}", ACTION, input);

    let result = run(&state, session.token(), &input).await;
    finish(&state, ACTION, result)
}

async fn run(state: &AppState, token: &str, input: &SyncItemInput) -> ActionResult<ActionOutcome> {
    if !passes_name_gate(state, token, input.item_id, &input.name_contains).await? {
        return Ok(ActionOutcome::skipped(format!(
            "item {} name contains '{}'",
            input.item_id, input.name_contains
        )));
    }

    let another_columns = state
        .monday
        .get_board_columns(token, input.another_board_id)
        .await?;
    let link_column = find_column(
        input.another_board_id,
        &another_columns,
        &ColumnLookup::title(input.link_column_title.as_str()),
    )?;

    // Writing the link column would sever the pairing.
    if input.column_id == link_column.id {
        return Ok(ActionOutcome::skipped(format!(
            "column '{}' is the link column",
            input.column_id
        )));
    }

    let twin = resolve_twin(
        state,
        token,
        input.board_id,
        input.another_board_id,
        input.item_id,
        &link_column.id,
    )
    .await?;

    let source_columns = state
        .monday
        .get_board_columns(token, input.board_id)
        .await?;
    let source_column = find_column(
        input.board_id,
        &source_columns,
        &ColumnLookup::id(input.column_id.as_str()),
    )?;

    let target_columns = state
        .monday
        .get_board_columns(token, twin.board_id)
        .await?;
    let target_column = column_by_title(&target_columns, &source_column.title)
        .ok_or_else(|| ActionError::target_column_missing(&source_column.title))?;

    let raw_value = state
        .monday
        .get_column_value(token, input.item_id, &input.column_id)
        .await?;

    let value = match raw_value {
        None => None,
        Some(ref raw) if source_column.is_status() => {
            Some(convert_status_value(source_column, raw)?)
        }
        Some(ref raw) => Some(
            serde_json::from_str::<Value>(raw)
                .map_err(|e| CoreError::invalid_column_value(&input.column_id, e))?,
        ),
    };

    state
        .monday
        .change_column_value(
            token,
            twin.board_id,
            twin.item_id,
            &target_column.id,
            value.as_ref(),
        )
        .await?;

    info!(
        "Synced column '{}' of item {} to column '{}' of item {} on board {}",
        input.column_id, input.item_id, target_column.id, twin.item_id, twin.board_id
    );

    Ok(ActionOutcome::Completed)
}
