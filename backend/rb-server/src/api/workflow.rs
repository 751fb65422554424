//! Steps shared by several actions.

use crate::api::error::{ActionError, Result as ActionResult};
use crate::{AppState, poll_until_found};

use rb_core::{CoreError, TwinRef, name_passes_gate};
use rb_monday::TriggerOutput;

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, warn};

/// Fetch the item's name and apply the name-contains gate
pub async fn passes_name_gate(
    state: &AppState,
    token: &str,
    item_id: i64,
    name_contains: &str,
) -> ActionResult<bool> {
    let name = state.monday.get_item_name(token, item_id).await?;
    let passes = name_passes_gate(&name, name_contains);

    debug!(
        "Item {} name gate '{}': {}",
        item_id,
        name_contains,
        if passes { "pass" } else { "match, skipping" }
    );

    Ok(passes)
}

/// Find the item linked to `item_id` through the link column.
///
/// On a single board the link column of the item itself names the twin.
/// Across boards the twin is the item on `another_board_id` whose link
/// column points back at `item_id`; it may not exist yet, so the lookup is
/// polled under the configured policy.
pub async fn resolve_twin(
    state: &AppState,
    token: &str,
    board_id: i64,
    another_board_id: i64,
    item_id: i64,
    link_column_id: &str,
) -> ActionResult<TwinRef> {
    if board_id == another_board_id {
        let raw = state
            .monday
            .get_column_value(token, item_id, link_column_id)
            .await?
            .ok_or_else(|| CoreError::MissingColumnValue {
                item_id,
                column_id: link_column_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        return Ok(TwinRef::from_link_column_value(&raw)?);
    }

    let encoded = TwinRef::new(board_id, item_id).encode();
    let encoded = encoded.as_str();
    let monday = state.monday.as_ref();
    let mut shutdown = state.shutdown.subscribe_guard();

    let twin_item_id = poll_until_found(
        &state.settings.twin_lookup,
        "twin lookup",
        &mut shutdown,
        &state.metrics,
        move || monday.find_item_id_by_column_value(token, another_board_id, link_column_id, encoded),
    )
    .await?;

    Ok(TwinRef::new(another_board_id, twin_item_id))
}

/// The webhook URL of recipe lifecycle and mapping calls is mandatory
#[track_caller]
pub fn require_webhook_url(webhook_url: Option<String>) -> ActionResult<String> {
    webhook_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| ActionError::invalid_request("payload.webhookUrl is required"))
}

/// Fire trigger callbacks one after another; failures are logged, not retried
pub async fn fire_triggers(state: AppState, webhook_url: String, outputs: Vec<TriggerOutput>) {
    let total = outputs.len();
    let mut failed = 0;

    for output in &outputs {
        match state.trigger.fire(&webhook_url, output).await {
            Ok(()) => state.metrics.trigger_sent(),
            Err(e) => {
                failed += 1;
                state.metrics.trigger_failed();
                warn!("Trigger callback {:?} failed: {}", output, e);
            }
        }
    }

    debug!(
        "Fired {} trigger callbacks ({} failed)",
        total - failed,
        failed
    );
}
