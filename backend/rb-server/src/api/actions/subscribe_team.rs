use crate::AppState;
use crate::api::error::Result as ActionResult;
use crate::api::extractors::{action_json::ActionJson, auth_session::AuthSession};
use crate::api::outcome::{ActionOutcome, finish};
use crate::api::requests::{
    action_request::ActionRequest, subscribe_team_input::SubscribeTeamInput,
};

use axum::{Json, extract::State};
use log::{debug, info};
use serde_json::Value;

const ACTION: &str = "subscribe_team";

/// POST /monday/subscribe_team
pub async fn subscribe_team(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    ActionJson(request): ActionJson<ActionRequest<SubscribeTeamInput>>,
) -> ActionResult<Json<Value>> {
    let input = request.payload.input_fields;
    debug!("{} started: {:?}", ACTION, input);

    let result = run(&state, session.token(), &input).await;
    finish(&state, ACTION, result)
}

async fn run(
    state: &AppState,
    token: &str,
    input: &SubscribeTeamInput,
) -> ActionResult<ActionOutcome> {
    let member_ids = state
        .monday
        .get_team_member_ids(token, input.team_id)
        .await?;

    state
        .monday
        .add_subscribers_to_board(token, input.board_id, &member_ids)
        .await?;

    info!(
        "Subscribed {} members of team {} to board {}",
        member_ids.len(),
        input.team_id,
        input.board_id
    );

    Ok(ActionOutcome::Completed)
}
