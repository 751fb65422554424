use crate::AppState;
use crate::api::error::Result as ActionResult;

use axum::Json;
use log::info;
use serde_json::{Value, json};

/// How an action ended when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// A precondition was not met; the platform still sees success
    Skipped(String),
}

impl ActionOutcome {
    pub fn skipped<S: Into<String>>(reason: S) -> Self {
        ActionOutcome::Skipped(reason.into())
    }
}

/// Record the outcome and turn it into the `200 {}` body
pub fn finish(
    state: &AppState,
    action: &'static str,
    result: ActionResult<ActionOutcome>,
) -> ActionResult<Json<Value>> {
    match result {
        Ok(ActionOutcome::Completed) => {
            info!("{} completed", action);
            state.metrics.action_completed(action);
            Ok(Json(json!({})))
        }
        Ok(ActionOutcome::Skipped(reason)) => {
            info!("{} skipped: {}", action, reason);
            state.metrics.action_skipped(action);
            Ok(Json(json!({})))
        }
        Err(e) => {
            state.metrics.action_failed(action);
            Err(e)
        }
    }
}
