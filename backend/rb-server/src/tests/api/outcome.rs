use crate::ActionError;
use crate::api::outcome::{ActionOutcome, finish};
use crate::tests::offline_state;

use serde_json::json;

#[test]
fn given_completed_outcome_when_finished_then_empty_object() {
    let state = offline_state();

    let body = finish(&state, "set_month", Ok(ActionOutcome::Completed)).unwrap();

    assert_eq!(body.0, json!({}));
}

#[test]
fn given_skipped_outcome_when_finished_then_empty_object() {
    let state = offline_state();

    let body = finish(
        &state,
        "set_month",
        Ok(ActionOutcome::skipped("item 1 name contains 'draft'")),
    )
    .unwrap();

    assert_eq!(body.0, json!({}));
}

#[test]
fn given_error_when_finished_then_error_passed_through() {
    let state = offline_state();

    let result = finish(
        &state,
        "set_month",
        Err(ActionError::invalid_request("nope")),
    );

    assert!(matches!(result, Err(ActionError::InvalidRequest { .. })));
}
