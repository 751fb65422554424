use crate::ActionError;
use crate::api::error::INTERNAL_ERROR_MESSAGE;

use rb_core::{ColumnLookup, CoreError};
use rb_monday::ClientError;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

async fn response_parts(error: ActionError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_core_error_when_converted_then_500_with_generic_message() {
    let error = ActionError::from(CoreError::column_not_found(7, ColumnLookup::title("Link")));

    let (status, json) = response_parts(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "message": INTERNAL_ERROR_MESSAGE }));
}

#[tokio::test]
async fn given_client_error_when_converted_then_detail_not_leaked() {
    let error = ActionError::from(ClientError::missing_data("item 42"));

    let (status, json) = response_parts(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "internal server error");
    assert!(!json.to_string().contains("item 42"));
}

#[tokio::test]
async fn given_missing_target_column_when_converted_then_500() {
    let error = ActionError::target_column_missing("Priority");
    assert!(error.to_string().contains("Target column 'Priority' doesn't exist"));

    let (status, _) = response_parts(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn given_invalid_request_when_converted_then_500() {
    let (status, json) = response_parts(ActionError::invalid_request("bad body")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], INTERNAL_ERROR_MESSAGE);
}
