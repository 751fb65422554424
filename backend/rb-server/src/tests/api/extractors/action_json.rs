use crate::ActionError;
use crate::api::extractors::action_json::ActionJson;
use crate::api::requests::{action_request::ActionRequest, set_month_input::SetMonthInput};

use axum::{
    body::Body,
    extract::FromRequest,
    http::{Request, header::CONTENT_TYPE},
};

fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn given_valid_payload_when_extracted_then_input_fields_parsed() {
    let request = json_request(
        r#"{"payload":{"inputFields":{"boardId":"100","itemId":5,"nameContains":"draft","columnId":"date4"}}}"#,
    );

    let ActionJson(parsed) = ActionJson::<ActionRequest<SetMonthInput>>::from_request(request, &())
        .await
        .unwrap();

    let input = parsed.payload.input_fields;
    assert_eq!(input.board_id, 100);
    assert_eq!(input.item_id, 5);
    assert_eq!(input.name_contains, "draft");
    assert_eq!(input.column_id, "date4");
}

#[tokio::test]
async fn given_missing_input_field_when_extracted_then_invalid_request() {
    let request = json_request(r#"{"payload":{"inputFields":{"boardId":100}}}"#);

    let result = ActionJson::<ActionRequest<SetMonthInput>>::from_request(request, &()).await;

    assert!(matches!(result, Err(ActionError::InvalidRequest { .. })));
}

#[tokio::test]
async fn given_malformed_json_when_extracted_then_invalid_request() {
    let request = json_request("{not json");

    let result = ActionJson::<ActionRequest<SetMonthInput>>::from_request(request, &()).await;

    assert!(matches!(result, Err(ActionError::InvalidRequest { .. })));
}
