#![allow(dead_code)]

//! Test infrastructure for rb-server action tests

use rb_auth::JwtValidator;
use rb_config::PlatformConfig;
use rb_monday::{MondayClient, TriggerClient};
use rb_server::{
    ActionSettings, AppState, BackgroundTasks, Metrics, ShutdownCoordinator, TwinLookupPolicy,
    build_router,
};

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode, header::AUTHORIZATION, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::{Match, MockServer, ResponseTemplate};

pub const SIGNING_SECRET: &str = "integration-signing-secret";
pub const SHORT_LIVED_TOKEN: &str = "short-lived-token";

/// AppState with the platform API pointed at `server` and short delays
pub fn create_test_app_state(server: &MockServer) -> AppState {
    let platform = PlatformConfig {
        api_url: format!("{}/v2", server.uri()),
        api_version: "2024-10".to_string(),
        account_subdomain: "acme".to_string(),
        request_timeout_secs: 5,
    };
    let metrics = Metrics::new();

    AppState {
        monday: Arc::new(MondayClient::new(&platform).unwrap()),
        trigger: Arc::new(TriggerClient::new(SIGNING_SECRET, Duration::from_secs(5)).unwrap()),
        jwt_validator: Arc::new(JwtValidator::with_hs256(SIGNING_SECRET.as_bytes())),
        settings: ActionSettings {
            account_subdomain: "acme".to_string(),
            twin_lookup: TwinLookupPolicy {
                max_attempts: Some(20),
                timeout: Some(Duration::from_secs(5)),
                ..TwinLookupPolicy::fixed(Duration::from_millis(10))
            },
            callback_delay: Duration::from_millis(10),
        },
        tasks: BackgroundTasks::new(metrics.clone()),
        shutdown: ShutdownCoordinator::new(),
        metrics,
    }
}

/// Session JWT as the platform would sign it
pub fn mint_token(secret: &str) -> String {
    let claims = json!({
        "accountId": 1001,
        "userId": 2002,
        "shortLivedToken": SHORT_LIVED_TOKEN,
        "iat": chrono::Utc::now().timestamp(),
        "exp": chrono::Utc::now().timestamp() + 3600,
    });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// POST an authenticated action body and return status plus JSON body
pub async fn post_action(state: &AppState, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(AUTHORIZATION, mint_token(SIGNING_SECRET))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(state, request).await
}

pub async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
    let app = build_router(state.clone());
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// `{"payload":{"inputFields":..}}`
pub fn action_body(input_fields: Value) -> Value {
    json!({ "payload": { "inputFields": input_fields } })
}

pub fn graphql_data(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
}

/// Matches a GraphQL request whose document contains `fragment`.
///
/// Whitespace in the document is collapsed to single spaces before matching.
pub struct GraphQlOperation(&'static str);

pub fn operation(fragment: &'static str) -> GraphQlOperation {
    GraphQlOperation(fragment)
}

impl Match for GraphQlOperation {
    fn matches(&self, request: &wiremock::Request) -> bool {
        serde_json::from_slice::<Value>(&request.body)
            .ok()
            .and_then(|body| {
                body["query"]
                    .as_str()
                    .map(|query| query.split_whitespace().collect::<Vec<_>>().join(" "))
            })
            .is_some_and(|query| query.contains(self.0))
    }
}

pub const ITEM_NAME: &str = "items(ids: $itemId) { name }";
pub const ITEM_CREATOR: &str = "creator { id }";
pub const ITEM_FIELDS: &str = "column_values { id value";
pub const COLUMN_VALUE: &str = "column_values(ids: $columnId)";
pub const CHANGE_COLUMN_VALUE: &str = "change_column_value(";
pub const CREATE_ITEM: &str = "create_item(";
pub const BOARD_NAME: &str = "boards(ids: $boardId) { name }";
pub const BOARD_COLUMNS: &str = "columns { id title type";
pub const BOARD_GROUPS: &str = "groups { id title }";
pub const BOARD_ITEMS: &str = "items_page(limit";
pub const ITEMS_BY_COLUMN_VALUE: &str = "items_page_by_column_values(";
pub const TEAM_MEMBERS: &str = "teams(ids";
pub const ADD_USERS_TO_BOARD: &str = "add_users_to_board(";
