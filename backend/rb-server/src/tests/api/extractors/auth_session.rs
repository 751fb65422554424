use crate::AuthSession;
use crate::tests::{TEST_SECRET, offline_state};

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode, header::AUTHORIZATION},
    response::IntoResponse,
};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;

fn mint(secret: &str) -> String {
    let claims = json!({
        "accountId": 11,
        "userId": 22,
        "shortLivedToken": "slt-abc",
        "exp": chrono::Utc::now().timestamp() + 3600,
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[tokio::test]
async fn given_signed_header_token_when_extracted_then_session_returned() {
    let state = offline_state();
    let request = Request::builder()
        .header(AUTHORIZATION, mint(TEST_SECRET))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let AuthSession(session) = AuthSession::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(session.account_id, 11);
    assert_eq!(session.user_id, 22);
    assert_eq!(session.token(), "slt-abc");
}

#[tokio::test]
async fn given_query_token_when_extracted_then_session_returned() {
    let state = offline_state();
    let request = Request::builder()
        .uri(format!("/monday/set_month?token={}", mint(TEST_SECRET)))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthSession::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn given_no_token_when_extracted_then_401_not_authenticated() {
    let state = offline_state();
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let rejection = AuthSession::from_request_parts(&mut parts, &state)
        .await
        .err()
        .unwrap();

    let response = rejection.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn given_token_signed_with_other_secret_when_extracted_then_rejected() {
    let state = offline_state();
    let request = Request::builder()
        .header(AUTHORIZATION, format!("Bearer {}", mint("someone-else")))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthSession::from_request_parts(&mut parts, &state).await;

    assert!(result.is_err());
}
