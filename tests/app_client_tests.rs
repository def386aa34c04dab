// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application client flows: code exchange, demo account, and rebuilding a
//! user client from a stored refresh token.

use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};
use withings_client::{verify_state, ClientError};

mod common;
use common::{action, form_field, init_test, ok, token_envelope, CLIENT_ID, CLIENT_SECRET};

fn hmac_hex(key: &str, message: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(key.as_bytes()).unwrap();
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[tokio::test]
async fn test_request_token_exchanges_code() {
    let (mock_server, client) = init_test().await;

    Mock::given(method("POST"))
        .and(path("/v2/oauth2"))
        .and(action("requesttoken"))
        .and(|req: &wiremock::Request| {
            form_field(req, "grant_type").as_deref() == Some("authorization_code")
                && form_field(req, "code").as_deref() == Some("auth code/1")
                && form_field(req, "redirect_uri").as_deref() == Some(common::REDIRECT_URL)
                && form_field(req, "client_id").as_deref() == Some(CLIENT_ID)
                && form_field(req, "client_secret").as_deref() == Some(CLIENT_SECRET)
        })
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(token_envelope("first_access", "first_refresh")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let before = Utc::now();
    let token = client.request_token("auth code/1").await.unwrap();

    assert_eq!(token.user_id, 363);
    assert_eq!(token.access_token, "first_access");
    assert_eq!(token.refresh_token, "first_refresh");
    assert_eq!(token.expires_in, 10800);
    assert_eq!(token.scope, "user.info,user.metrics,user.activity");
    assert!(token.refresh_token_created_at >= before);
    assert!(!token.access_token_expired(Utc::now()));
    assert_eq!(
        token.refresh_token_expires_at(),
        token.refresh_token_created_at + Duration::hours(8760)
    );
}

#[tokio::test]
async fn test_request_token_rejected_code() {
    let (mock_server, client) = init_test().await;

    Mock::given(method("POST"))
        .and(path("/v2/oauth2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 503,
            "body": {},
            "error": "Invalid Params: invalid code"
        })))
        .mount(&mock_server)
        .await;

    let err = client.request_token("stale").await.unwrap_err();
    match err {
        ClientError::RemoteApi { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message.as_deref(), Some("Invalid Params: invalid code"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_demo_user_signs_nonce() {
    let (mock_server, client) = init_test().await;

    Mock::given(method("POST"))
        .and(path("/v2/signature"))
        .and(action("getnonce"))
        .and(|req: &wiremock::Request| {
            let (Some(timestamp), Some(signature)) =
                (form_field(req, "timestamp"), form_field(req, "signature"))
            else {
                return false;
            };
            form_field(req, "client_id").as_deref() == Some(CLIENT_ID)
                && signature
                    == hmac_hex(CLIENT_SECRET, &format!("getnonce,{CLIENT_ID},{timestamp}"))
        })
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({ "nonce": "n-123" }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let expected_signature = hmac_hex(CLIENT_SECRET, &format!("getdemoaccess,{CLIENT_ID},n-123"));
    Mock::given(method("POST"))
        .and(path("/v2/oauth2"))
        .and(action("getdemoaccess"))
        .and(move |req: &wiremock::Request| {
            form_field(req, "nonce").as_deref() == Some("n-123")
                && form_field(req, "signature").as_deref() == Some(expected_signature.as_str())
                && form_field(req, "scope_oauth2").as_deref()
                    == Some("user.info,user.metrics,user.activity")
        })
        .respond_with(
            ResponseTemplate::new(200).set_body_json(token_envelope("demo_access", "demo_refresh")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let user = client.demo_user().await.unwrap();
    let token = user.token().await;
    assert_eq!(token.access_token, "demo_access");
    assert_eq!(token.refresh_token, "demo_refresh");
    assert!(token.access_token_created_at.is_some());
}

#[tokio::test]
async fn test_demo_user_nonce_failure() {
    let (mock_server, client) = init_test().await;

    Mock::given(method("POST"))
        .and(path("/v2/signature"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": 2554, "body": {} })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(path("/v2/oauth2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_envelope("a", "b")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = client.demo_user().await.unwrap_err();
    assert_eq!(err.remote_status(), Some(2554));
}

#[tokio::test]
async fn test_user_client_from_refresh_token() {
    let (mock_server, client) = init_test().await;

    Mock::given(method("POST"))
        .and(path("/v2/oauth2"))
        .and(action("requesttoken"))
        .and(|req: &wiremock::Request| {
            form_field(req, "grant_type").as_deref() == Some("refresh_token")
                && form_field(req, "refresh_token").as_deref() == Some("stored")
        })
        .respond_with(
            ResponseTemplate::new(200).set_body_json(token_envelope("live_access", "rotated")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let user = client
        .user_client_from_refresh_token("stored", Utc::now() - Duration::days(200))
        .await
        .unwrap();

    let token = user.token().await;
    assert_eq!(token.access_token, "live_access");
    assert_eq!(token.refresh_token, "rotated");
    assert!(!token.refresh_token_expired(Utc::now()));
}

#[tokio::test]
async fn test_user_client_from_expired_refresh_token() {
    let (mock_server, client) = init_test().await;

    let err = client
        .user_client_from_refresh_token("ancient", Utc::now() - Duration::days(400))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::CredentialExpired));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_authorization_state_round_trip() {
    let (_mock_server, client) = init_test().await;

    let first = client.authorization_url().unwrap();
    let second = client.authorization_url().unwrap();

    assert_ne!(first.state, second.state);
    assert!(first.url.contains(&format!("state={}", first.state)));
    assert!(first.url.contains("client_id=client%21%2BID"));
    assert!(verify_state(&first.state, &first.state));
    assert!(!verify_state(&first.state, &second.state));
}
