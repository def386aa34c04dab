// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{Duration, Utc};
use serde_json::json;
use wiremock::{MockServer, Request};
use withings_client::{form, Config, Token, WithingsClient};

pub const CLIENT_ID: &str = "client!+ID";
pub const CLIENT_SECRET: &str = "SECRET?%Gclient";
pub const REDIRECT_URL: &str = "http://localhost/callback";

/// Start a mock server and a client pointed at it.
#[allow(dead_code)]
pub async fn init_test() -> (MockServer, WithingsClient) {
    let mock_server = MockServer::start().await;
    let config =
        Config::new(CLIENT_ID, CLIENT_SECRET, REDIRECT_URL).with_api_base_url(mock_server.uri());
    (mock_server, WithingsClient::new(config))
}

/// Read a form field from a recorded request body.
#[allow(dead_code)]
pub fn form_field(req: &Request, key: &str) -> Option<String> {
    let body = std::str::from_utf8(&req.body).ok()?;
    form::decode(body)
        .ok()?
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

/// Matcher on the `action` form field.
#[allow(dead_code)]
pub fn action(name: &'static str) -> impl Fn(&Request) -> bool + Send + Sync + 'static {
    move |req: &Request| form_field(req, "action").as_deref() == Some(name)
}

/// Matcher on the `offset` form field; `None` means the field is absent.
#[allow(dead_code)]
pub fn offset(expected: Option<&'static str>) -> impl Fn(&Request) -> bool + Send + Sync + 'static {
    move |req: &Request| form_field(req, "offset").as_deref() == expected
}

/// A token whose access token is still valid.
#[allow(dead_code)]
pub fn fresh_token() -> Token {
    let mut token = Token {
        user_id: 363,
        access_token: "old_access".to_string(),
        refresh_token: "old_refresh".to_string(),
        expires_in: 10800,
        token_type: "Bearer".to_string(),
        ..Default::default()
    };
    token.stamp(Utc::now() - Duration::minutes(5));
    token
}

/// A token whose access token expired but whose refresh token is usable.
#[allow(dead_code)]
pub fn expired_token() -> Token {
    let mut token = fresh_token();
    token.stamp(Utc::now() - Duration::hours(4));
    token
}

/// Envelope returned by the token endpoint.
#[allow(dead_code)]
pub fn token_envelope(access: &str, refresh: &str) -> serde_json::Value {
    json!({
        "status": 0,
        "body": {
            "userid": "363",
            "access_token": access,
            "refresh_token": refresh,
            "expires_in": 10800,
            "scope": "user.info,user.metrics,user.activity",
            "csrf_token": "csrf",
            "token_type": "Bearer"
        }
    })
}

#[allow(dead_code)]
pub fn ok(body: serde_json::Value) -> serde_json::Value {
    json!({ "status": 0, "body": body })
}
