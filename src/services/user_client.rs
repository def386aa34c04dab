// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user Withings client with transparent access token refresh.
//!
//! The token is the only mutable state. It lives behind one async mutex
//! which is held for the whole check-expiry, refresh and build-request
//! sequence, so concurrent callers holding an expired token trigger a
//! single refresh. Refresh tokens are single use, so a second refresh with
//! the old one would fail and invalidate the first caller's new pair.

use chrono::Utc;
use reqwest::Method;
use tokio::sync::Mutex;

use crate::envelope;
use crate::error::{ClientError, Result};
use crate::form::FormParams;
use crate::models::Token;
use crate::services::withings::Endpoints;

/// A Withings API client authenticated as one user.
///
/// Cheap to share behind an `Arc`; every method takes `&self`.
pub struct UserClient {
    client_id: String,
    client_secret: String,
    token: Mutex<Token>,
    pub(crate) endpoints: Endpoints,
    http: reqwest::Client,
}

impl UserClient {
    pub(crate) fn new(
        client_id: String,
        client_secret: String,
        token: Token,
        endpoints: Endpoints,
        http: reqwest::Client,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            token: Mutex::new(token),
            endpoints,
            http,
        }
    }

    /// Build an authorized request, refreshing the access token first if it
    /// is missing or expired.
    ///
    /// Fails without any network traffic when there is no refresh token or
    /// the refresh token is past its one-year lifetime.
    pub async fn authorized_request(
        &self,
        method: Method,
        url: &str,
        form: &FormParams,
    ) -> Result<reqwest::RequestBuilder> {
        let mut token = self.token.lock().await;
        let now = Utc::now();

        if token.refresh_token.is_empty() {
            return Err(ClientError::MissingCredential);
        }
        if token.refresh_token_expired(now) {
            return Err(ClientError::CredentialExpired);
        }
        if token.access_token_expired(now) {
            tracing::info!(user_id = token.user_id, "Access token expired, refreshing");
            *token = self.request_refresh(&token.refresh_token).await?;
        }

        Ok(self
            .http
            .request(method, url)
            .bearer_auth(&token.access_token)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(form.encode()))
    }

    /// Force a refresh of the access token.
    ///
    /// Useful for callers that persist the token between runs: refresh, then
    /// store the result of [`UserClient::token`].
    pub async fn refresh_token(&self) -> Result<Token> {
        let mut token = self.token.lock().await;
        if token.refresh_token.is_empty() {
            return Err(ClientError::MissingCredential);
        }
        if token.refresh_token_expired(Utc::now()) {
            return Err(ClientError::CredentialExpired);
        }
        *token = self.request_refresh(&token.refresh_token).await?;
        Ok(token.clone())
    }

    /// Snapshot of the current token.
    pub async fn token(&self) -> Token {
        self.token.lock().await.clone()
    }

    /// Exchange a refresh token for a new token pair.
    ///
    /// Callers must hold the token lock. Nothing is mutated here, so a
    /// failure leaves the stored token untouched.
    async fn request_refresh(&self, refresh_token: &str) -> Result<Token> {
        let mut form = FormParams::action("requesttoken");
        form.push("client_id", self.client_id.as_str())
            .push("client_secret", self.client_secret.as_str())
            .push("grant_type", "refresh_token")
            .push("refresh_token", refresh_token);

        let issued_at = Utc::now();
        let request = self
            .http
            .post(&self.endpoints.oauth2)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(form.encode());

        let mut token: Token = envelope::send(request).await?;
        token.stamp(issued_at);

        tracing::info!(user_id = token.user_id, "Access token refreshed");
        Ok(token)
    }

    /// Encode, authorize, send and decode one API call.
    pub(crate) async fn call<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        form: &FormParams,
    ) -> Result<T> {
        let request = self.authorized_request(Method::POST, url, form).await?;
        envelope::send(request).await
    }
}

impl std::fmt::Debug for UserClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserClient")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}
