// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application-level Withings client.
//!
//! Handles:
//! - Authorization URLs with a random CSRF state
//! - Authorization code exchange
//! - Creating per-user clients (from a token, a stored refresh token, or the
//!   signed demo account flow)

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use ring::rand::{SecureRandom, SystemRandom};
use serde::Deserialize;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::config::Config;
use crate::envelope;
use crate::error::{ClientError, Result};
use crate::form::FormParams;
use crate::models::Token;
use crate::services::UserClient;

// Type alias for HMAC-SHA256
type HmacSha256 = Hmac<Sha256>;

/// Number of random bytes in an authorization state value.
const STATE_BYTES: usize = 64;

/// Fully resolved endpoint URLs.
#[derive(Debug, Clone)]
pub(crate) struct Endpoints {
    pub authorize: String,
    pub oauth2: String,
    pub signature: String,
    pub measure_v2: String,
    pub measure: String,
}

impl Endpoints {
    fn from_config(config: &Config) -> Self {
        let api = config.api_base_url.trim_end_matches('/');
        let account = config.account_base_url.trim_end_matches('/');
        Self {
            authorize: format!("{}/oauth2_user/authorize2", account),
            oauth2: format!("{}/v2/oauth2", api),
            signature: format!("{}/v2/signature", api),
            measure_v2: format!("{}/v2/measure", api),
            measure: format!("{}/measure", api),
        }
    }
}

/// Authorization URL plus the state value to check on the redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    pub url: String,
    pub state: String,
}

#[derive(Deserialize)]
struct NonceBody {
    nonce: String,
}

/// Withings client for the application as a whole.
#[derive(Clone)]
pub struct WithingsClient {
    config: Config,
    endpoints: Endpoints,
    http: reqwest::Client,
}

impl WithingsClient {
    /// Create a new client with OAuth credentials.
    pub fn new(config: Config) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client on top of a caller-configured `reqwest::Client`
    /// (timeouts, proxies, ...).
    pub fn with_http_client(config: Config, http: reqwest::Client) -> Self {
        let endpoints = Endpoints::from_config(&config);
        Self {
            config,
            endpoints,
            http,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the URL a user visits to authorize this application.
    ///
    /// Keep the returned `state` and compare it with [`verify_state`] when
    /// the redirect comes back.
    pub fn authorization_url(&self) -> Result<AuthorizationRequest> {
        let state = generate_state()?;
        let url = format!(
            "{}?response_type=code&client_id={}&scope={}&redirect_uri={}&state={}",
            self.endpoints.authorize,
            urlencoding::encode(&self.config.client_id),
            urlencoding::encode(&self.config.scopes),
            urlencoding::encode(&self.config.redirect_url),
            state
        );

        tracing::debug!(client_id = %self.config.client_id, "Built authorization URL");
        Ok(AuthorizationRequest { url, state })
    }

    /// Exchange an authorization code for the user's first token pair.
    pub async fn request_token(&self, code: &str) -> Result<Token> {
        let mut form = FormParams::action("requesttoken");
        form.push("client_id", self.config.client_id.as_str())
            .push("client_secret", self.config.client_secret.as_str())
            .push("grant_type", "authorization_code")
            .push("redirect_uri", self.config.redirect_url.as_str())
            .push("code", code);

        let issued_at = Utc::now();
        let mut token: Token = envelope::send(self.post(&self.endpoints.oauth2, &form)).await?;
        token.stamp(issued_at);

        tracing::info!(user_id = token.user_id, "Authorization code exchanged");
        Ok(token)
    }

    /// Create a client for the user owning `token`.
    pub fn user_client(&self, token: Token) -> UserClient {
        UserClient::new(
            self.config.client_id.clone(),
            self.config.client_secret.clone(),
            token,
            self.endpoints.clone(),
            self.http.clone(),
        )
    }

    /// Recreate a user client from a persisted refresh token.
    ///
    /// Performs a refresh immediately, so the returned client holds a valid
    /// access token and a new refresh token the caller should persist.
    pub async fn user_client_from_refresh_token(
        &self,
        refresh_token: &str,
        refresh_token_created_at: DateTime<Utc>,
    ) -> Result<UserClient> {
        let client = self.user_client(Token::from_refresh_token(
            refresh_token.to_string(),
            refresh_token_created_at,
        ));
        client.refresh_token().await?;
        Ok(client)
    }

    /// Create a client for the Withings demo account.
    ///
    /// Requests a nonce, then signs `getdemoaccess,<client_id>,<nonce>` with
    /// the client secret.
    pub async fn demo_user(&self) -> Result<UserClient> {
        let nonce = self.get_nonce().await?;
        let signature = sign(
            &self.config.client_secret,
            &format!("getdemoaccess,{},{}", self.config.client_id, nonce),
        )?;

        let mut form = FormParams::action("getdemoaccess");
        form.push("client_id", self.config.client_id.as_str())
            .push("nonce", nonce)
            .push("signature", signature)
            .push("scope_oauth2", self.config.scopes.as_str());

        let issued_at = Utc::now();
        let mut token: Token = envelope::send(self.post(&self.endpoints.oauth2, &form)).await?;
        token.stamp(issued_at);

        tracing::info!(user_id = token.user_id, "Demo account token issued");
        Ok(self.user_client(token))
    }

    /// Fetch a single-use nonce from the signature endpoint.
    async fn get_nonce(&self) -> Result<String> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign(
            &self.config.client_secret,
            &format!("getnonce,{},{}", self.config.client_id, timestamp),
        )?;

        let mut form = FormParams::action("getnonce");
        form.push("client_id", self.config.client_id.as_str())
            .push("timestamp", timestamp)
            .push("signature", signature);

        let body: NonceBody = envelope::send(self.post(&self.endpoints.signature, &form)).await?;
        Ok(body.nonce)
    }

    fn post(&self, url: &str, form: &FormParams) -> reqwest::RequestBuilder {
        self.http
            .post(url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(form.encode())
    }
}

/// Compare the state returned on the OAuth redirect with the one issued.
pub fn verify_state(expected: &str, received: &str) -> bool {
    expected.as_bytes().ct_eq(received.as_bytes()).into()
}

/// 64 random bytes, base64 URL-safe without padding.
fn generate_state() -> Result<String> {
    let mut buf = [0u8; STATE_BYTES];
    SystemRandom::new()
        .fill(&mut buf)
        .map_err(|_| ClientError::Crypto("Failed to generate random state".to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(buf))
}

/// Lowercase hex HMAC-SHA256 of `message` keyed by `key`.
pub(crate) fn sign(key: &str, message: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|e| ClientError::Crypto(format!("HMAC init failed: {}", e)))?;
    mac.update(message.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
