// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration.
//!
//! The library takes a [`Config`] value from the caller. `from_env` is a
//! convenience for binaries and tests that keep credentials in the
//! environment or a `.env` file.

use std::env;

/// Default OAuth2 scopes requested at authorization time.
pub const DEFAULT_SCOPES: &str = "user.info,user.metrics,user.activity";

/// Base URL of the Withings data API.
pub const DEFAULT_API_BASE_URL: &str = "https://wbsapi.withings.net";

/// Base URL of the Withings account (authorization) site.
pub const DEFAULT_ACCOUNT_BASE_URL: &str = "https://account.withings.com";

/// Log output format for binaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Application credentials and endpoint configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Withings OAuth client ID (public)
    pub client_id: String,
    /// Withings OAuth client secret
    pub client_secret: String,
    /// Redirect URL registered with the Withings application
    pub redirect_url: String,
    /// Comma separated scopes to request
    pub scopes: String,
    /// Base URL for token, signature and measure endpoints
    pub api_base_url: String,
    /// Base URL for the user-facing authorization page
    pub account_base_url: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            client_id: "test_client_id".to_string(),
            client_secret: "test_secret".to_string(),
            redirect_url: "http://localhost:8080/callback".to_string(),
            scopes: DEFAULT_SCOPES.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            account_base_url: DEFAULT_ACCOUNT_BASE_URL.to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Build a config for the production endpoints.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_url: redirect_url.into(),
            scopes: DEFAULT_SCOPES.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            account_base_url: DEFAULT_ACCOUNT_BASE_URL.to_string(),
            log_format: LogFormat::default(),
        }
    }

    /// Point both token and data endpoints at another server.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            client_id: env::var("WITHINGS_CLIENT_ID")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("WITHINGS_CLIENT_ID"))?,
            client_secret: env::var("WITHINGS_CLIENT_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("WITHINGS_CLIENT_SECRET"))?,
            redirect_url: env::var("WITHINGS_REDIRECT_URL")
                .map_err(|_| ConfigError::Missing("WITHINGS_REDIRECT_URL"))?,
            scopes: env::var("WITHINGS_SCOPES").unwrap_or_else(|_| DEFAULT_SCOPES.to_string()),
            api_base_url: env::var("WITHINGS_API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            account_base_url: env::var("WITHINGS_ACCOUNT_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_ACCOUNT_BASE_URL.to_string()),
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                Ok("pretty") | Err(_) => LogFormat::Pretty,
                Ok(other) => return Err(ConfigError::Invalid("LOG_FORMAT", other.to_string())),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
