// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OAuth2 token pair issued by Withings for a single user.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::de::u64_from_int_or_string;

/// Lifetime of a refresh token, counted from its issuance (one year).
pub const REFRESH_TOKEN_LIFETIME_HOURS: i64 = 8760;

/// A user's OAuth2 credentials.
///
/// Serializable so callers can persist it between runs. The minimum durable
/// state is `refresh_token` plus `refresh_token_created_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Withings user ID
    #[serde(
        default,
        alias = "userid",
        deserialize_with = "u64_from_int_or_string"
    )]
    pub user_id: u64,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    /// Access token lifetime in seconds
    #[serde(default)]
    pub expires_in: i64,
    /// Granted scopes, comma separated
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default)]
    pub token_type: String,
    /// When the access token was issued (not sent by the API, stamped locally)
    #[serde(default)]
    pub access_token_created_at: Option<DateTime<Utc>>,
    /// When the refresh token was issued (not sent by the API, stamped locally)
    #[serde(default)]
    pub refresh_token_created_at: DateTime<Utc>,
}

impl Token {
    /// Build a token holding only a refresh token, as loaded from storage.
    pub fn from_refresh_token(refresh_token: String, created_at: DateTime<Utc>) -> Self {
        Self {
            refresh_token,
            refresh_token_created_at: created_at,
            ..Default::default()
        }
    }

    /// Record the instant both tokens were issued.
    pub fn stamp(&mut self, issued_at: DateTime<Utc>) {
        self.access_token_created_at = Some(issued_at);
        self.refresh_token_created_at = issued_at;
    }

    /// Whether the access token is missing or at/after its declared expiry.
    pub fn access_token_expired(&self, now: DateTime<Utc>) -> bool {
        if self.access_token.is_empty() {
            return true;
        }
        match self.access_token_created_at {
            Some(created) => (now - created).num_seconds() >= self.expires_in,
            None => true,
        }
    }

    /// Whether the refresh token is older than its one-year window.
    pub fn refresh_token_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.refresh_token_created_at > Duration::hours(REFRESH_TOKEN_LIFETIME_HOURS)
    }

    /// When the access token stops being valid.
    pub fn access_token_expires_at(&self) -> Option<DateTime<Utc>> {
        self.access_token_created_at
            .map(|created| created + Duration::seconds(self.expires_in))
    }

    /// When the refresh token stops being valid.
    pub fn refresh_token_expires_at(&self) -> DateTime<Utc> {
        self.refresh_token_created_at + Duration::hours(REFRESH_TOKEN_LIFETIME_HOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(created: DateTime<Utc>, expires_in: i64) -> Token {
        Token {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_in,
            access_token_created_at: Some(created),
            refresh_token_created_at: created,
            ..Default::default()
        }
    }

    #[test]
    fn test_access_token_expiry_boundary() {
        let now = Utc::now();
        assert!(!token(now - Duration::seconds(3599), 3600).access_token_expired(now));
        assert!(token(now - Duration::seconds(3600), 3600).access_token_expired(now));
        assert!(token(now, 0).access_token_expired(now));
    }

    #[test]
    fn test_empty_access_token_is_expired() {
        let now = Utc::now();
        let t = Token::from_refresh_token("refresh".to_string(), now);
        assert!(t.access_token_expired(now));
        assert!(!t.refresh_token_expired(now));
    }

    #[test]
    fn test_refresh_token_window() {
        let now = Utc::now();
        let t = token(now - Duration::hours(8760), 10800);
        assert!(!t.refresh_token_expired(now));

        let t = token(now - Duration::hours(8761), 10800);
        assert!(t.refresh_token_expired(now));
    }

    #[test]
    fn test_deserialize_provider_body() {
        let t: Token = serde_json::from_str(
            r#"{"userid":"363","access_token":"a","refresh_token":"r","expires_in":10800,"scope":"user.info,user.metrics","csrf_token":"c","token_type":"Bearer"}"#,
        )
        .unwrap();
        assert_eq!(t.user_id, 363);
        assert_eq!(t.expires_in, 10800);
        assert_eq!(t.token_type, "Bearer");
        assert!(t.access_token_created_at.is_none());
    }

    #[test]
    fn test_persist_roundtrip() {
        let now = Utc::now();
        let mut t = token(now, 10800);
        t.stamp(now);
        let json = serde_json::to_string(&t).unwrap();
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert_eq!(
            back.access_token_expires_at(),
            Some(now + Duration::seconds(10800))
        );
    }
}
