// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types.
//!
//! Every failure is handed back to the caller. Nothing in this crate retries
//! a request or swallows an error.

/// Error type returned by every client operation.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Parameters were malformed or contradictory. Raised before any request is sent.
    #[error("Invalid parameters: {0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response was not JSON or did not match the expected envelope.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The provider answered with a non-zero status code.
    #[error("Withings API error: status {status}{}", message.as_deref().map(|m| format!(" ({m})")).unwrap_or_default())]
    RemoteApi {
        status: i64,
        message: Option<String>,
    },

    #[error("No refresh token available")]
    MissingCredential,

    #[error("Refresh token expired, user must re-authorize")]
    CredentialExpired,

    #[error("Crypto error: {0}")]
    Crypto(String),

    /// A page request failed in the middle of a fetch-all loop.
    #[error("{operation} failed at offset {offset}: {source}")]
    Paginated {
        operation: &'static str,
        offset: u64,
        #[source]
        source: Box<ClientError>,
    },
}

impl ClientError {
    /// Strip any pagination context and return the underlying error.
    pub fn root(&self) -> &ClientError {
        match self {
            ClientError::Paginated { source, .. } => source.root(),
            other => other,
        }
    }

    /// Status code reported by the provider, if this is a remote API error.
    pub fn remote_status(&self) -> Option<i64> {
        match self.root() {
            ClientError::RemoteApi { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the error means the user has to go through authorization again.
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self.root(),
            ClientError::MissingCredential | ClientError::CredentialExpired
        )
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
