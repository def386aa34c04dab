// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Decoding of the `{"status": ..., "body": ...}` envelope that wraps every
//! Withings response.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ClientError, Result};

#[derive(Deserialize)]
struct RawEnvelope {
    status: i64,
    #[serde(default)]
    body: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

/// Decode a response body into `T`.
///
/// A non-zero status becomes [`ClientError::RemoteApi`] with the code passed
/// through verbatim. The body is only interpreted when the status is zero.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let envelope: RawEnvelope = serde_json::from_slice(bytes)
        .map_err(|e| ClientError::Decode(format!("Invalid envelope: {}", e)))?;

    if envelope.status != 0 {
        return Err(ClientError::RemoteApi {
            status: envelope.status,
            message: envelope.error,
        });
    }

    let body = envelope.body.unwrap_or(serde_json::Value::Null);
    serde_json::from_value(body).map_err(|e| ClientError::Decode(format!("Invalid body: {}", e)))
}

/// Send a prepared request and decode its envelope.
///
/// The HTTP status is not checked: the provider reports failures in the
/// envelope, and a non-JSON body is a decode error whatever the status.
pub(crate) async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let http_status = response.status();
    let bytes = response.bytes().await?;
    if !http_status.is_success() {
        tracing::debug!(%http_status, "Non-success HTTP status, decoding envelope");
    }
    decode(&bytes)
}
