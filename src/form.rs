// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ordered `application/x-www-form-urlencoded` bodies.
//!
//! The Withings API takes every parameter, including the `action`
//! selector, as a form field. Pairs are kept in insertion order so the
//! encoded body is deterministic.

use crate::error::{ClientError, Result};

/// Ordered list of form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    pairs: Vec<(&'static str, String)>,
}

impl FormParams {
    /// Start a form for the given API action.
    pub fn action(action: &str) -> Self {
        let mut form = Self::default();
        form.push("action", action);
        form
    }

    pub fn push(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key, value.into()));
        self
    }

    /// Push the field only when a value is present.
    pub fn push_opt(&mut self, key: &'static str, value: Option<String>) -> &mut Self {
        if let Some(value) = value {
            self.pairs.push((key, value));
        }
        self
    }

    /// Push a comma-joined list, skipped when empty.
    pub fn push_list<S: AsRef<str>>(&mut self, key: &'static str, values: &[S]) -> &mut Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(|v| v.as_ref())
                .collect::<Vec<_>>()
                .join(",");
            self.pairs.push((key, joined));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// URL-encode the fields as `k1=v1&k2=v2`.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Parse a URL-encoded form back into ordered pairs.
pub fn decode(encoded: &str) -> Result<Vec<(String, String)>> {
    encoded
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            Ok((decode_component(key)?, decode_component(value)?))
        })
        .collect()
}

fn decode_component(raw: &str) -> Result<String> {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(|s| s.into_owned())
        .map_err(|e| ClientError::Decode(format!("Invalid form encoding: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_keeps_order_and_escapes() {
        let mut form = FormParams::action("getmeas");
        form.push("meastypes", "1,4")
            .push_opt("offset", None)
            .push("redirect_uri", "https://example.com/cb?x=1");

        assert_eq!(
            form.encode(),
            "action=getmeas&meastypes=1%2C4&redirect_uri=https%3A%2F%2Fexample.com%2Fcb%3Fx%3D1"
        );
    }

    #[test]
    fn test_push_list_skips_empty() {
        let mut form = FormParams::action("getactivity");
        form.push_list::<&str>("data_fields", &[]);
        assert_eq!(form.pairs().len(), 1);

        form.push_list("data_fields", &["steps", "distance"]);
        assert_eq!(form.get("data_fields"), Some("steps,distance"));
    }

    #[test]
    fn test_decode_roundtrip() {
        let mut form = FormParams::action("requesttoken");
        form.push("client_secret", "SECRET?%G client&");

        let decoded = decode(&form.encode()).unwrap();
        assert_eq!(
            decoded,
            vec![
                ("action".to_string(), "requesttoken".to_string()),
                ("client_secret".to_string(), "SECRET?%G client&".to_string()),
            ]
        );
    }

    #[test]
    fn test_decode_plus_as_space() {
        let decoded = decode("a=b+c&flag").unwrap();
        assert_eq!(decoded[0], ("a".to_string(), "b c".to_string()));
        assert_eq!(decoded[1], ("flag".to_string(), String::new()));
    }
}
