// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava OAuth token refresh payloads.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Raw reply from `POST /oauth/token`.
///
/// Strava reports bad credentials as a JSON object with `message` and
/// `errors`, so every field here is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Expiry as a Unix timestamp
    #[serde(default)]
    pub expires_at: Option<i64>,
    /// Seconds until expiry
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of a successful refresh. Lives for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenExchangeResult {
    pub access_token: String,
    /// Set only when Strava issued a different refresh token.
    pub rotated_refresh_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub expires_in: Option<i64>,
}

impl TokenResponse {
    /// Validate the reply. Returns `None` if there is no usable access token.
    pub fn into_exchange_result(self, sent_refresh_token: &str) -> Option<TokenExchangeResult> {
        let access_token = self.access_token.filter(|t| !t.trim().is_empty())?;

        Some(TokenExchangeResult {
            access_token,
            rotated_refresh_token: self
                .refresh_token
                .filter(|t| !t.is_empty() && t != sent_refresh_token),
            expires_at: self
                .expires_at
                .and_then(|ts| DateTime::from_timestamp(ts, 0)),
            expires_in: self.expires_in,
        })
    }
}
