// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client and the token-then-fetch workflows.
//!
//! Every request does its own refresh-token exchange followed by one
//! activities call. Nothing is cached or shared between requests.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::config::{ActivityOrder, Config};
use crate::error::AppError;
use crate::models::{
    ActivityTotals, LatestWorkoutResponse, StravaActivity, TokenExchangeResult, TokenResponse,
    WeeklySummaryResponse,
};
use crate::time_utils::{format_utc_rfc3339, last_completed_week};

/// Strava's maximum page size for activity listings.
pub const MAX_PER_PAGE: u32 = 200;

/// Query parameters for `GET /athlete/activities`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityQuery {
    /// Only activities starting after this Unix timestamp
    pub after: Option<i64>,
    /// Only activities starting before this Unix timestamp
    pub before: Option<i64>,
    pub per_page: Option<u32>,
}

impl ActivityQuery {
    fn to_params(self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(after) = self.after {
            params.push(("after", after.to_string()));
        }
        if let Some(before) = self.before {
            params.push(("before", before.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        params
    }
}

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    api_url: String,
    oauth_url: String,
    client_id: String,
    client_secret: String,
}

impl StravaClient {
    /// Create a new Strava client with OAuth credentials and endpoints.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.strava_api_url.clone(),
            oauth_url: config.strava_oauth_url.clone(),
            client_id: config.strava_client_id.clone(),
            client_secret: config.strava_client_secret.clone(),
        }
    }

    /// Exchange a refresh token for an access token.
    ///
    /// The body is parsed whatever the status, since Strava reports
    /// rejected credentials as a JSON object without `access_token`.
    pub async fn refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<TokenExchangeResult, AppError> {
        let response = self
            .http
            .post(&self.oauth_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("refresh_token", refresh_token),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::UpstreamUnavailable(format!("Token refresh request failed: {}", e))
            })?;

        let status = response.status();
        let body = Self::read_json(response, "token").await?;
        if !body.is_object() {
            return Err(AppError::UpstreamUnavailable(format!(
                "Token response is not a JSON object (HTTP {})",
                status
            )));
        }
        let token_response: TokenResponse = serde_json::from_value(body).map_err(|e| {
            AppError::UpstreamUnavailable(format!("Malformed token response: {}", e))
        })?;
        let message = token_response.message.clone().unwrap_or_default();

        match token_response.into_exchange_result(refresh_token) {
            Some(result) => Ok(result),
            None => {
                tracing::warn!(
                    status = %status,
                    message = %message,
                    "Token endpoint returned no access token"
                );
                Err(AppError::InvalidCredentials)
            }
        }
    }

    /// List the authenticated athlete's activities.
    pub async fn list_activities(
        &self,
        access_token: &str,
        query: ActivityQuery,
    ) -> Result<Vec<StravaActivity>, AppError> {
        let url = format!("{}/athlete/activities", self.api_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&query.to_params())
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!("Strava rate limit hit (429)");
            }

            return Err(AppError::UpstreamUnavailable(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        match Self::read_json(response, "activities").await? {
            Value::Array(items) if items.iter().all(Value::is_object) => {
                serde_json::from_value(Value::Array(items)).map_err(|e| {
                    AppError::UpstreamUnavailable(format!("Malformed activities response: {}", e))
                })
            }
            _ => Err(AppError::UpstreamUnavailable(
                "Activities response is not a JSON array of objects".to_string(),
            )),
        }
    }

    /// Read the body as untyped JSON. Empty bodies are errors.
    ///
    /// Callers check the shape before mapping to a typed record, since
    /// serde accepts a JSON array for a struct with all-default fields.
    async fn read_json(response: reqwest::Response, what: &str) -> Result<Value, AppError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::UpstreamUnavailable(format!("Failed to read {} response: {}", what, e))
        })?;

        if body.trim().is_empty() {
            return Err(AppError::UpstreamUnavailable(format!(
                "Empty {} response (HTTP {})",
                what, status
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            AppError::UpstreamUnavailable(format!(
                "Malformed {} response (HTTP {}): {}",
                what, status, e
            ))
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StravaService - token exchange followed by a fetch
// ─────────────────────────────────────────────────────────────────────────────

/// High-level Strava service used by the route handlers.
#[derive(Clone)]
pub struct StravaService {
    client: StravaClient,
    refresh_token: String,
    latest_order: ActivityOrder,
}

impl StravaService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: StravaClient::new(config),
            refresh_token: config.strava_refresh_token.clone(),
            latest_order: config.latest_activity_order,
        }
    }

    /// Exchange the configured refresh token for a fresh access token.
    pub async fn access_token(&self) -> Result<String, AppError> {
        let result = self.client.refresh_token(&self.refresh_token).await?;

        if result.rotated_refresh_token.is_some() {
            // Not persisted; the configured refresh token stays in use.
            tracing::warn!("Strava issued a new refresh token; keeping the configured one");
        }
        let expires_at = result
            .expires_at
            .map(format_utc_rfc3339)
            .unwrap_or_default();
        tracing::debug!(
            expires_at = %expires_at,
            expires_in = result.expires_in.unwrap_or_default(),
            "Access token obtained"
        );

        Ok(result.access_token)
    }

    /// Fetch and format the athlete's most recent activity.
    pub async fn latest_workout(&self) -> Result<LatestWorkoutResponse, AppError> {
        let access_token = self.access_token().await?;
        let activities = self
            .client
            .list_activities(&access_token, ActivityQuery::default())
            .await?;

        tracing::info!(count = activities.len(), "Fetched recent activities");

        let latest = select_latest(&activities, self.latest_order)
            .ok_or_else(|| AppError::NotFound("No workouts found.".to_string()))?;

        Ok(LatestWorkoutResponse::from(latest))
    }

    /// Sum the activities of the last completed calendar week before `now`.
    ///
    /// A week with no activities yields zero totals, not an error.
    pub async fn last_week_summary(
        &self,
        now: DateTime<Utc>,
    ) -> Result<WeeklySummaryResponse, AppError> {
        let window = last_completed_week(now);
        tracing::info!(
            start = %format_utc_rfc3339(window.start),
            end = %format_utc_rfc3339(window.end),
            "Computing weekly summary"
        );

        let access_token = self.access_token().await?;
        let activities = self
            .client
            .list_activities(
                &access_token,
                ActivityQuery {
                    after: Some(window.after()),
                    before: Some(window.before()),
                    per_page: Some(MAX_PER_PAGE),
                },
            )
            .await?;

        let totals: ActivityTotals = activities.iter().collect();
        tracing::info!(count = totals.count, "Weekly activities summed");

        Ok(totals.to_summary())
    }
}

/// Pick the latest activity from a listing.
///
/// With `StartDate`, ties and unparseable dates fall back to listing order.
pub fn select_latest(
    activities: &[StravaActivity],
    order: ActivityOrder,
) -> Option<&StravaActivity> {
    match order {
        ActivityOrder::Provider => activities.first(),
        ActivityOrder::StartDate => activities
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| {
                a.started_at()
                    .cmp(&b.started_at())
                    .then_with(|| ib.cmp(ia))
            })
            .map(|(_, activity)| activity),
    }
}
