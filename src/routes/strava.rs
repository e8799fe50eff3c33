// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout routes backed by the Strava API.

use crate::error::Result;
use crate::models::{LatestWorkoutResponse, WeeklySummaryResponse};
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/strava/latest-workout", get(latest_workout))
        .route("/api/strava/last-week-summary", get(last_week_summary))
}

/// Most recent activity. 404 when the athlete has none.
async fn latest_workout(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LatestWorkoutResponse>> {
    let workout = state.strava_service.latest_workout().await?;
    Ok(Json(workout))
}

/// Totals for the last completed Monday–Sunday week (UTC).
async fn last_week_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<WeeklySummaryResponse>> {
    let summary = state
        .strava_service
        .last_week_summary(chrono::Utc::now())
        .await?;
    Ok(Json(summary))
}
