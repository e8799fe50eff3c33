// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava activity payload and the latest-workout response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::format::{
    format_distance, format_elevation, format_moving_time, format_start_date, parse_start_date,
};

/// Summary activity as listed by `GET /athlete/activities`.
///
/// Only the fields the frontend needs are mapped; anything may be null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StravaActivity {
    #[serde(default)]
    pub name: Option<String>,
    /// Distance in meters
    #[serde(default)]
    pub distance: Option<f64>,
    /// Moving time in seconds
    #[serde(default)]
    pub moving_time: Option<f64>,
    /// Elevation gain in meters
    #[serde(default)]
    pub total_elevation_gain: Option<f64>,
    /// Legacy activity type (Run, Ride, ...)
    #[serde(default, rename = "type")]
    pub activity_type: Option<String>,
    #[serde(default)]
    pub sport_type: Option<String>,
    /// Start date/time (ISO 8601)
    #[serde(default)]
    pub start_date: Option<String>,
}

impl StravaActivity {
    /// Activity type, preferring the legacy `type` over `sport_type`.
    pub fn display_type(&self) -> &str {
        self.activity_type
            .as_deref()
            .or(self.sport_type.as_deref())
            .unwrap_or_default()
    }

    /// Parsed start time, using the same rules as the displayed date.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.start_date
            .as_deref()
            .and_then(parse_start_date)
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Latest workout, formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LatestWorkoutResponse {
    pub name: String,
    pub distance: String,
    pub moving_time: String,
    pub total_elevation_gain: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub date: String,
}

impl From<&StravaActivity> for LatestWorkoutResponse {
    fn from(activity: &StravaActivity) -> Self {
        Self {
            name: activity.name.clone().unwrap_or_default(),
            distance: format_distance(activity.distance.unwrap_or(0.0)),
            moving_time: format_moving_time(activity.moving_time.unwrap_or(0.0)),
            total_elevation_gain: format_elevation(activity.total_elevation_gain.unwrap_or(0.0)),
            activity_type: activity.display_type().to_string(),
            date: format_start_date(activity.start_date.as_deref()),
        }
    }
}
