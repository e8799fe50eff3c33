// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly totals across a list of activities.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::format::{format_distance, format_elevation, format_moving_time};
use crate::models::StravaActivity;

/// Running sums over activities. Absent fields count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActivityTotals {
    /// Number of activities added
    pub count: usize,
    /// Total distance (meters)
    pub distance_meters: f64,
    /// Total moving time (seconds)
    pub moving_time_seconds: f64,
    /// Total elevation gain (meters)
    pub elevation_gain_meters: f64,
}

impl ActivityTotals {
    /// Add one activity to the totals.
    pub fn add(&mut self, activity: &StravaActivity) {
        self.count += 1;
        self.distance_meters += activity.distance.unwrap_or(0.0);
        self.moving_time_seconds += activity.moving_time.unwrap_or(0.0);
        self.elevation_gain_meters += activity.total_elevation_gain.unwrap_or(0.0);
    }

    /// Format the totals for display.
    pub fn to_summary(&self) -> WeeklySummaryResponse {
        WeeklySummaryResponse {
            total_distance: format_distance(self.distance_meters),
            total_time: format_moving_time(self.moving_time_seconds),
            total_elevation_gain: format_elevation(self.elevation_gain_meters),
        }
    }
}

impl<'a> FromIterator<&'a StravaActivity> for ActivityTotals {
    fn from_iter<I: IntoIterator<Item = &'a StravaActivity>>(iter: I) -> Self {
        let mut totals = Self::default();
        for activity in iter {
            totals.add(activity);
        }
        totals
    }
}

/// Last week's totals, formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeeklySummaryResponse {
    pub total_distance: String,
    pub total_time: String,
    pub total_elevation_gain: String,
}
