// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display formatting for workout values sent to the frontend.

use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// Placeholder for a missing or unparseable start date.
pub const UNKNOWN_DATE: &str = "Unknown";

/// Meters as kilometers with two decimals, e.g. `"12.35 km"`.
pub fn format_distance(meters: f64) -> String {
    format!("{:.2} km", meters / 1000.0)
}

/// Seconds as `HH:MM`. Partial minutes are dropped.
pub fn format_moving_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 3600, (total % 3600) / 60)
}

/// Elevation in whole meters, e.g. `"134 m"`.
pub fn format_elevation(meters: f64) -> String {
    let rounded = meters.round();
    // -0.0 would print as "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.0} m")
}

/// Parse a Strava start timestamp.
///
/// Accepts RFC 3339 or a naive `YYYY-MM-DDTHH:MM:SS`, taken as UTC.
pub fn parse_start_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
            .ok()
            .map(|dt| dt.and_utc().fixed_offset())
    })
}

/// Strava start timestamp as `DD.MM.YYYY`, in the timestamp's own offset.
pub fn format_start_date(start_date: Option<&str>) -> String {
    start_date
        .and_then(parse_start_date)
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}
