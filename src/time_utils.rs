// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting and the weekly window.

use chrono::{DateTime, Datelike, Duration, NaiveTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// A closed calendar-week range, Monday 00:00:00 through Sunday 23:59:59 UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl WeekWindow {
    /// Value for Strava's `after` query parameter.
    pub fn after(&self) -> i64 {
        self.start.timestamp()
    }

    /// Value for Strava's `before` query parameter.
    pub fn before(&self) -> i64 {
        self.end.timestamp()
    }
}

/// The most recently completed Monday–Sunday week before `now`.
///
/// The week containing `now` is never returned, even late on a Sunday.
pub fn last_completed_week(now: DateTime<Utc>) -> WeekWindow {
    let days_since_monday = i64::from(now.weekday().num_days_from_monday());
    let this_monday = (now.date_naive() - Duration::days(days_since_monday))
        .and_time(NaiveTime::MIN)
        .and_utc();

    WeekWindow {
        start: this_monday - Duration::days(7),
        end: this_monday - Duration::seconds(1),
    }
}
