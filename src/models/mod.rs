// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod summary;
pub mod token;

pub use activity::{LatestWorkoutResponse, StravaActivity};
pub use summary::{ActivityTotals, WeeklySummaryResponse};
pub use token::{TokenExchangeResult, TokenResponse};
