// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava workout proxy
//!
//! Exchanges a configured Strava refresh token for an access token on
//! each request, then fetches and reformats recent activities for a
//! frontend.

pub mod config;
pub mod error;
pub mod format;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::StravaService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub strava_service: StravaService,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let strava_service = StravaService::new(&config);
        Self {
            config,
            strava_service,
        }
    }
}
