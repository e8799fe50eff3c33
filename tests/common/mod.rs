// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{Request, Response};
use httpmock::MockServer;
use std::sync::Arc;
use strava_workout_proxy::config::Config;
use strava_workout_proxy::routes::create_router;
use strava_workout_proxy::AppState;
use tower::ServiceExt;

#[allow(dead_code)]
pub const TOKEN_PATH: &str = "/oauth/token";
#[allow(dead_code)]
pub const ACTIVITIES_PATH: &str = "/api/v3/athlete/activities";

/// Config pointing both Strava endpoints at the stub server.
#[allow(dead_code)]
pub fn test_config(server: &MockServer) -> Config {
    Config {
        strava_oauth_url: server.url(TOKEN_PATH),
        strava_api_url: server.url("/api/v3"),
        ..Config::default()
    }
}

/// Create a test app talking to the stub Strava server.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(config: Config) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(config));
    (create_router(state.clone()), state)
}

/// Issue a GET against the router.
#[allow(dead_code)]
pub async fn get(app: axum::Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
