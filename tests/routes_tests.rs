// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Router tests: static routes and CORS.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use strava_workout_proxy::config::Config;
use tower::ServiceExt;

mod common;
use common::{body_json, create_test_app, get};

#[tokio::test]
async fn test_welcome_route() {
    let (app, _) = create_test_app(Config {
        welcome_message: Some("Hello from the workout API".to_string()),
        ..Config::default()
    });

    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    assert_eq!(&body[..], b"Hello from the workout API");
}

#[tokio::test]
async fn test_welcome_route_disabled() {
    let (app, _) = create_test_app(Config {
        welcome_message: None,
        ..Config::default()
    });

    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = create_test_app(Config::default());

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

async fn preflight(app: axum::Router, origin: &str) -> axum::http::Response<Body> {
    app.oneshot(
        Request::builder()
            .method("OPTIONS")
            .uri("/api/strava/latest-workout")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_cors_allows_configured_origins() {
    let (app, _) = create_test_app(Config::default());

    for origin in ["http://localhost:3000", "https://slimmpylk.com"] {
        let response = preflight(app.clone(), origin).await;
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            origin
        );
    }
}

#[tokio::test]
async fn test_cors_rejects_other_origins() {
    let (app, _) = create_test_app(Config::default());

    let response = preflight(app, "https://evil.example").await;
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_cors_wildcard_allows_any_origin() {
    let (app, _) = create_test_app(Config {
        allowed_origins: vec!["https://slimmpylk.com".to_string(), "*".to_string()],
        ..Config::default()
    });

    let response = preflight(app, "https://anywhere.example").await;
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
