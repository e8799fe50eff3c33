// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Strava could not be reached, or replied with an empty or malformed body.
    #[error("Strava unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The token endpoint replied without an access token.
    #[error("Strava did not issue an access token")]
    InvalidCredentials,

    #[error("Resource not found: {0}")]
    NotFound(String),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    details: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::UpstreamUnavailable(msg) => {
                tracing::error!(error = %msg, "Strava request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "upstream_unavailable",
                    "Error fetching data from Strava.",
                )
            }
            AppError::InvalidCredentials => {
                tracing::error!("Access token is null or empty");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "invalid_credentials",
                    "Access token is null or empty.",
                )
            }
            AppError::NotFound(msg) => {
                tracing::info!(details = %msg, "Not found");
                (StatusCode::NOT_FOUND, "not_found", msg.as_str())
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details: details.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
