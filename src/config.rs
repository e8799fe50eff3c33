// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! The Strava credentials are read once at startup and never written back.
//! Each secret can be given either as an upper-snake variable
//! (`STRAVA_CLIENT_ID`) or in hierarchical form (`Strava__ClientId`).

use std::env;
use std::str::FromStr;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,https://slimmpylk.com";
const DEFAULT_OAUTH_URL: &str = "https://www.strava.com/oauth/token";
const DEFAULT_API_URL: &str = "https://www.strava.com/api/v3";
const DEFAULT_WELCOME_MESSAGE: &str = "Welcome to the Strava workout API!";

/// How the latest workout is picked from the activities listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityOrder {
    /// Take the first element; Strava lists newest first.
    #[default]
    Provider,
    /// Take the element with the latest `start_date`.
    StartDate,
}

impl FromStr for ActivityOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "provider" | "first" => Ok(Self::Provider),
            "start_date" | "newest" => Ok(Self::StartDate),
            other => Err(ConfigError::Invalid {
                name: "LATEST_ACTIVITY_ORDER",
                value: other.to_string(),
            }),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Strava credentials ---
    /// Strava OAuth client ID
    pub strava_client_id: String,
    /// Strava OAuth client secret
    pub strava_client_secret: String,
    /// Long-lived refresh token exchanged on every request
    pub strava_refresh_token: String,

    // --- Provider endpoints ---
    /// Token endpoint (form POST)
    pub strava_oauth_url: String,
    /// API base, without trailing slash
    pub strava_api_url: String,

    // --- Server ---
    /// Server port
    pub port: u16,
    /// Frontend origins allowed by CORS
    pub allowed_origins: Vec<String>,
    /// Text served at `/`; `None` disables the route
    pub welcome_message: Option<String>,
    /// Selection rule for the latest-workout endpoint
    pub latest_activity_order: ActivityOrder,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            strava_client_id: "test_client_id".to_string(),
            strava_client_secret: "test_secret".to_string(),
            strava_refresh_token: "test_refresh_token".to_string(),
            strava_oauth_url: DEFAULT_OAUTH_URL.to_string(),
            strava_api_url: DEFAULT_API_URL.to_string(),
            port: 8080,
            allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
            welcome_message: Some(DEFAULT_WELCOME_MESSAGE.to_string()),
            latest_activity_order: ActivityOrder::Provider,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            strava_client_id: required(&["STRAVA_CLIENT_ID", "Strava__ClientId"])?,
            strava_client_secret: required(&["STRAVA_CLIENT_SECRET", "Strava__ClientSecret"])?,
            strava_refresh_token: required(&["STRAVA_REFRESH_TOKEN", "Strava__RefreshToken"])?,
            strava_oauth_url: env::var("STRAVA_OAUTH_URL")
                .unwrap_or_else(|_| DEFAULT_OAUTH_URL.to_string()),
            strava_api_url: env::var("STRAVA_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            allowed_origins: parse_origins(
                &env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
            welcome_message: match env::var("WELCOME_MESSAGE") {
                Ok(v) if v.trim().is_empty() => None,
                Ok(v) => Some(v),
                Err(_) => Some(DEFAULT_WELCOME_MESSAGE.to_string()),
            },
            latest_activity_order: match env::var("LATEST_ACTIVITY_ORDER") {
                Ok(v) => v.parse()?,
                Err(_) => ActivityOrder::default(),
            },
        })
    }
}

/// Read the first of `names` that is set to a non-empty value.
fn required(names: &[&'static str]) -> Result<String, ConfigError> {
    names
        .iter()
        .find_map(|name| {
            env::var(name)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
        .ok_or(ConfigError::Missing(names[0]))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations don't race other tests in this module.
    #[test]
    fn test_config_from_env() {
        env::set_var("STRAVA_CLIENT_ID", "test_id");
        env::remove_var("STRAVA_CLIENT_SECRET");
        env::set_var("Strava__ClientSecret", " hierarchical_secret \n");
        env::set_var("STRAVA_REFRESH_TOKEN", "test_refresh");
        env::set_var("ALLOWED_ORIGINS", "https://a.example/, https://b.example");
        env::set_var("LATEST_ACTIVITY_ORDER", "start_date");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.strava_client_id, "test_id");
        assert_eq!(config.strava_client_secret, "hierarchical_secret");
        assert_eq!(config.strava_refresh_token, "test_refresh");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.latest_activity_order, ActivityOrder::StartDate);

        env::set_var("LATEST_ACTIVITY_ORDER", "alphabetical");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid { .. })
        ));
        env::remove_var("LATEST_ACTIVITY_ORDER");

        env::remove_var("STRAVA_REFRESH_TOKEN");
        env::remove_var("Strava__RefreshToken");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Missing("STRAVA_REFRESH_TOKEN"))
        ));
    }

    #[test]
    fn test_activity_order_parse() {
        assert_eq!("provider".parse::<ActivityOrder>().unwrap(), ActivityOrder::Provider);
        assert_eq!(" Start_Date ".parse::<ActivityOrder>().unwrap(), ActivityOrder::StartDate);
        assert!("sideways".parse::<ActivityOrder>().is_err());
    }
}
