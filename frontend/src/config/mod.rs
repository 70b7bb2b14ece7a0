//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the portal base URL, request timeouts, and the preference file location.

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_base_url: String,
    pub request_timeout_seconds: u64,
    pub toast_duration_ms: u64,
    pub preferences_path: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server_base_url = env::var("SERVER_BASE_URL").context("SERVER_BASE_URL not set")?;

        let request_timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .context("REQUEST_TIMEOUT_SECONDS must be a valid number")?;

        let toast_duration_ms = env::var("TOAST_DURATION_MS")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u64>()
            .context("TOAST_DURATION_MS must be a valid number")?;

        let preferences_path =
            env::var("PREFERENCES_PATH").unwrap_or_else(|_| "preferences.json".to_string());

        Ok(Config {
            server_base_url,
            request_timeout_seconds,
            toast_duration_ms,
            preferences_path,
        })
    }
}
