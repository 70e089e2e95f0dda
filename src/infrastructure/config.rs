//! Application configuration

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::services::SyncConfig;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Campaign service base URL
    pub backend_base_url: String,
    /// Suggestion functions base URL
    pub suggestion_base_url: String,
    /// Run against the in-memory store and canned suggestions
    pub offline: bool,

    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
    /// Quiet period before a draft flush, in milliseconds
    pub sync_debounce_ms: u64,
    /// Maximum store staleness under continuous editing, in milliseconds
    pub sync_max_staleness_ms: u64,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            backend_base_url: env::var("BACKEND_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            suggestion_base_url: env::var("SUGGESTION_BASE_URL").unwrap_or_else(|_| {
                "https://us-central1-mythweaver-mvp.cloudfunctions.net".to_string()
            }),
            offline: env::var("OFFLINE_MODE")
                .map(|value| parse_bool(&value))
                .unwrap_or(false),

            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("REQUEST_TIMEOUT_SECS must be a number of seconds")?,
            sync_debounce_ms: env::var("SYNC_DEBOUNCE_MS")
                .unwrap_or_else(|_| "400".to_string())
                .parse()
                .context("SYNC_DEBOUNCE_MS must be a number of milliseconds")?,
            sync_max_staleness_ms: env::var("SYNC_MAX_STALENESS_MS")
                .unwrap_or_else(|_| "2000".to_string())
                .parse()
                .context("SYNC_MAX_STALENESS_MS must be a number of milliseconds")?,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn sync(&self) -> SyncConfig {
        SyncConfig {
            debounce: Duration::from_millis(self.sync_debounce_ms),
            max_staleness: Duration::from_millis(self.sync_max_staleness_ms),
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
