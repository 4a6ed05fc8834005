// src/config.rs
//
// Client configuration
//
// One knob: the backend origin. The same value builds API requests and
// share-link display strings, so the two can never diverge.

use std::env;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

const BACKEND_URL_VAR: &str = "LINKDOCK_BACKEND_URL";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend origin for API calls and share links
    pub backend_url: String,
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            backend_url: backend_url_from(env::var(BACKEND_URL_VAR).ok()),
        }
    }
}

fn backend_url_from(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().trim_end_matches('/').to_string(),
        _ => {
            tracing::info!("{BACKEND_URL_VAR} not set, using default: {DEFAULT_BACKEND_URL}");
            DEFAULT_BACKEND_URL.to_string()
        }
    }
}
