// src/integrations/shortener/client.rs
//
// Remote URL-shortener API client
//
// ARCHITECTURE:
// - REST client for the backend shortener service
// - Pure request/response mapping: no retries, no caching, no timeout
//   handling beyond the transport default
// - Maps external data → wire DTOs (NO domain mutation)
// - Used by SessionService and UrlService
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never creates or modifies domain entities directly
// - The backend is opaque: every transport error or non-success status
//   collapses into the generic message for the issuing operation; error
//   bodies are never parsed

use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

const MSG_LOGIN_FAILED: &str = "Invalid credentials";
const MSG_REGISTER_FAILED: &str = "Registration failed";
const MSG_FETCH_FAILED: &str = "Failed to fetch URLs";
const MSG_SHORTEN_FAILED: &str = "Failed to shorten URL";
const MSG_DELETE_FAILED: &str = "Delete failed";

/// One shortened-URL record as the backend serializes it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteUrlRecord {
    pub id: String,
    pub long_url: String,
    pub short_url: String,
    /// Backends omit the counter for never-visited links
    #[serde(default)]
    pub visit_count: u64,
}

/// Login response wrapper
#[derive(Debug, Deserialize)]
struct LoginData {
    token: String,
}

/// The four logical calls of the backend contract.
///
/// Authenticated calls attach the session credential as a bearer header;
/// callers are responsible for holding a credential (guarded by view
/// reachability, not re-checked here).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenerApi: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> AppResult<String>;
    async fn register(&self, username: &str, password: &str) -> AppResult<()>;
    async fn list_urls(
        &self,
        token: &str,
        limit: u32,
        offset: u32,
    ) -> AppResult<Vec<RemoteUrlRecord>>;
    async fn create_url(&self, token: &str, long_url: &str) -> AppResult<()>;
    async fn delete_url(&self, token: &str, id: &str) -> AppResult<()>;
}

/// Reqwest implementation of `ShortenerApi`
pub struct ShortenerClient {
    base_url: String,
    http_client: Client,
}

impl ShortenerClient {
    /// Create a client against the configured backend origin
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }
}

#[async_trait]
impl ShortenerApi for ShortenerClient {
    async fn login(&self, username: &str, password: &str) -> AppResult<String> {
        let response = self
            .http_client
            .post(self.endpoint("/auth/login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("login request failed: {e}");
                AppError::Auth(MSG_LOGIN_FAILED.to_string())
            })?;

        if !response.status().is_success() {
            return Err(AppError::Auth(MSG_LOGIN_FAILED.to_string()));
        }

        let data: LoginData = response.json().await.map_err(|e| {
            tracing::warn!("login response was not parseable: {e}");
            AppError::Auth(MSG_LOGIN_FAILED.to_string())
        })?;

        Ok(data.token)
    }

    async fn register(&self, username: &str, password: &str) -> AppResult<()> {
        let response = self
            .http_client
            .post(self.endpoint("/auth/register"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("register request failed: {e}");
                AppError::Auth(MSG_REGISTER_FAILED.to_string())
            })?;

        if !response.status().is_success() {
            return Err(AppError::Auth(MSG_REGISTER_FAILED.to_string()));
        }

        Ok(())
    }

    async fn list_urls(
        &self,
        token: &str,
        limit: u32,
        offset: u32,
    ) -> AppResult<Vec<RemoteUrlRecord>> {
        let response = self
            .http_client
            .get(self.endpoint("/urls"))
            .query(&[("limit", limit), ("offset", offset)])
            .header(header::AUTHORIZATION, Self::bearer(token))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("list request failed: {e}");
                AppError::Fetch(MSG_FETCH_FAILED.to_string())
            })?;

        if !response.status().is_success() {
            return Err(AppError::Fetch(MSG_FETCH_FAILED.to_string()));
        }

        let records: Vec<RemoteUrlRecord> = response.json().await.map_err(|e| {
            tracing::warn!("list response was not parseable: {e}");
            AppError::Fetch(MSG_FETCH_FAILED.to_string())
        })?;

        Ok(records)
    }

    async fn create_url(&self, token: &str, long_url: &str) -> AppResult<()> {
        let response = self
            .http_client
            .post(self.endpoint("/urls"))
            .header(header::AUTHORIZATION, Self::bearer(token))
            .json(&json!({ "url": long_url }))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("create request failed: {e}");
                AppError::Mutation(MSG_SHORTEN_FAILED.to_string())
            })?;

        if !response.status().is_success() {
            return Err(AppError::Mutation(MSG_SHORTEN_FAILED.to_string()));
        }

        Ok(())
    }

    async fn delete_url(&self, token: &str, id: &str) -> AppResult<()> {
        let response = self
            .http_client
            .delete(self.endpoint(&format!("/urls/{}", id)))
            .header(header::AUTHORIZATION, Self::bearer(token))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("delete request failed: {e}");
                AppError::Mutation(MSG_DELETE_FAILED.to_string())
            })?;

        if !response.status().is_success() {
            return Err(AppError::Mutation(MSG_DELETE_FAILED.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = ShortenerClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
        assert_eq!(client.endpoint("/urls"), "http://localhost:8080/urls");
    }

    #[test]
    fn test_bearer_header_format() {
        assert_eq!(ShortenerClient::bearer("T"), "Bearer T");
    }

    #[test]
    fn test_record_visit_count_defaults_to_zero() {
        let record: RemoteUrlRecord = serde_json::from_str(
            r#"{"id":"abc123","long_url":"https://example.com","short_url":"http://localhost:8080/abc123"}"#,
        )
        .unwrap();
        assert_eq!(record.visit_count, 0);
    }

    // Real API calls are exercised against a mocked ShortenerApi in the
    // service tests; no network in the unit suite.
}
