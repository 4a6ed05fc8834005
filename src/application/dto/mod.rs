// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{ShortUrl, View};
use crate::infrastructure::Notices;

// ============================================================================
// AUTH DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterDto {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

// ============================================================================
// SHORT URL DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortUrlDto {
    pub id: String,
    pub long_url: String,
    pub short_url: String,
    pub visit_count: u64,
    /// Display/copy string: `{origin}/{id}`
    pub share_link: String,
}

impl ShortUrlDto {
    pub fn from_record(record: &ShortUrl, origin: &str) -> Self {
        Self {
            id: record.id.clone(),
            long_url: record.long_url.clone(),
            short_url: record.short_url.clone(),
            visit_count: record.visit_count,
            share_link: record.share_link(origin),
        }
    }
}

// ============================================================================
// UI STATE DTO
// ============================================================================

/// Everything the webview renders, in one snapshot.
///
/// Returned by every command so the frontend never keeps derived state of
/// its own beyond form buffers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiStateDto {
    pub view: View,
    pub authenticated: bool,
    /// Busy flag covering fetch/delete and the auth calls
    pub loading: bool,
    /// Busy flag covering create, distinctly
    pub shortening: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pub urls: Vec<ShortUrlDto>,
}

impl UiStateDto {
    pub fn new(
        view: View,
        authenticated: bool,
        loading: bool,
        shortening: bool,
        notices: Notices,
        urls: Vec<ShortUrlDto>,
    ) -> Self {
        Self {
            view,
            authenticated,
            loading,
            shortening,
            error: notices.error,
            success: notices.success,
            urls,
        }
    }
}
