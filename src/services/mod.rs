// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod navigation_service;
pub mod session_service;
pub mod url_service;

pub(crate) mod op_guard;

#[cfg(test)]
mod url_service_tests;

// Re-export all services and their types
pub use session_service::{LoginRequest, RegisterRequest, SessionService};

pub use url_service::{UrlService, PAGE_LIMIT, PAGE_OFFSET};

pub use navigation_service::{NavigationOutcome, NavigationService};
