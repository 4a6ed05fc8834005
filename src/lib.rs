// src/lib.rs
// LinkDock - Desktop client for a self-hosted URL shortener
//
// Architecture:
// - Domain-centric: session, collection, and navigation rules live in domain
// - Event-driven: services coordinate through events
// - Explicit: no implicit behavior, no magic
// - Always authoritative: the collection is re-fetched after every mutation,
//   never patched locally

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_session,
    validate_short_url,
    validate_view_state,
    // Session
    Session,
    // Collection
    ShortUrl,
    // Navigation
    View,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    register_notice_handlers,
    DomainEvent,
    EventBus,
    EventLogEntry,
    LinkCopied,
    Operation,
    OperationFailed,
    OperationStarted,
    RegistrationCompleted,
    SessionClosed,
    SessionOpened,
    SessionRestored,
    ShortUrlCreated,
    ShortUrlDeleted,
    UrlCollectionRefreshed,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, create_connection_pool_at, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{SessionRepository, SqliteSessionRepository};

// ============================================================================
// PUBLIC API - Infrastructure
// ============================================================================

pub use infrastructure::{NoticeBoard, Notices};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    // Session Store
    LoginRequest,
    // View Controller
    NavigationOutcome,
    NavigationService,
    RegisterRequest,
    SessionService,
    // Resource Synchronizer
    UrlService,
    PAGE_LIMIT,
    PAGE_OFFSET,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

// Re-export application submodules
pub use application::commands;
pub use application::dto;

// ============================================================================
// PUBLIC API - Configuration & Integrations
// ============================================================================

pub use config::AppConfig;

pub use integrations::{
    Clipboard, ConfirmationPrompt, DialogConfirm, RemoteUrlRecord, ShortenerApi, ShortenerClient,
    SystemClipboard,
};
