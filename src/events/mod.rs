// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod handlers;
pub mod types;

// ============================================================================
// PUBLIC EXPORTS - Event Types and Bus Only
// ============================================================================

pub use types::DomainEvent;

pub use types::{
    LinkCopied,
    Operation,
    OperationFailed,
    // Operation lifecycle
    OperationStarted,
    RegistrationCompleted,
    SessionClosed,
    // Session lifecycle
    SessionOpened,
    SessionRestored,
    ShortUrlCreated,
    ShortUrlDeleted,
    // Collection lifecycle
    UrlCollectionRefreshed,
};

pub use bus::{EventBus, EventLogEntry};

pub use handlers::register_notice_handlers;
