// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

/// The logical user-facing operations, used to label operation lifecycle
/// events. Display renders the name shown in busy/error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Login,
    Register,
    FetchUrls,
    Shorten,
    Delete,
    Copy,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Login => write!(f, "login"),
            Operation::Register => write!(f, "register"),
            Operation::FetchUrls => write!(f, "url fetch"),
            Operation::Shorten => write!(f, "shorten"),
            Operation::Delete => write!(f, "delete"),
            Operation::Copy => write!(f, "copy"),
        }
    }
}

// ============================================================================
// OPERATION LIFECYCLE EVENTS
// ============================================================================

/// Emitted when a user-facing operation begins.
/// The notice board clears the error slot on this event; the success slot is
/// left alone (messages are mutually displayable).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub operation: Operation,
}

impl OperationStarted {
    pub fn new(operation: Operation) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            operation,
        }
    }
}

impl DomainEvent for OperationStarted {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "OperationStarted"
    }
}

/// Emitted when a user-facing operation fails terminally.
/// Carries the single human-readable message the UI displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub operation: Operation,
    pub message: String,
}

impl OperationFailed {
    pub fn new(operation: Operation, message: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            operation,
            message: message.into(),
        }
    }
}

impl DomainEvent for OperationFailed {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "OperationFailed"
    }
}

// ============================================================================
// SESSION LIFECYCLE EVENTS
// ============================================================================

/// Emitted when a persisted credential was found at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRestored {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl SessionRestored {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for SessionRestored {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for SessionRestored {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "SessionRestored"
    }
}

/// Emitted on successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionOpened {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub username: String,
}

impl SessionOpened {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            username: username.into(),
        }
    }
}

impl DomainEvent for SessionOpened {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "SessionOpened"
    }
}

/// Emitted on logout, after the credential has been removed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClosed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl SessionClosed {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for SessionClosed {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for SessionClosed {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "SessionClosed"
    }
}

/// Emitted when the backend accepted a registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub username: String,
}

impl RegistrationCompleted {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            username: username.into(),
        }
    }
}

impl DomainEvent for RegistrationCompleted {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "RegistrationCompleted"
    }
}

// ============================================================================
// COLLECTION LIFECYCLE EVENTS
// ============================================================================

/// Emitted after the cached collection was replaced wholesale by a fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlCollectionRefreshed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub count: usize,
}

impl UrlCollectionRefreshed {
    pub fn new(count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            count,
        }
    }
}

impl DomainEvent for UrlCollectionRefreshed {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "UrlCollectionRefreshed"
    }
}

/// Emitted when the backend accepted a shorten request.
/// The authoritative record (with its generated id) arrives only with the
/// re-fetch that follows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortUrlCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub long_url: String,
}

impl ShortUrlCreated {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            long_url: long_url.into(),
        }
    }
}

impl DomainEvent for ShortUrlCreated {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "ShortUrlCreated"
    }
}

/// Emitted when the backend accepted a delete request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortUrlDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub id: String,
}

impl ShortUrlDeleted {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            id: id.into(),
        }
    }
}

impl DomainEvent for ShortUrlDeleted {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "ShortUrlDeleted"
    }
}

/// Emitted when a share link was written to the system clipboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkCopied {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub link: String,
}

impl LinkCopied {
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            link: link.into(),
        }
    }
}

impl DomainEvent for LinkCopied {
    fn event_id(&self) -> Uuid {
        self.event_id
    }
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
    fn event_type(&self) -> &'static str {
        "LinkCopied"
    }
}
