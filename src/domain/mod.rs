// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod navigation;
pub mod session;
pub mod short_url;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Session Domain
pub use session::{validate_session, Session};

// Short URL Domain
pub use short_url::{validate_short_url, ShortUrl};

// Navigation Domain
pub use navigation::{validate_view_state, View};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
