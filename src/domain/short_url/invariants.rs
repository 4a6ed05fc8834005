use super::entity::ShortUrl;
use crate::domain::{DomainError, DomainResult};

/// Validates all ShortUrl invariants
///
/// Applied to every record of a fetched snapshot; one invalid record rejects
/// the whole snapshot, keeping cache replacement all-or-nothing.
pub fn validate_short_url(url: &ShortUrl) -> DomainResult<()> {
    if url.id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "ShortUrl id cannot be empty".to_string(),
        ));
    }
    if url.long_url.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "ShortUrl long_url cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the ShortUrl domain:
///
/// 1. The id is opaque and non-empty
/// 2. The long URL is non-empty (syntactic URL validity is the input
///    affordance's job, not re-checked here)
/// 3. The visit count is non-negative by construction (u64)
/// 4. Records are backend-owned; the client never mutates one
