use super::entity::Session;
use crate::domain::{DomainError, DomainResult};

/// Validates all Session invariants
pub fn validate_session(session: &Session) -> DomainResult<()> {
    if let Some(token) = session.token() {
        if token.trim().is_empty() {
            return Err(DomainError::InvariantViolation(
                "Session token cannot be empty".to_string(),
            ));
        }
    }
    Ok(())
}

/// Invariants that must hold true for the Session domain:
///
/// 1. A session holds at most one credential
/// 2. A present credential is a non-empty opaque string
/// 3. The credential is never validated locally
/// 4. Clearing the session is always permitted

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session_is_valid() {
        assert!(validate_session(&Session::anonymous()).is_ok());
    }

    #[test]
    fn test_opaque_token_is_valid() {
        assert!(validate_session(&Session::authenticated("T")).is_ok());
    }

    #[test]
    fn test_blank_token_fails() {
        assert!(validate_session(&Session::authenticated("   ")).is_err());
    }
}
