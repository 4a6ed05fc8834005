use super::entity::View;
use crate::domain::{DomainError, DomainResult};

/// Validates that a view is legal for the given session state.
///
/// The transition guards make illegal states unreachable through user
/// navigation; this check covers the forced entry points (startup restore,
/// post-login, post-logout) so the pairing can be asserted anywhere.
pub fn validate_view_state(view: View, authenticated: bool) -> DomainResult<()> {
    match view {
        View::Dashboard if !authenticated => Err(DomainError::InvariantViolation(
            "dashboard view without an authenticated session".to_string(),
        )),
        View::Login | View::Register if authenticated => Err(DomainError::InvariantViolation(
            format!("{view} view while a session is active"),
        )),
        _ => Ok(()),
    }
}

/// Invariants that must hold true for the Navigation domain:
///
/// 1. Exactly one view is current at any time
/// 2. Dashboard implies an authenticated session
/// 3. Login/Register imply an unauthenticated session
/// 4. Forced transitions land only on states legal for the session they
///    accompany

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_pairings() {
        assert!(validate_view_state(View::Login, false).is_ok());
        assert!(validate_view_state(View::Register, false).is_ok());
        assert!(validate_view_state(View::Dashboard, true).is_ok());
    }

    #[test]
    fn test_illegal_pairings() {
        assert!(validate_view_state(View::Dashboard, false).is_err());
        assert!(validate_view_state(View::Login, true).is_err());
        assert!(validate_view_state(View::Register, true).is_err());
    }
}
