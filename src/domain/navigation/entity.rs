use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// The three mutually exclusive screens of the client.
///
/// Reachability is a function of session state alone:
/// - `Dashboard` requires an authenticated session
/// - `Login` and `Register` require an unauthenticated session
///
/// Login and Register are freely interchangeable while logged out, and the
/// only way off the Dashboard while logged in is logout. User navigation goes
/// through `transition`; the forced moves (login success, registration
/// success, logout) are event-driven and bypass no guard because their
/// outcome is by definition a legal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Login,
    Register,
    Dashboard,
}

impl View {
    /// Attempt a user-triggered transition to `target`.
    ///
    /// Returns the new view, or an error when the target is unreachable in
    /// the current session state. Transitioning to the current view is legal
    /// and idempotent.
    pub fn transition(self, target: View, authenticated: bool) -> DomainResult<View> {
        match target {
            View::Dashboard if !authenticated => Err(DomainError::InvalidStateTransition(
                "dashboard requires an authenticated session".to_string(),
            )),
            View::Login | View::Register if authenticated => {
                Err(DomainError::InvalidStateTransition(format!(
                    "{target} is not reachable while authenticated; log out first",
                )))
            }
            _ => Ok(target),
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Login => write!(f, "login"),
            View::Register => write!(f, "register"),
            View::Dashboard => write!(f, "dashboard"),
        }
    }
}

impl std::str::FromStr for View {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(View::Login),
            "register" => Ok(View::Register),
            "dashboard" => Ok(View::Dashboard),
            other => Err(DomainError::InvariantViolation(format!(
                "Unknown view: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_register_interchange_while_logged_out() {
        assert_eq!(
            View::Login.transition(View::Register, false).unwrap(),
            View::Register
        );
        assert_eq!(
            View::Register.transition(View::Login, false).unwrap(),
            View::Login
        );
    }

    #[test]
    fn test_dashboard_unreachable_without_session() {
        assert!(View::Login.transition(View::Dashboard, false).is_err());
        assert!(View::Register.transition(View::Dashboard, false).is_err());
    }

    #[test]
    fn test_auth_screens_unreachable_while_authenticated() {
        assert!(View::Dashboard.transition(View::Login, true).is_err());
        assert!(View::Dashboard.transition(View::Register, true).is_err());
    }

    #[test]
    fn test_dashboard_reachable_when_authenticated() {
        assert_eq!(
            View::Login.transition(View::Dashboard, true).unwrap(),
            View::Dashboard
        );
    }

    #[test]
    fn test_transition_to_self_is_idempotent() {
        assert_eq!(
            View::Dashboard.transition(View::Dashboard, true).unwrap(),
            View::Dashboard
        );
        assert_eq!(
            View::Login.transition(View::Login, false).unwrap(),
            View::Login
        );
    }

    #[test]
    fn test_view_round_trips_through_str() {
        for view in [View::Login, View::Register, View::Dashboard] {
            let parsed: View = view.to_string().parse().unwrap();
            assert_eq!(parsed, view);
        }
        assert!("settings".parse::<View>().is_err());
    }
}
