// src/services/navigation_service.rs
//
// View Controller - guarded screen selection
//
// RULES:
// - User navigation goes through the domain transition guards
// - Forced transitions (login, registration, logout outcomes) arrive as
//   events and land only on states legal for the session they accompany
// - Entering the dashboard is reported to the caller, which issues the
//   one fetch per entry

use std::sync::{Arc, RwLock};

use crate::domain::{validate_view_state, DomainError, View};
use crate::error::{AppError, AppResult};
use crate::events::{
    EventBus, RegistrationCompleted, SessionClosed, SessionOpened, SessionRestored,
};
use crate::services::SessionService;

/// Result of a user-triggered navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub previous: View,
    pub current: View,
}

impl NavigationOutcome {
    /// True exactly when this navigation moved onto the dashboard.
    /// The entry fetch keys off this, so re-selecting the dashboard does not
    /// re-fetch.
    pub fn entered_dashboard(&self) -> bool {
        self.previous != View::Dashboard && self.current == View::Dashboard
    }
}

pub struct NavigationService {
    session: Arc<SessionService>,
    event_bus: Arc<EventBus>,
    view: RwLock<View>,
}

impl NavigationService {
    pub fn new(session: Arc<SessionService>, event_bus: Arc<EventBus>) -> Self {
        Self {
            session,
            event_bus,
            view: RwLock::new(View::Login),
        }
    }

    pub fn current(&self) -> View {
        *self.view.read().unwrap()
    }

    /// Attempt a user-triggered transition.
    pub fn navigate(&self, target: View) -> AppResult<NavigationOutcome> {
        let authenticated = self.session.is_authenticated();
        let mut view = self.view.write().unwrap();
        let previous = *view;

        let current = previous.transition(target, authenticated).map_err(|e| match e {
            DomainError::InvalidStateTransition(msg) => AppError::Navigation(msg),
            other => AppError::Domain(other),
        })?;

        *view = current;
        Ok(NavigationOutcome { previous, current })
    }

    /// Subscribe the forced transitions to the session lifecycle.
    pub fn register_event_handlers(self: &Arc<Self>) {
        {
            let nav = Arc::clone(self);
            self.event_bus
                .subscribe::<SessionOpened, _>(move |_| nav.force(View::Dashboard));
        }
        {
            let nav = Arc::clone(self);
            self.event_bus
                .subscribe::<SessionRestored, _>(move |_| nav.force(View::Dashboard));
        }
        {
            let nav = Arc::clone(self);
            self.event_bus
                .subscribe::<RegistrationCompleted, _>(move |_| nav.force(View::Login));
        }
        {
            let nav = Arc::clone(self);
            self.event_bus
                .subscribe::<SessionClosed, _>(move |_| nav.force(View::Login));
        }
    }

    fn force(&self, view: View) {
        // Forced transitions accompany a session change; the pairing must
        // already be legal when the event fires
        debug_assert!(validate_view_state(view, self.session.is_authenticated()).is_ok());
        *self.view.write().unwrap() = view;
    }
}
