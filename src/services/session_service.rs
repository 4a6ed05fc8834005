// src/services/session_service.rs
//
// Session Store - credential lifecycle and authentication calls
//
// RULES:
// - The credential is persisted on login and removed on logout, nothing else
// - Loading never validates the token against the backend; validity is
//   discovered lazily on the first authenticated request
// - The confirm-password mismatch check runs before any network call

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::{validate_session, Session};
use crate::error::{AppError, AppResult};
use crate::events::{
    EventBus, Operation, OperationFailed, OperationStarted, RegistrationCompleted, SessionClosed,
    SessionOpened, SessionRestored,
};
use crate::integrations::ShortenerApi;
use crate::repositories::SessionRepository;
use crate::services::op_guard::OpGuard;

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

pub struct SessionService {
    repo: Arc<dyn SessionRepository>,
    api: Arc<dyn ShortenerApi>,
    event_bus: Arc<EventBus>,
    session: RwLock<Session>,
    authenticating: AtomicBool,
}

impl SessionService {
    pub fn new(
        repo: Arc<dyn SessionRepository>,
        api: Arc<dyn ShortenerApi>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            repo,
            api,
            event_bus,
            session: RwLock::new(Session::anonymous()),
            authenticating: AtomicBool::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().unwrap().is_authenticated()
    }

    pub fn is_authenticating(&self) -> bool {
        self.authenticating.load(Ordering::SeqCst)
    }

    pub fn token(&self) -> Option<String> {
        self.session.read().unwrap().token().map(str::to_string)
    }

    /// Restore a persisted credential at startup.
    ///
    /// Returns whether a session was restored. Emits `SessionRestored` so the
    /// view controller selects the dashboard as the initial view.
    pub fn load(&self) -> AppResult<bool> {
        match self.repo.load()? {
            Some(token) => {
                let candidate = Session::authenticated(token);
                if validate_session(&candidate).is_err() {
                    // Stored junk; discard it and start logged out
                    self.repo.clear()?;
                    return Ok(false);
                }
                *self.session.write().unwrap() = candidate;
                self.event_bus.emit(SessionRestored::new());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Exchange credentials for a bearer token and persist it.
    pub async fn login(&self, request: LoginRequest) -> AppResult<()> {
        let _guard = OpGuard::acquire(&self.authenticating, "authentication")?;
        self.event_bus.emit(OperationStarted::new(Operation::Login));

        let token = match self.api.login(&request.username, &request.password).await {
            Ok(token) => token,
            Err(e) => {
                self.event_bus
                    .emit(OperationFailed::new(Operation::Login, e.to_string()));
                return Err(e);
            }
        };

        if let Err(e) = self.repo.save(&token) {
            self.event_bus
                .emit(OperationFailed::new(Operation::Login, e.to_string()));
            return Err(e);
        }

        *self.session.write().unwrap() = Session::authenticated(token);
        self.event_bus.emit(SessionOpened::new(request.username));
        Ok(())
    }

    /// Register a new account. The mismatch check is the single piece of
    /// client-side input validation; on mismatch no request is issued.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<()> {
        let _guard = OpGuard::acquire(&self.authenticating, "authentication")?;
        self.event_bus
            .emit(OperationStarted::new(Operation::Register));

        if request.password != request.confirm_password {
            let err = AppError::Validation("Passwords do not match".to_string());
            self.event_bus
                .emit(OperationFailed::new(Operation::Register, err.to_string()));
            return Err(err);
        }

        if let Err(e) = self.api.register(&request.username, &request.password).await {
            self.event_bus
                .emit(OperationFailed::new(Operation::Register, e.to_string()));
            return Err(e);
        }

        self.event_bus
            .emit(RegistrationCompleted::new(request.username));
        Ok(())
    }

    /// Remove the persisted credential and close the session.
    ///
    /// `SessionClosed` fans out to the rest of the app: the cached URL
    /// collection empties, the view returns to login, the notices wipe.
    pub fn logout(&self) -> AppResult<()> {
        self.repo.clear()?;
        self.session.write().unwrap().clear();
        self.event_bus.emit(SessionClosed::new());
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MemorySessionRepository;
    use super::*;
    use crate::integrations::shortener::client::MockShortenerApi;

    fn service_with(
        repo: MemorySessionRepository,
        api: MockShortenerApi,
    ) -> (Arc<SessionService>, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        let service = Arc::new(SessionService::new(
            Arc::new(repo),
            Arc::new(api),
            Arc::clone(&bus),
        ));
        (service, bus)
    }

    #[tokio::test]
    async fn test_login_persists_token_and_authenticates() {
        let mut api = MockShortenerApi::new();
        api.expect_login()
            .withf(|user, pass| user == "a" && pass == "b")
            .returning(|_, _| Ok("T".to_string()));

        let (service, _bus) = service_with(MemorySessionRepository::empty(), api);

        service
            .login(LoginRequest {
                username: "a".to_string(),
                password: "b".to_string(),
            })
            .await
            .unwrap();

        assert!(service.is_authenticated());
        assert_eq!(service.token().as_deref(), Some("T"));
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_anonymous() {
        let mut api = MockShortenerApi::new();
        api.expect_login()
            .returning(|_, _| Err(AppError::Auth("Invalid credentials".to_string())));

        let (service, _bus) = service_with(MemorySessionRepository::empty(), api);

        let result = service
            .login(LoginRequest {
                username: "a".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Auth(_))));
        assert!(!service.is_authenticated());
        assert!(!service.is_authenticating());
    }

    #[tokio::test]
    async fn test_register_mismatch_never_touches_network() {
        let mut api = MockShortenerApi::new();
        api.expect_register().never();

        let (service, _bus) = service_with(MemorySessionRepository::empty(), api);

        let result = service
            .register(RegisterRequest {
                username: "a".to_string(),
                password: "one".to_string(),
                confirm_password: "two".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(!service.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_success_does_not_authenticate() {
        let mut api = MockShortenerApi::new();
        api.expect_register().returning(|_, _| Ok(()));

        let (service, _bus) = service_with(MemorySessionRepository::empty(), api);

        service
            .register(RegisterRequest {
                username: "a".to_string(),
                password: "pw".to_string(),
                confirm_password: "pw".to_string(),
            })
            .await
            .unwrap();

        // Registration forces the login screen; the user still has to log in
        assert!(!service.is_authenticated());
    }

    #[test]
    fn test_load_restores_persisted_credential_without_network() {
        // No expectations on the mock: any call would panic the test
        let api = MockShortenerApi::new();
        let (service, _bus) = service_with(MemorySessionRepository::with_token("T"), api);

        assert!(service.load().unwrap());
        assert!(service.is_authenticated());
        assert_eq!(service.token().as_deref(), Some("T"));
    }

    #[test]
    fn test_load_discards_blank_stored_token() {
        let api = MockShortenerApi::new();
        let repo = MemorySessionRepository::with_token("   ");
        let (service, _bus) = service_with(repo, api);

        assert!(!service.load().unwrap());
        assert!(!service.is_authenticated());
    }

    #[test]
    fn test_logout_clears_credential_and_session() {
        let api = MockShortenerApi::new();
        let (service, bus) = service_with(MemorySessionRepository::with_token("T"), api);
        service.load().unwrap();

        service.logout().unwrap();

        assert!(!service.is_authenticated());
        assert!(service.token().is_none());
        let log = bus.get_event_log();
        assert_eq!(log.last().unwrap().event_type, "SessionClosed");
    }
}
