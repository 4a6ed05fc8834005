/// The client-side session: at most one opaque bearer credential.
///
/// The token is issued by the backend on login and never inspected locally.
/// Validity is discovered lazily on the first authenticated request, not at
/// load time. The token is deliberately not serializable; only the
/// session repository may persist it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// A session with no credential (logged out)
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    /// A session holding a bearer credential
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Drop the credential (logout or absent-on-load)
    pub fn clear(&mut self) {
        self.token = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}
