// src/error/types.rs
use crate::domain::DomainError;
use thiserror::Error;

/// Application-level error taxonomy.
///
/// The remote API is opaque: every non-success response collapses into the
/// generic message for the operation that issued it (`Auth`, `Fetch`,
/// `Mutation`). No status codes or structured error bodies leak past the
/// gateway.
#[derive(Debug, Error)]
pub enum AppError {
    /// Login or registration rejected by the backend
    #[error("{0}")]
    Auth(String),

    /// Local input validation failed (no network call was made)
    #[error("{0}")]
    Validation(String),

    /// Listing the URL collection failed
    #[error("{0}")]
    Fetch(String),

    /// Create or delete rejected by the backend
    #[error("{0}")]
    Mutation(String),

    /// The same logical operation is already in flight
    #[error("{0} is already in progress")]
    OperationInProgress(&'static str),

    /// An authenticated call was attempted without a session credential
    #[error("Not authenticated")]
    NotAuthenticated,

    /// A view transition was denied by the navigation guards
    #[error("Navigation denied: {0}")]
    Navigation(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
