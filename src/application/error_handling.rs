// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Never exposes internal implementation details

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_type: ErrorType,
    pub message: String,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Login or registration rejected
    Auth,

    /// Local input validation failed
    Validation,

    /// Listing the collection failed
    Fetch,

    /// Create or delete failed
    Mutation,

    /// The operation is already in flight
    Busy,

    /// View transition denied
    Navigation,

    /// Storage, clipboard, or other internal failure
    Internal,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        let error_type = match &error {
            AppError::Auth(_) | AppError::NotAuthenticated => ErrorType::Auth,
            AppError::Validation(_) => ErrorType::Validation,
            AppError::Fetch(_) => ErrorType::Fetch,
            AppError::Mutation(_) => ErrorType::Mutation,
            AppError::OperationInProgress(_) => ErrorType::Busy,
            AppError::Navigation(_) => ErrorType::Navigation,
            AppError::Domain(_)
            | AppError::Database(_)
            | AppError::Pool(_)
            | AppError::Io(_)
            | AppError::Clipboard(_) => ErrorType::Internal,
        };

        if error_type == ErrorType::Internal {
            tracing::error!("internal error surfaced to UI: {error}");
        }

        Self {
            error_type,
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_maps_to_auth() {
        let response = ErrorResponse::from(AppError::Auth("Invalid credentials".to_string()));
        assert_eq!(response.error_type, ErrorType::Auth);
        assert_eq!(response.message, "Invalid credentials");
    }

    #[test]
    fn test_validation_error_keeps_message() {
        let response =
            ErrorResponse::from(AppError::Validation("Passwords do not match".to_string()));
        assert_eq!(response.error_type, ErrorType::Validation);
        assert_eq!(response.message, "Passwords do not match");
    }

    #[test]
    fn test_busy_error_maps_to_busy() {
        let response = ErrorResponse::from(AppError::OperationInProgress("shorten"));
        assert_eq!(response.error_type, ErrorType::Busy);
        assert_eq!(response.message, "shorten is already in progress");
    }

    #[test]
    fn test_serialization_uses_snake_case() {
        let response = ErrorResponse::from(AppError::Fetch("Failed to fetch URLs".to_string()));
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"fetch\""));
        assert!(json.contains("Failed to fetch URLs"));
    }
}
