// src/application/commands/auth_commands.rs
//
// Auth Command Handlers

use tauri::State;

use crate::application::{
    dto::*,
    error_handling::ErrorResponse,
    state::AppState,
};
use crate::services::{LoginRequest, RegisterRequest};

/// Restore a persisted session at webview startup.
///
/// With a stored credential the initial view is the dashboard and its entry
/// fetch is issued here; without one the client starts on the login screen.
#[tauri::command]
pub async fn bootstrap(state: State<'_, AppState>) -> Result<UiStateDto, ErrorResponse> {
    let restored = state.session_service.load()?;
    if restored {
        // Dashboard entry fetch; failures land on the notice board
        let _ = state.url_service.fetch_all().await;
    }
    Ok(state.snapshot())
}

/// Log in and enter the dashboard
#[tauri::command]
pub async fn login(
    credentials: LoginDto,
    state: State<'_, AppState>,
) -> Result<UiStateDto, ErrorResponse> {
    state
        .session_service
        .login(LoginRequest {
            username: credentials.username,
            password: credentials.password,
        })
        .await?;

    // Dashboard entry fetch; failures land on the notice board
    let _ = state.url_service.fetch_all().await;
    Ok(state.snapshot())
}

/// Register a new account; on success the view returns to login
#[tauri::command]
pub async fn register(
    registration: RegisterDto,
    state: State<'_, AppState>,
) -> Result<UiStateDto, ErrorResponse> {
    state
        .session_service
        .register(RegisterRequest {
            username: registration.username,
            password: registration.password,
            confirm_password: registration.confirm_password,
        })
        .await?;

    Ok(state.snapshot())
}

/// Log out: credential, cached collection, and notices all clear
#[tauri::command]
pub async fn logout(state: State<'_, AppState>) -> Result<UiStateDto, ErrorResponse> {
    state.session_service.logout()?;
    Ok(state.snapshot())
}
