// src/application/commands/navigation_commands.rs
//
// Navigation Command Handlers

use tauri::State;

use crate::application::{dto::*, error_handling::ErrorResponse, state::AppState};
use crate::domain::View;

/// User-triggered view change, guarded by the navigation state machine.
/// Entering the dashboard issues the one fetch per entry.
#[tauri::command]
pub async fn navigate(
    target: View,
    state: State<'_, AppState>,
) -> Result<UiStateDto, ErrorResponse> {
    let outcome = state.navigation_service.navigate(target)?;

    if outcome.entered_dashboard() {
        // Dashboard entry fetch; failures land on the notice board
        let _ = state.url_service.fetch_all().await;
    }

    Ok(state.snapshot())
}

/// Current UI snapshot without side effects
#[tauri::command]
pub async fn ui_state(state: State<'_, AppState>) -> Result<UiStateDto, ErrorResponse> {
    Ok(state.snapshot())
}
