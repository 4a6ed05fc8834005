// src/application/commands/url_commands.rs
//
// Short URL Command Handlers

use tauri::State;

use crate::application::{dto::*, error_handling::ErrorResponse, state::AppState};

/// Re-fetch the collection on user demand
#[tauri::command]
pub async fn refresh_urls(state: State<'_, AppState>) -> Result<UiStateDto, ErrorResponse> {
    state.url_service.fetch_all().await?;
    Ok(state.snapshot())
}

/// Shorten a long URL; the new record arrives via the triggered re-fetch
#[tauri::command]
pub async fn shorten_url(
    long_url: String,
    state: State<'_, AppState>,
) -> Result<UiStateDto, ErrorResponse> {
    state.url_service.create(&long_url).await?;
    Ok(state.snapshot())
}

/// Delete a record after a blocking confirmation prompt
#[tauri::command]
pub async fn delete_url(
    id: String,
    state: State<'_, AppState>,
) -> Result<UiStateDto, ErrorResponse> {
    state.url_service.delete(&id).await?;
    Ok(state.snapshot())
}

/// Copy the share link for a record to the system clipboard
#[tauri::command]
pub async fn copy_short_link(
    id: String,
    state: State<'_, AppState>,
) -> Result<UiStateDto, ErrorResponse> {
    state.url_service.copy_share_link(&id)?;
    Ok(state.snapshot())
}
