// src/main.rs

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use std::sync::Arc;

use tauri::Manager;
use tracing_subscriber::EnvFilter;

// Direct imports for the Tauri command handler macro
use linkdock::application::commands::*;
use linkdock::application::state::AppState;
use linkdock::config::AppConfig;
use linkdock::db::{create_connection_pool, initialize_database};
use linkdock::events::{register_notice_handlers, EventBus};
use linkdock::infrastructure::NoticeBoard;
use linkdock::integrations::*;
use linkdock::repositories::*;
use linkdock::services::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // 1. INFRASTRUCTURE
            let config = AppConfig::load();
            let event_bus = Arc::new(EventBus::new());
            let notices = Arc::new(NoticeBoard::new());
            let pool = Arc::new(create_connection_pool()?);

            // Initialize schema (idempotent)
            {
                let conn = pool.get()?;
                initialize_database(&conn)?;
            }

            // 2. REPOSITORIES & INTEGRATIONS
            let session_repo: Arc<dyn SessionRepository> =
                Arc::new(SqliteSessionRepository::new(pool.clone()));
            let api: Arc<dyn ShortenerApi> =
                Arc::new(ShortenerClient::new(config.backend_url.clone()));
            let confirm: Arc<dyn ConfirmationPrompt> =
                Arc::new(DialogConfirm::new(app.handle().clone()));
            let clipboard: Arc<dyn Clipboard> = Arc::new(SystemClipboard);

            // 3. SERVICES
            let session_service = Arc::new(SessionService::new(
                session_repo,
                Arc::clone(&api),
                Arc::clone(&event_bus),
            ));
            let url_service = Arc::new(UrlService::new(
                api,
                Arc::clone(&session_service),
                confirm,
                clipboard,
                Arc::clone(&event_bus),
                config.backend_url.clone(),
            ));
            let navigation_service = Arc::new(NavigationService::new(
                Arc::clone(&session_service),
                Arc::clone(&event_bus),
            ));

            // 4. EVENT HANDLER REGISTRATION (WIRING)
            register_notice_handlers(&event_bus, Arc::clone(&notices));
            url_service.register_event_handlers();
            navigation_service.register_event_handlers();

            // 5. APPLICATION STATE
            app.manage(AppState {
                event_bus,
                notices,
                session_service,
                url_service,
                navigation_service,
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            bootstrap,
            login,
            register,
            logout,
            navigate,
            ui_state,
            refresh_urls,
            shorten_url,
            delete_url,
            copy_short_link
        ])
        .run(tauri::generate_context!())?;

    Ok(())
}
