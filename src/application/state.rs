// src/application/state.rs

use std::sync::Arc;

use crate::application::dto::{ShortUrlDto, UiStateDto};
use crate::events::EventBus;
use crate::infrastructure::NoticeBoard;
use crate::services::{NavigationService, SessionService, UrlService};

/// Application state managed by Tauri.
///
/// The one explicit context object holding all client-wide mutable state:
/// session, cached collection, current view, and notices all live behind
/// these services, never in ambient globals.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub notices: Arc<NoticeBoard>,
    pub session_service: Arc<SessionService>,
    pub url_service: Arc<UrlService>,
    pub navigation_service: Arc<NavigationService>,
}

impl AppState {
    /// One coherent snapshot of everything the webview renders.
    pub fn snapshot(&self) -> UiStateDto {
        let origin = self.url_service.origin().to_string();
        let urls = self
            .url_service
            .urls()
            .iter()
            .map(|record| ShortUrlDto::from_record(record, &origin))
            .collect();

        UiStateDto::new(
            self.navigation_service.current(),
            self.session_service.is_authenticated(),
            self.url_service.is_loading() || self.session_service.is_authenticating(),
            self.url_service.is_shortening(),
            self.notices.snapshot(),
            urls,
        )
    }
}
