// src/services/url_service.rs
//
// Resource Synchronizer - the cached copy of the user's URL collection
//
// RULES:
// - The cache is replaced wholesale on every fetch, in server order
// - Create and delete NEVER patch the cache; they re-fetch the
//   authoritative list after the mutation response
// - A failed fetch leaves the previous cache untouched
// - Delete asks for confirmation before any request is issued

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::{validate_short_url, ShortUrl};
use crate::error::{AppError, AppResult};
use crate::events::{
    EventBus, LinkCopied, Operation, OperationFailed, OperationStarted, SessionClosed,
    ShortUrlCreated, ShortUrlDeleted, UrlCollectionRefreshed,
};
use crate::integrations::{Clipboard, ConfirmationPrompt, RemoteUrlRecord, ShortenerApi};
use crate::services::op_guard::OpGuard;
use crate::services::SessionService;

/// Fixed page size; the client never paginates
pub const PAGE_LIMIT: u32 = 100;
/// Fixed offset; always the first page
pub const PAGE_OFFSET: u32 = 0;

const CONFIRM_DELETE: &str = "Delete this URL?";

pub struct UrlService {
    api: Arc<dyn ShortenerApi>,
    session: Arc<SessionService>,
    confirm: Arc<dyn ConfirmationPrompt>,
    clipboard: Arc<dyn Clipboard>,
    event_bus: Arc<EventBus>,
    /// Origin used for share links; identical to the API origin by
    /// construction
    origin: String,
    urls: RwLock<Vec<ShortUrl>>,
    loading: AtomicBool,
    shortening: AtomicBool,
}

impl UrlService {
    pub fn new(
        api: Arc<dyn ShortenerApi>,
        session: Arc<SessionService>,
        confirm: Arc<dyn ConfirmationPrompt>,
        clipboard: Arc<dyn Clipboard>,
        event_bus: Arc<EventBus>,
        origin: String,
    ) -> Self {
        Self {
            api,
            session,
            confirm,
            clipboard,
            event_bus,
            origin,
            urls: RwLock::new(Vec::new()),
            loading: AtomicBool::new(false),
            shortening: AtomicBool::new(false),
        }
    }

    /// Snapshot of the cached collection, in server order
    pub fn urls(&self) -> Vec<ShortUrl> {
        self.urls.read().unwrap().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn is_shortening(&self) -> bool {
        self.shortening.load(Ordering::SeqCst)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// User-triggered fetch of the full collection.
    pub async fn fetch_all(&self) -> AppResult<usize> {
        let _guard = OpGuard::acquire(&self.loading, "url fetch")?;
        self.event_bus
            .emit(OperationStarted::new(Operation::FetchUrls));
        self.refresh().await
    }

    /// Submit a long URL for shortening, then re-fetch.
    ///
    /// The created record is never constructed locally; its generated id
    /// arrives only with the re-fetch. A failed re-fetch after a successful
    /// create surfaces on the notice board but does not fail the create.
    pub async fn create(&self, long_url: &str) -> AppResult<()> {
        let _guard = OpGuard::acquire(&self.shortening, "shorten")?;
        self.event_bus
            .emit(OperationStarted::new(Operation::Shorten));

        let token = self.bearer_token()?;
        if let Err(e) = self.api.create_url(&token, long_url).await {
            self.event_bus
                .emit(OperationFailed::new(Operation::Shorten, e.to_string()));
            return Err(e);
        }

        self.event_bus.emit(ShortUrlCreated::new(long_url));
        let _ = self.refresh().await;
        Ok(())
    }

    /// Delete one record after confirmation, then re-fetch.
    ///
    /// Returns false when the user declined; no request is issued in that
    /// case. On a failed delete the cache is left as-is, so the
    /// confirmed-deleted item may still show until the next fetch.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        if !self.confirm.confirm(CONFIRM_DELETE) {
            return Ok(false);
        }

        let _guard = OpGuard::acquire(&self.loading, "delete")?;
        self.event_bus.emit(OperationStarted::new(Operation::Delete));

        let token = self.bearer_token()?;
        if let Err(e) = self.api.delete_url(&token, id).await {
            self.event_bus
                .emit(OperationFailed::new(Operation::Delete, e.to_string()));
            return Err(e);
        }

        self.event_bus.emit(ShortUrlDeleted::new(id));
        let _ = self.refresh().await;
        Ok(true)
    }

    /// Copy the share link for a record to the system clipboard.
    pub fn copy_share_link(&self, id: &str) -> AppResult<String> {
        let link = match self.urls.read().unwrap().iter().find(|u| u.id == id) {
            Some(record) => record.share_link(&self.origin),
            None => format!("{}/{}", self.origin.trim_end_matches('/'), id),
        };

        if let Err(e) = self.clipboard.write_text(&link) {
            self.event_bus
                .emit(OperationFailed::new(Operation::Copy, e.to_string()));
            return Err(e);
        }

        self.event_bus.emit(LinkCopied::new(link.clone()));
        Ok(link)
    }

    /// Empty the cache without touching the backend (logout path).
    pub fn clear(&self) {
        self.urls.write().unwrap().clear();
    }

    /// Subscribe cache clearing to the session lifecycle.
    pub fn register_event_handlers(self: &Arc<Self>) {
        let service = Arc::clone(self);
        self.event_bus
            .subscribe::<SessionClosed, _>(move |_| service.clear());
    }

    /// Fetch and replace. The caller holds whichever busy flag covers the
    /// logical operation this refresh belongs to.
    async fn refresh(&self) -> AppResult<usize> {
        let token = self.bearer_token()?;

        let result = self
            .api
            .list_urls(&token, PAGE_LIMIT, PAGE_OFFSET)
            .await
            .and_then(Self::map_records);

        match result {
            Ok(records) => {
                let count = records.len();
                *self.urls.write().unwrap() = records;
                self.event_bus.emit(UrlCollectionRefreshed::new(count));
                Ok(count)
            }
            Err(e) => {
                self.event_bus
                    .emit(OperationFailed::new(Operation::FetchUrls, e.to_string()));
                Err(e)
            }
        }
    }

    /// Wire records → domain records. One invalid record rejects the whole
    /// snapshot so cache replacement stays all-or-nothing.
    fn map_records(records: Vec<RemoteUrlRecord>) -> AppResult<Vec<ShortUrl>> {
        records
            .into_iter()
            .map(|r| {
                let url = ShortUrl {
                    id: r.id,
                    long_url: r.long_url,
                    short_url: r.short_url,
                    visit_count: r.visit_count,
                };
                validate_short_url(&url)?;
                Ok(url)
            })
            .collect()
    }

    fn bearer_token(&self) -> AppResult<String> {
        // Guarded by view reachability; absent here is a programming error
        self.session.token().ok_or(AppError::NotAuthenticated)
    }
}
