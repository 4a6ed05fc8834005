// src/services/url_service_tests.rs
//
// UNIT TESTS: Resource synchronization contract
//
// PURPOSE:
// - Prove the cache is replaced wholesale and only by fetches
// - Prove create/delete always re-fetch and never patch the cache
// - Prove failures leave the previous cache untouched and clear busy flags
// - Prove declined confirmation issues no network call

mod synchronization_tests {
    use std::sync::Arc;

    use crate::domain::ShortUrl;
    use crate::error::AppError;
    use crate::events::{register_notice_handlers, EventBus};
    use crate::infrastructure::NoticeBoard;
    use crate::integrations::clipboard::MockClipboard;
    use crate::integrations::dialog::MockConfirmationPrompt;
    use crate::integrations::shortener::client::MockShortenerApi;
    use crate::integrations::RemoteUrlRecord;
    use crate::services::session_service::testing::MemorySessionRepository;
    use crate::services::{SessionService, UrlService};

    const ORIGIN: &str = "http://localhost:8080";

    fn remote(id: &str, long_url: &str, visits: u64) -> RemoteUrlRecord {
        RemoteUrlRecord {
            id: id.to_string(),
            long_url: long_url.to_string(),
            short_url: format!("{ORIGIN}/{id}"),
            visit_count: visits,
        }
    }

    fn local(id: &str, long_url: &str, visits: u64) -> ShortUrl {
        ShortUrl {
            id: id.to_string(),
            long_url: long_url.to_string(),
            short_url: format!("{ORIGIN}/{id}"),
            visit_count: visits,
        }
    }

    struct Harness {
        service: Arc<UrlService>,
        session: Arc<SessionService>,
        board: Arc<NoticeBoard>,
        bus: Arc<EventBus>,
    }

    fn harness(
        api: MockShortenerApi,
        confirm: MockConfirmationPrompt,
        clipboard: MockClipboard,
    ) -> Harness {
        let bus = Arc::new(EventBus::new());
        let board = Arc::new(NoticeBoard::new());
        register_notice_handlers(&bus, Arc::clone(&board));

        let session = Arc::new(SessionService::new(
            Arc::new(MemorySessionRepository::with_token("T")),
            Arc::new(MockShortenerApi::new()),
            Arc::clone(&bus),
        ));
        session.load().unwrap();

        let service = Arc::new(UrlService::new(
            Arc::new(api),
            Arc::clone(&session),
            Arc::new(confirm),
            Arc::new(clipboard),
            Arc::clone(&bus),
            ORIGIN.to_string(),
        ));
        service.register_event_handlers();

        Harness {
            service,
            session,
            board,
            bus,
        }
    }

    // ------------------------------------------------------------------
    // fetch_all
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_fetch_replaces_cache_wholesale_in_server_order() {
        let mut api = MockShortenerApi::new();
        api.expect_list_urls().times(1).returning(|_, _, _| {
            Ok(vec![
                remote("bbb", "https://example.com/b", 3),
                remote("aaa", "https://example.com/a", 0),
            ])
        });

        let h = harness(api, MockConfirmationPrompt::new(), MockClipboard::new());

        let count = h.service.fetch_all().await.unwrap();

        assert_eq!(count, 2);
        // Server order preserved, not sorted
        assert_eq!(
            h.service.urls(),
            vec![
                local("bbb", "https://example.com/b", 3),
                local("aaa", "https://example.com/a", 0),
            ]
        );
        assert!(!h.service.is_loading());
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_cache_and_sets_error() {
        let mut seq = mockall::Sequence::new();
        let mut api = MockShortenerApi::new();
        api.expect_list_urls()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(vec![remote("aaa", "https://example.com/a", 0)]));
        api.expect_list_urls()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Err(AppError::Fetch("Failed to fetch URLs".to_string())));

        let h = harness(api, MockConfirmationPrompt::new(), MockClipboard::new());

        h.service.fetch_all().await.unwrap();
        let before = h.service.urls();

        let result = h.service.fetch_all().await;

        assert!(matches!(result, Err(AppError::Fetch(_))));
        assert_eq!(h.service.urls(), before);
        assert_eq!(
            h.board.snapshot().error.as_deref(),
            Some("Failed to fetch URLs")
        );
        assert!(!h.service.is_loading());
    }

    #[tokio::test]
    async fn test_invalid_record_rejects_whole_snapshot() {
        let mut seq = mockall::Sequence::new();
        let mut api = MockShortenerApi::new();
        api.expect_list_urls()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(vec![remote("aaa", "https://example.com/a", 0)]));
        api.expect_list_urls()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| {
                Ok(vec![
                    remote("bbb", "https://example.com/b", 0),
                    remote("", "https://example.com/broken", 0),
                ])
            });

        let h = harness(api, MockConfirmationPrompt::new(), MockClipboard::new());

        h.service.fetch_all().await.unwrap();
        let before = h.service.urls();

        assert!(h.service.fetch_all().await.is_err());
        // All-or-nothing: the valid record of the bad snapshot did not land
        assert_eq!(h.service.urls(), before);
    }

    // ------------------------------------------------------------------
    // create
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_create_refetches_instead_of_patching() {
        let mut api = MockShortenerApi::new();
        api.expect_create_url()
            .withf(|_, url| url == "https://example.com")
            .times(1)
            .returning(|_, _| Ok(()));
        api.expect_list_urls()
            .times(1)
            .returning(|_, _, _| Ok(vec![remote("gen1", "https://example.com", 0)]));

        let h = harness(api, MockConfirmationPrompt::new(), MockClipboard::new());

        h.service.create("https://example.com").await.unwrap();

        // The displayed collection is exactly the re-fetch result: the
        // backend-generated id, nothing optimistic
        assert_eq!(
            h.service.urls(),
            vec![local("gen1", "https://example.com", 0)]
        );
        assert_eq!(h.board.snapshot().success.as_deref(), Some("URL shortened!"));
        assert!(!h.service.is_shortening());
    }

    #[tokio::test]
    async fn test_failed_create_sets_error_and_skips_refetch() {
        let mut api = MockShortenerApi::new();
        api.expect_create_url()
            .times(1)
            .returning(|_, _| Err(AppError::Mutation("Failed to shorten URL".to_string())));
        api.expect_list_urls().never();

        let h = harness(api, MockConfirmationPrompt::new(), MockClipboard::new());

        let result = h.service.create("https://example.com").await;

        assert!(matches!(result, Err(AppError::Mutation(_))));
        assert!(h.service.urls().is_empty());
        assert_eq!(
            h.board.snapshot().error.as_deref(),
            Some("Failed to shorten URL")
        );
        assert!(!h.service.is_shortening());
    }

    #[tokio::test]
    async fn test_next_operation_clears_previous_error() {
        let mut api = MockShortenerApi::new();
        api.expect_create_url()
            .times(1)
            .returning(|_, _| Err(AppError::Mutation("Failed to shorten URL".to_string())));
        api.expect_list_urls().times(1).returning(|_, _, _| Ok(vec![]));

        let h = harness(api, MockConfirmationPrompt::new(), MockClipboard::new());

        let _ = h.service.create("https://example.com").await;
        assert!(h.board.snapshot().error.is_some());

        h.service.fetch_all().await.unwrap();
        assert!(h.board.snapshot().error.is_none());
    }

    // ------------------------------------------------------------------
    // delete
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_declined_delete_issues_no_network_call() {
        let mut api = MockShortenerApi::new();
        api.expect_list_urls()
            .times(1)
            .returning(|_, _, _| Ok(vec![remote("abc123", "https://example.com", 0)]));
        api.expect_delete_url().never();

        let mut confirm = MockConfirmationPrompt::new();
        confirm.expect_confirm().times(1).return_const(false);

        let h = harness(api, confirm, MockClipboard::new());
        h.service.fetch_all().await.unwrap();
        let before = h.service.urls();

        let deleted = h.service.delete("abc123").await.unwrap();

        assert!(!deleted);
        assert_eq!(h.service.urls(), before);
        assert!(h.board.snapshot().error.is_none());
    }

    #[tokio::test]
    async fn test_confirmed_delete_refetches() {
        let mut api = MockShortenerApi::new();
        api.expect_delete_url()
            .withf(|_, id| id == "abc123")
            .times(1)
            .returning(|_, _| Ok(()));
        api.expect_list_urls().times(1).returning(|_, _, _| Ok(vec![]));

        let mut confirm = MockConfirmationPrompt::new();
        confirm.expect_confirm().times(1).return_const(true);

        let h = harness(api, confirm, MockClipboard::new());

        let deleted = h.service.delete("abc123").await.unwrap();

        assert!(deleted);
        assert!(h.service.urls().is_empty());
        assert!(!h.service.is_loading());
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_stale_cache() {
        let mut api = MockShortenerApi::new();
        api.expect_list_urls()
            .times(1)
            .returning(|_, _, _| Ok(vec![remote("abc123", "https://example.com", 0)]));
        api.expect_delete_url()
            .times(1)
            .returning(|_, _| Err(AppError::Mutation("Delete failed".to_string())));

        let mut confirm = MockConfirmationPrompt::new();
        confirm.expect_confirm().times(1).return_const(true);

        let h = harness(api, confirm, MockClipboard::new());
        h.service.fetch_all().await.unwrap();

        let result = h.service.delete("abc123").await;

        assert!(matches!(result, Err(AppError::Mutation(_))));
        // The confirmed-deleted item may still show until the next fetch
        assert_eq!(
            h.service.urls(),
            vec![local("abc123", "https://example.com", 0)]
        );
        assert_eq!(h.board.snapshot().error.as_deref(), Some("Delete failed"));
    }

    // ------------------------------------------------------------------
    // logout and copy
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn test_logout_clears_cache_and_notices() {
        let mut api = MockShortenerApi::new();
        api.expect_list_urls()
            .times(1)
            .returning(|_, _, _| Ok(vec![remote("abc123", "https://example.com", 5)]));

        let h = harness(api, MockConfirmationPrompt::new(), MockClipboard::new());
        h.service.fetch_all().await.unwrap();
        h.board.set_error("leftover");

        h.session.logout().unwrap();

        assert!(h.service.urls().is_empty());
        let notices = h.board.snapshot();
        assert!(notices.error.is_none());
        assert!(notices.success.is_none());
    }

    #[tokio::test]
    async fn test_copy_share_link_writes_clipboard_and_notifies() {
        let mut api = MockShortenerApi::new();
        api.expect_list_urls()
            .times(1)
            .returning(|_, _, _| Ok(vec![remote("abc123", "https://example.com", 0)]));

        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(|text| text == "http://localhost:8080/abc123")
            .times(1)
            .returning(|_| Ok(()));

        let h = harness(api, MockConfirmationPrompt::new(), clipboard);
        h.service.fetch_all().await.unwrap();

        let link = h.service.copy_share_link("abc123").unwrap();

        assert_eq!(link, "http://localhost:8080/abc123");
        assert_eq!(
            h.board.snapshot().success.as_deref(),
            Some("Copied to clipboard!")
        );
        let log = h.bus.get_event_log();
        assert!(log.iter().any(|e| e.event_type == "LinkCopied"));
    }
}
