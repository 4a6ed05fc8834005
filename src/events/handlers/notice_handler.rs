// src/events/handlers/notice_handler.rs
//
// Routes operation and lifecycle events into the notice board.
//
// This is the only writer of the board: services emit facts, the handlers
// decide what the user reads. Message texts live here, next to the events
// that produce them.

use std::sync::Arc;

use crate::events::types::{
    LinkCopied, OperationFailed, OperationStarted, RegistrationCompleted, SessionClosed,
    ShortUrlCreated,
};
use crate::events::EventBus;
use crate::infrastructure::NoticeBoard;

pub const MSG_REGISTERED: &str = "Registration successful! Please login.";
pub const MSG_SHORTENED: &str = "URL shortened!";
pub const MSG_COPIED: &str = "Copied to clipboard!";

/// Subscribe the notice board to the events that drive it.
///
/// - every operation start clears the error slot (success stays)
/// - every operation failure replaces the error slot
/// - registration / shorten / copy successes set the success slot
/// - logout wipes both slots along with the rest of the transient UI state
pub fn register_notice_handlers(bus: &EventBus, board: Arc<NoticeBoard>) {
    {
        let board = Arc::clone(&board);
        bus.subscribe::<OperationStarted, _>(move |_| board.clear_error());
    }
    {
        let board = Arc::clone(&board);
        bus.subscribe::<OperationFailed, _>(move |event| board.set_error(&event.message));
    }
    {
        let board = Arc::clone(&board);
        bus.subscribe::<RegistrationCompleted, _>(move |_| board.set_success(MSG_REGISTERED));
    }
    {
        let board = Arc::clone(&board);
        bus.subscribe::<ShortUrlCreated, _>(move |_| board.set_success(MSG_SHORTENED));
    }
    {
        let board = Arc::clone(&board);
        bus.subscribe::<LinkCopied, _>(move |_| board.set_success(MSG_COPIED));
    }
    {
        let board = Arc::clone(&board);
        bus.subscribe::<SessionClosed, _>(move |_| board.clear_all());
    }
}
