// src/infrastructure/notice_board.rs
//
// The single error-message and success-message slots of the UI.
//
// RULES:
// - One error slot, one success slot; each new message replaces the last
// - Error and success are mutually displayable, never mutually exclusive
// - The error slot is cleared at the start of every operation
// - Updated exclusively through event handlers (see events::handlers)

use std::sync::RwLock;

/// Snapshot of both message slots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    pub error: Option<String>,
    pub success: Option<String>,
}

pub struct NoticeBoard {
    inner: RwLock<Notices>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Notices::default()),
        }
    }

    pub fn set_error(&self, message: impl Into<String>) {
        self.inner.write().unwrap().error = Some(message.into());
    }

    pub fn clear_error(&self) {
        self.inner.write().unwrap().error = None;
    }

    pub fn set_success(&self, message: impl Into<String>) {
        self.inner.write().unwrap().success = Some(message.into());
    }

    pub fn clear_all(&self) {
        *self.inner.write().unwrap() = Notices::default();
    }

    pub fn snapshot(&self) -> Notices {
        self.inner.read().unwrap().clone()
    }
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}
