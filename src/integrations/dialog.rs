// src/integrations/dialog.rs
//
// Native confirmation dialog behind a trait, so the delete flow can be
// tested without a window server.

use tauri_plugin_dialog::{DialogExt, MessageDialogButtons};

/// Blocking yes/no prompt shown before destructive operations.
///
/// `confirm` suspends the calling command until the user answers; the
/// request it gates is only issued on `true`.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmationPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Tauri dialog-plugin implementation
pub struct DialogConfirm {
    app: tauri::AppHandle,
}

impl DialogConfirm {
    pub fn new(app: tauri::AppHandle) -> Self {
        Self { app }
    }
}

impl ConfirmationPrompt for DialogConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.app
            .dialog()
            .message(message)
            .title("LinkDock")
            .buttons(MessageDialogButtons::OkCancel)
            .blocking_show()
    }
}
