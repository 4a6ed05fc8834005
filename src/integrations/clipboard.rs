// src/integrations/clipboard.rs
//
// System clipboard behind a trait for the share-link copy feature.

use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> AppResult<()>;
}

/// arboard-backed system clipboard
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> AppResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| AppError::Clipboard(e.to_string()))?;
        Ok(())
    }
}
