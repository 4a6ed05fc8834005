// src/integrations/mod.rs
//
// External Integrations Module
//
// Everything that touches the outside world: the remote shortener API, the
// native confirmation dialog, and the system clipboard. Each sits behind a
// trait so services stay testable in isolation.

pub mod clipboard;
pub mod dialog;
pub mod shortener;

pub use clipboard::{Clipboard, SystemClipboard};
pub use dialog::{ConfirmationPrompt, DialogConfirm};
pub use shortener::client::{RemoteUrlRecord, ShortenerApi, ShortenerClient};
