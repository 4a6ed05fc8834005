pub mod client;

pub use client::{RemoteUrlRecord, ShortenerApi, ShortenerClient};
