use serde::{Deserialize, Serialize};

/// One shortened URL as owned by the backend.
///
/// The client only ever holds a read-only snapshot of these records, in the
/// order the backend returned them. Records are never constructed or patched
/// locally; the whole collection is replaced on every fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortUrl {
    /// Opaque identifier; doubles as the redirect path segment
    pub id: String,

    /// The original URL submitted for shortening
    pub long_url: String,

    /// The short URL as rendered by the backend
    pub short_url: String,

    /// Redirect visits counted backend-side; invisible to this client
    /// beyond display
    pub visit_count: u64,
}

impl ShortUrl {
    /// The shareable link for this record: `{origin}/{id}`.
    pub fn share_link(&self, origin: &str) -> String {
        format!("{}/{}", origin.trim_end_matches('/'), self.id)
    }
}
