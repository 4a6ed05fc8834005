// src/repositories/session_repository.rs
//
// Credential persistence - the one key that survives restarts

use std::sync::Arc;

use rusqlite::{params, OptionalExtension};

use crate::db::{get_connection, ConnectionPool};
use crate::error::AppResult;

/// Storage for the single persisted bearer credential.
///
/// The credential outlives the process and is removed only by `clear`
/// (explicit logout). Loading never validates the token against the backend.
pub trait SessionRepository: Send + Sync {
    fn load(&self) -> AppResult<Option<String>>;
    fn save(&self, token: &str) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

pub struct SqliteSessionRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSessionRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl SessionRepository for SqliteSessionRepository {
    fn load(&self) -> AppResult<Option<String>> {
        let conn = get_connection(&self.pool)?;
        let token = conn
            .query_row(
                "SELECT token FROM session_credential WHERE id = 1",
                [],
                |row| row.get(0),
            )
            .optional()?;
        Ok(token)
    }

    fn save(&self, token: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;
        conn.execute(
            "INSERT INTO session_credential (id, token) VALUES (1, ?1)
             ON CONFLICT(id) DO UPDATE SET token = excluded.token",
            params![token],
        )?;
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;
        conn.execute("DELETE FROM session_credential WHERE id = 1", [])?;
        Ok(())
    }
}
