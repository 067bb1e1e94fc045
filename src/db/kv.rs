use super::{KeyValueStore, run_migrations};
use crate::error::StorageError;
use rusqlite::{Connection, OptionalExtension};

#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Result<Self, StorageError> {
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> Result<Self, StorageError> {
        Self::new(Connection::open_in_memory()?)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv_store WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let updated_at = chrono::Utc::now().timestamp();
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![key, value, updated_at],
        )?;
        Ok(())
    }
}
