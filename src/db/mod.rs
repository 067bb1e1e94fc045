use crate::error::StorageError;
use rusqlite::Connection;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

pub mod kv;
pub mod memory;

pub use kv::SqliteStore;
pub use memory::MemoryStore;

const DB_FILE: &str = "vocab.db";

/// Minimal string key-value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Whether values outlive the process.
    fn is_persistent(&self) -> bool {
        true
    }
}

pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn store_json<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

pub fn get_data_dir() -> PathBuf {
    let home_var = if cfg!(target_os = "windows") {
        "USERPROFILE"
    } else {
        "HOME"
    };
    let home = std::env::var(home_var).unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("vocab-trainer")
}

pub fn db_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DB_FILE)
}

/// Open (creating if needed) the SQLite store under `data_dir`.
pub fn init_db(data_dir: &Path) -> Result<SqliteStore, StorageError> {
    std::fs::create_dir_all(data_dir)?;
    let conn = Connection::open(db_path(data_dir))?;
    SqliteStore::new(conn)
}

pub(crate) fn run_migrations(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL
        )",
        [],
    )?;

    Ok(())
}
