use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::Connection;

use super::{decode_collection, encode_collection, DocumentStorage, StorageError, STORAGE_KEY};
use crate::docs::types::Document;

/// SQLite-backed storage holding the serialized collection in a single
/// key/value row
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Open (or create) the database at the given path
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|e| StorageError::Read(e.to_string()))?;
        Self::init(conn)
    }

    /// Open the database at the default per-user location
    pub fn open_default() -> Result<Self, StorageError> {
        let path = default_db_path();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| StorageError::Write(e.to_string()))?;
        }
        Self::open(&path)
    }

    /// Fully in-memory database, for sessions that should not touch disk
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::Read(e.to_string()))?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS document_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| StorageError::Write(e.to_string()))?;

        Ok(SqliteStorage {
            conn: Mutex::new(conn),
        })
    }
}

impl DocumentStorage for SqliteStorage {
    fn load(&self) -> Result<Vec<Document>, StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::Lock)?;

        let mut stmt = conn
            .prepare("SELECT value FROM document_store WHERE key = ?1")
            .map_err(|e| StorageError::Read(e.to_string()))?;
        let mut rows = stmt
            .query([STORAGE_KEY])
            .map_err(|e| StorageError::Read(e.to_string()))?;

        match rows.next().map_err(|e| StorageError::Read(e.to_string()))? {
            Some(row) => {
                let raw: String = row.get(0).map_err(|e| StorageError::Read(e.to_string()))?;
                Ok(decode_collection(&raw))
            }
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, documents: &[Document]) -> Result<(), StorageError> {
        let raw = encode_collection(documents)?;
        let conn = self.conn.lock().map_err(|_| StorageError::Lock)?;

        conn.execute(
            "INSERT OR REPLACE INTO document_store (key, value) VALUES (?1, ?2)",
            rusqlite::params![STORAGE_KEY, raw],
        )
        .map_err(|e| StorageError::Write(e.to_string()))?;

        Ok(())
    }
}

/// Default database location under the per-user data directory
fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("docbench")
        .join("documents.db")
}
