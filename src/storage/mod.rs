//! Whole-collection persistence.
//!
//! The document collection is stored as one serialized JSON value under
//! the fixed `documents` key and fully overwritten on every save; there
//! are no partial writes. Malformed stored data falls back to the empty
//! collection instead of surfacing an error.

pub mod memory;
pub mod sqlite;

use thiserror::Error;

use crate::docs::types::Document;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Key the serialized collection is stored under
pub const STORAGE_KEY: &str = "documents";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("storage lock poisoned")]
    Lock,
}

/// Durable backend for the document collection.
///
/// `load` yields the empty collection when nothing has been stored yet.
/// `save` replaces the stored value with a snapshot of the whole
/// collection, so a following `load` returns exactly what was saved.
pub trait DocumentStorage {
    fn load(&self) -> Result<Vec<Document>, StorageError>;
    fn save(&self, documents: &[Document]) -> Result<(), StorageError>;
}

/// Decode a stored blob, falling back to the empty collection when the
/// stored data is malformed
pub(crate) fn decode_collection(raw: &str) -> Vec<Document> {
    match serde_json::from_str(raw) {
        Ok(documents) => documents,
        Err(e) => {
            eprintln!("Ignoring malformed document store: {}", e);
            Vec::new()
        }
    }
}

pub(crate) fn encode_collection(documents: &[Document]) -> Result<String, StorageError> {
    serde_json::to_string(documents).map_err(|e| StorageError::Write(e.to_string()))
}
