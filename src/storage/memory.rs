use std::sync::Mutex;

use super::{decode_collection, encode_collection, DocumentStorage, StorageError};
use crate::docs::types::Document;

/// In-process backend with the same contract as the durable one, used
/// by the test suite and for sessions that should not persist
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blob: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already serialized collection value
    pub fn from_serialized(raw: impl Into<String>) -> Self {
        MemoryStorage {
            blob: Mutex::new(Some(raw.into())),
        }
    }
}

impl DocumentStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Document>, StorageError> {
        let blob = self.blob.lock().map_err(|_| StorageError::Lock)?;
        match blob.as_deref() {
            Some(raw) => Ok(decode_collection(raw)),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, documents: &[Document]) -> Result<(), StorageError> {
        let raw = encode_collection(documents)?;
        let mut blob = self.blob.lock().map_err(|_| StorageError::Lock)?;
        *blob = Some(raw);
        Ok(())
    }
}
