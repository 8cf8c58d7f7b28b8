//! Docbench document-management core.
//!
//! This crate provides:
//! - A document collection with per-document append-only version history
//! - Whole-collection persistence behind a pluggable storage backend
//! - Multi-select state for batch deletion
//! - The bridge between the rich-text editing surface and the store

pub mod docs;
pub mod editor;
pub mod selection;
pub mod storage;

// Re-export commonly used types
pub use docs::store::{DocumentStore, StoreError};
pub use docs::types::{Document, DocumentId, DocumentVersion};
pub use editor::{EditorBridge, EditorSurface};
pub use selection::Selection;
pub use storage::{DocumentStorage, MemoryStorage, SqliteStorage, StorageError};
