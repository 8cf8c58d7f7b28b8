use std::collections::HashSet;

use chrono::Utc;
use thiserror::Error;

use crate::docs::types::{Document, DocumentId};
use crate::selection::Selection;
use crate::storage::DocumentStorage;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document {0} not found")]
    NotFound(DocumentId),
}

/// Owns the document collection, the current-document view and the
/// selection state, and keeps the storage backend in sync.
///
/// The collection is hydrated once at construction and rewritten in
/// full after every mutation. The current document is an id resolved
/// against the collection on access, never a detached copy.
pub struct DocumentStore {
    storage: Box<dyn DocumentStorage>,
    documents: Vec<Document>,
    current: Option<DocumentId>,
    selection: Selection,
    last_id: DocumentId,
}

impl DocumentStore {
    /// Hydrate a store from the backend. A read failure is recovered by
    /// starting from the empty collection.
    pub fn load(storage: Box<dyn DocumentStorage>) -> Self {
        let documents = match storage.load() {
            Ok(documents) => documents,
            Err(e) => {
                eprintln!("Failed to load documents, starting empty: {}", e);
                Vec::new()
            }
        };
        let last_id = documents.iter().map(|d| d.id).max().unwrap_or(0);

        DocumentStore {
            storage,
            documents,
            current: None,
            selection: Selection::new(),
            last_id,
        }
    }

    // ==================== Collection ====================

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.documents.iter().any(|d| d.id == id)
    }

    /// Create a document named after the current collection size, make
    /// it current and persist. Returns a copy of the stored document.
    pub fn create_document(&mut self) -> Document {
        let id = self.allocate_id();
        let name = format!("Document {}", self.documents.len() + 1);
        let doc = Document::new(id, name);

        self.documents.push(doc.clone());
        self.current = Some(id);
        self.persist();
        doc
    }

    /// Open the document with the given id, making it current. The
    /// collection entry stays canonical; the returned copy is for
    /// display.
    pub fn open_document(&mut self, id: DocumentId) -> Result<Document, StoreError> {
        let doc = self
            .documents
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))?;
        self.current = Some(id);
        Ok(doc)
    }

    /// The currently open document, resolved against the collection
    pub fn current(&self) -> Option<&Document> {
        self.current
            .and_then(|id| self.documents.iter().find(|d| d.id == id))
    }

    /// Close the current view without touching the collection
    pub fn close_current(&mut self) {
        self.current = None;
    }

    /// Append a version snapshot with the given content to the current
    /// document and persist. A no-op when no document is open.
    pub fn save_current(&mut self, content: &str) -> Result<(), StoreError> {
        let Some(id) = self.current else {
            return Ok(());
        };
        let doc = self.lookup_mut(id)?;
        doc.record_version(content);
        self.persist();
        Ok(())
    }

    /// Rename the current document and persist. Any string is accepted,
    /// including empty. A no-op when no document is open.
    pub fn rename_current(&mut self, new_name: &str) -> Result<(), StoreError> {
        let Some(id) = self.current else {
            return Ok(());
        };
        let doc = self.lookup_mut(id)?;
        doc.name = new_name.to_string();
        self.persist();
        Ok(())
    }

    /// Set the current document's content to a past version's content
    /// without appending to history, and persist. A no-op when no
    /// document is open.
    pub fn revert_current(&mut self, content: &str) -> Result<(), StoreError> {
        let Some(id) = self.current else {
            return Ok(());
        };
        let doc = self.lookup_mut(id)?;
        doc.content = content.to_string();
        self.persist();
        Ok(())
    }

    /// Remove every document whose id is in the set, closing the
    /// current view if it was removed, then reconcile the selection
    /// and persist.
    pub fn delete_many(&mut self, ids: &HashSet<DocumentId>) {
        self.documents.retain(|d| !ids.contains(&d.id));

        if self.current.map_or(false, |id| ids.contains(&id)) {
            self.current = None;
        }

        let remaining: HashSet<DocumentId> = self.documents.iter().map(|d| d.id).collect();
        self.selection.retain(&remaining);
        self.persist();
    }

    /// Delete every selected document
    pub fn delete_selected(&mut self) {
        let ids = self.selection.ids();
        self.delete_many(&ids);
    }

    // ==================== Selection ====================

    pub fn toggle_selection(&mut self, id: DocumentId) {
        self.selection.toggle(id);
    }

    pub fn toggle_select_all(&mut self) {
        let all_ids: Vec<DocumentId> = self.documents.iter().map(|d| d.id).collect();
        self.selection.toggle_all(&all_ids);
    }

    pub fn is_selected(&self, id: DocumentId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(self.documents.len())
    }

    pub fn selected_ids(&self) -> HashSet<DocumentId> {
        self.selection.ids()
    }

    // ==================== Internals ====================

    fn lookup_mut(&mut self, id: DocumentId) -> Result<&mut Document, StoreError> {
        self.documents
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Ids come from the creation clock in milliseconds, bumped past
    /// the highest id seen so same-millisecond creations stay unique
    fn allocate_id(&mut self) -> DocumentId {
        let now = Utc::now().timestamp_millis();
        let id = if now > self.last_id { now } else { self.last_id + 1 };
        self.last_id = id;
        id
    }

    /// Write the whole collection through the backend. A write failure
    /// is logged and the in-memory state stays authoritative; the next
    /// mutation rewrites the full collection anyway.
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.documents) {
            eprintln!("Failed to persist documents: {}", e);
        }
    }
}
