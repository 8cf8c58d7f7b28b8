//! The seam between the black-box editing surface and the store.
//!
//! The surface produces and consumes opaque content strings; only
//! `render` crosses into it, and only a save request comes back out.

use crate::docs::store::{DocumentStore, StoreError};
use crate::docs::types::{Document, DocumentId};

/// The editing surface. `render` replaces whatever the surface is
/// showing with the given content.
pub trait EditorSurface {
    fn render(&mut self, initial_content: &str);
}

/// Wires UI commands between the editing surface and the store.
///
/// Content strings pass through verbatim in both directions; the bridge
/// never inspects or validates them.
pub struct EditorBridge<S: EditorSurface> {
    store: DocumentStore,
    surface: S,
}

impl<S: EditorSurface> EditorBridge<S> {
    pub fn new(store: DocumentStore, surface: S) -> Self {
        EditorBridge { store, surface }
    }

    /// New-document command: create, open and hand the fresh content to
    /// the surface
    pub fn create(&mut self) -> Document {
        let doc = self.store.create_document();
        self.surface.render(&doc.content);
        doc
    }

    /// Open a document and render its current content
    pub fn open(&mut self, id: DocumentId) -> Result<(), StoreError> {
        let doc = self.store.open_document(id)?;
        self.surface.render(&doc.content);
        Ok(())
    }

    /// Save requested by the surface; the content string is stored as is
    pub fn on_save_requested(&mut self, content: &str) -> Result<(), StoreError> {
        self.store.save_current(content)
    }

    /// Revert the open document to a past version's content and re-render
    pub fn revert(&mut self, content: &str) -> Result<(), StoreError> {
        self.store.revert_current(content)?;
        if self.store.current().is_some() {
            self.surface.render(content);
        }
        Ok(())
    }

    /// Go-back command: leave the editor without touching the collection
    pub fn go_back(&mut self) {
        self.store.close_current();
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DocumentStore {
        &mut self.store
    }
}
