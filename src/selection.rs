use std::collections::HashSet;

use crate::docs::types::DocumentId;

/// Multi-select state for batch operations over the document collection.
///
/// The store reconciles the set after every deletion, so a selected id
/// never outlives its document.
#[derive(Debug, Default)]
pub struct Selection {
    selected: HashSet<DocumentId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id to the selection, or remove it if already selected
    pub fn toggle(&mut self, id: DocumentId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn is_selected(&self, id: DocumentId) -> bool {
        self.selected.contains(&id)
    }

    /// True when the whole non-empty collection is selected
    pub fn is_all_selected(&self, total: usize) -> bool {
        total > 0 && self.selected.len() == total
    }

    /// Select every listed id, or clear when everything is already selected
    pub fn toggle_all(&mut self, all_ids: &[DocumentId]) {
        if self.is_all_selected(all_ids.len()) {
            self.selected.clear();
        } else {
            self.selected = all_ids.iter().copied().collect();
        }
    }

    /// Drop ids that no longer exist in the collection
    pub fn retain(&mut self, known: &HashSet<DocumentId>) {
        self.selected.retain(|id| known.contains(id));
    }

    pub fn ids(&self) -> HashSet<DocumentId> {
        self.selected.clone()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
