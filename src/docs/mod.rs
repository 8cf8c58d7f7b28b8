//! Documents: the collection model and the store that owns it.

pub mod store;
pub mod types;

pub use store::{DocumentStore, StoreError};
pub use types::{Document, DocumentId, DocumentVersion};
