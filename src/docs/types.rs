use serde::{Deserialize, Serialize};

/// Content of a freshly created document (the empty paragraph the
/// rich-text surface renders for a blank editor)
pub const INITIAL_CONTENT: &str = "<p></p>";

/// Display format for creation and version timestamps, e.g. "Aug 04 2026 3:15 PM"
pub const DATE_FORMAT: &str = "%b %d %Y %-I:%M %p";

/// Document identifier, derived from the creation clock in milliseconds
pub type DocumentId = i64;

/// A content snapshot in a document's version history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentVersion {
    pub date: String,
    pub content: String,
}

/// A named document with its append-only version history.
///
/// `content` mirrors the latest version after create and save; revert
/// rewrites `content` from an older version without touching history.
/// Field names match the persisted layout and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    pub date: String,
    pub content: String,
    pub versions: Vec<DocumentVersion>,
}

impl Document {
    /// Create a document with one initial version holding the default content
    pub fn new(id: DocumentId, name: String) -> Self {
        let date = display_date();
        Document {
            id,
            name,
            date: date.clone(),
            content: INITIAL_CONTENT.to_string(),
            versions: vec![DocumentVersion {
                date,
                content: INITIAL_CONTENT.to_string(),
            }],
        }
    }

    /// Append a version snapshot stamped now and make it the live content
    pub fn record_version(&mut self, content: &str) {
        self.versions.push(DocumentVersion {
            date: display_date(),
            content: content.to_string(),
        });
        self.content = content.to_string();
    }

    /// Content of the most recent version
    pub fn latest_version_content(&self) -> &str {
        self.versions
            .last()
            .map(|v| v.content.as_str())
            .unwrap_or(INITIAL_CONTENT)
    }
}

/// Current wall-clock time in the display format
pub fn display_date() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}
