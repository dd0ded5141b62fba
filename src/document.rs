//! The Document type: a piece of content with identity and metadata.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A unit of content flowing through the splitter.
///
/// Documents are both the input and the output of splitting: one source
/// document yields zero or more derived documents, each carrying a copy of
/// the source metadata plus provenance keys (`source_id`, `split_id`,
/// `split_idx_start`, `page_number`, `_split_overlap`).
///
/// `meta` is insertion-ordered, so keys come back out in the order they were
/// written, which keeps serialized output stable across runs.
///
/// ```rust
/// use docsplit::Document;
///
/// let doc = Document::new("Hello, world!").with_meta_entry("lang", "en");
/// assert_eq!(doc.content.as_deref(), Some("Hello, world!"));
/// assert_eq!(doc.meta["lang"], "en");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique id. Freshly generated when not supplied.
    #[serde(default = "fresh_id")]
    pub id: String,
    /// The text content. `None` marks non-text content, which the splitter
    /// rejects.
    #[serde(default)]
    pub content: Option<String>,
    /// Ordered key/value metadata.
    #[serde(default)]
    pub meta: IndexMap<String, Value>,
}

fn fresh_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Document {
    /// Create a text document with a fresh id and empty metadata.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: fresh_id(),
            content: Some(content.into()),
            meta: IndexMap::new(),
        }
    }

    /// Create a document with no content at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: fresh_id(),
            content: None,
            meta: IndexMap::new(),
        }
    }

    /// Replace the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Replace the whole metadata map.
    #[must_use]
    pub fn with_meta(mut self, meta: IndexMap<String, Value>) -> Self {
        self.meta = meta;
        self
    }

    /// Add a single metadata entry.
    #[must_use]
    pub fn with_meta_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }
}
