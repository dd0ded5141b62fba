//! The document splitter: configuration, run loop, and materialization.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, trace};

use crate::config::{SplitConfig, SplitUnit};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::fragment::{self, Fragment};
use crate::overlap::record_overlaps;
use crate::pages::{attribute_pages, page_breaks};
use crate::registry::{resolve_splitting_function, SplittingFn};
use crate::sentence::{SentenceDetector, UnicodeSentenceDetector};
use crate::window::{assemble, merge_small_tail, Chunk};

/// The result of a splitter run: derived documents in input order, chunks in
/// `split_id` order within each source document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitterOutput {
    /// The derived documents.
    pub documents: Vec<Document>,
}

/// Splits documents into chunks of words, sentences, passages, pages, lines,
/// or custom pieces, tracking offsets, page numbers, and overlap spans.
///
/// The splitter is stateless per call: each [`run`](Self::run) processes one
/// in-memory batch sequentially and returns a completed output. Nothing is
/// cached across calls, so identical inputs always produce identical chunk
/// boundaries (ids aside, which are fresh per output document).
///
/// ```rust
/// use docsplit::{Document, DocumentSplitter, SplitConfig, SplitUnit};
///
/// let splitter = DocumentSplitter::new(SplitConfig {
///     split_by: SplitUnit::Word,
///     split_length: 10,
///     ..SplitConfig::default()
/// })?;
///
/// let text = "This is a text with some words. There is a second sentence. \
///             And there is a third sentence.";
/// let output = splitter.run(&[Document::new(text)])?;
/// assert_eq!(output.documents.len(), 2);
/// assert_eq!(
///     output.documents[0].content.as_deref(),
///     Some("This is a text with some words. There is a ")
/// );
/// # Ok::<(), docsplit::Error>(())
/// ```
#[derive(Clone)]
pub struct DocumentSplitter {
    config: SplitConfig,
    splitting_function: Option<SplittingFn>,
    detector: Arc<dyn SentenceDetector>,
}

impl std::fmt::Debug for DocumentSplitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentSplitter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DocumentSplitter {
    /// Build a splitter from a validated configuration.
    ///
    /// # Errors
    ///
    /// All configuration problems surface here, never mid-run: zero
    /// `split_length`, overlap not smaller than the length, or a function
    /// name that is missing or not registered.
    pub fn new(config: SplitConfig) -> Result<Self> {
        config.validate()?;
        let splitting_function = match (&config.split_by, &config.splitting_function) {
            (SplitUnit::Function, Some(name)) => Some(
                resolve_splitting_function(name)
                    .ok_or_else(|| Error::UnknownSplittingFunction(name.clone()))?,
            ),
            _ => None,
        };
        Ok(Self {
            config,
            splitting_function,
            detector: Arc::new(UnicodeSentenceDetector),
        })
    }

    /// Replace the sentence boundary detector used in sentence mode.
    #[must_use]
    pub fn with_sentence_detector(mut self, detector: Arc<dyn SentenceDetector>) -> Self {
        self.detector = detector;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Serialize the configuration to a generic key/value map.
    pub fn to_value(&self) -> Result<Value> {
        self.config.to_value()
    }

    /// Rebuild a splitter from a serialized configuration.
    ///
    /// A `splitting_function` entry is resolved against the registry, so the
    /// same names must be registered as when the value was produced.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error on malformed values, unknown split
    /// units, or unresolvable function names.
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::new(SplitConfig::from_value(value)?)
    }

    /// Split a batch of documents.
    ///
    /// The whole batch is validated first; either every document is
    /// processed or the call fails before producing output.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnsupportedContent`] when any document in the
    /// batch has no text content.
    pub fn run(&self, documents: &[Document]) -> Result<SplitterOutput> {
        for doc in documents {
            if doc.content.is_none() {
                return Err(Error::UnsupportedContent { id: doc.id.clone() });
            }
        }

        let mut out = Vec::new();
        for doc in documents {
            let derived = self.split_document(doc);
            trace!(source = %doc.id, chunks = derived.len(), "split document");
            out.extend(derived);
        }
        debug!(
            documents = documents.len(),
            produced = out.len(),
            split_by = %self.config.split_by,
            "split batch"
        );
        Ok(SplitterOutput { documents: out })
    }

    /// Split a batch given as a generic JSON value.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidInput`] when the value is not a sequence
    /// of documents, and with the same errors as [`run`](Self::run)
    /// otherwise.
    pub fn run_value(&self, documents: &Value) -> Result<SplitterOutput> {
        if !documents.is_array() {
            return Err(Error::InvalidInput(format!(
                "got a JSON {}",
                json_kind(documents)
            )));
        }
        let documents: Vec<Document> = serde_json::from_value(documents.clone())
            .map_err(|e| Error::InvalidInput(e.to_string()))?;
        self.run(&documents)
    }

    fn split_document(&self, doc: &Document) -> Vec<Document> {
        let content = doc.content.as_deref().unwrap_or_default();
        if content.is_empty() {
            return Vec::new();
        }

        let fragments = self.split_into_fragments(content);
        let mut chunks = assemble(
            &fragments,
            self.config.split_length,
            self.config.split_overlap,
        );
        merge_small_tail(&mut chunks, self.config.split_threshold);

        if self.config.split_by != SplitUnit::Function {
            let breaks = page_breaks(content);
            attribute_pages(&mut chunks, &breaks);
            if self.config.split_overlap > 0 {
                record_overlaps(&mut chunks);
            }
        }

        chunks
            .into_iter()
            .map(|chunk| self.materialize(doc, chunk))
            .collect()
    }

    fn split_into_fragments(&self, content: &str) -> Vec<Fragment> {
        match self.config.split_by {
            SplitUnit::Word => fragment::split_words(content),
            SplitUnit::Sentence => fragment::split_sentences(content, self.detector.as_ref()),
            SplitUnit::Passage => fragment::split_passages(content),
            SplitUnit::Page => fragment::split_pages(content),
            SplitUnit::Line => fragment::split_lines(content),
            SplitUnit::Function => {
                // Presence is guaranteed by construction-time validation.
                let Some(function) = self.splitting_function else {
                    return Vec::new();
                };
                function(content)
                    .into_iter()
                    .map(|piece| Fragment::new(piece, 0))
                    .collect()
            }
        }
    }

    /// Turn one chunk into an output document: fresh id, copied source
    /// metadata, provenance keys on top.
    fn materialize(&self, source: &Document, chunk: Chunk) -> Document {
        let mut meta = source.meta.clone();
        meta.insert("source_id".into(), json!(source.id));
        if self.config.split_by != SplitUnit::Function {
            meta.insert("split_id".into(), json!(chunk.index));
            meta.insert("split_idx_start".into(), json!(chunk.start));
            meta.insert("page_number".into(), json!(chunk.page));
            if self.config.split_overlap > 0 {
                meta.insert("_split_overlap".into(), json!(chunk.overlaps));
            }
        }
        Document::new(chunk.text()).with_meta(meta)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splitter(config: SplitConfig) -> DocumentSplitter {
        DocumentSplitter::new(config).unwrap()
    }

    #[test]
    fn empty_batch_yields_empty_output() {
        let out = splitter(SplitConfig::default()).run(&[]).unwrap();
        assert!(out.documents.is_empty());
    }

    #[test]
    fn rejects_document_without_content() {
        let err = splitter(SplitConfig::default())
            .run(&[Document::empty().with_id("bad")])
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedContent { id } if id == "bad"));
    }

    #[test]
    fn rejects_whole_batch_before_producing_output() {
        let err = splitter(SplitConfig::default())
            .run(&[Document::new("fine"), Document::empty()])
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedContent { .. }));
    }

    #[test]
    fn run_value_rejects_non_sequences() {
        let s = splitter(SplitConfig::default());
        for input in [json!({"content": "x"}), json!("text"), json!(1), json!(null)] {
            assert!(matches!(
                s.run_value(&input),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn run_value_accepts_a_document_array() {
        let s = splitter(SplitConfig::default());
        let out = s
            .run_value(&json!([{ "id": "1", "content": "Some text." }]))
            .unwrap();
        assert_eq!(out.documents.len(), 1);
        assert_eq!(out.documents[0].meta["source_id"], "1");
    }

    #[test]
    fn unknown_function_name_fails_at_construction() {
        let err = DocumentSplitter::new(SplitConfig {
            split_by: SplitUnit::Function,
            splitting_function: Some("nowhere::registered".into()),
            ..SplitConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, Error::UnknownSplittingFunction(_)));
    }

    #[test]
    fn output_serializes_as_documents_key() {
        let out = splitter(SplitConfig::default())
            .run(&[Document::new("hi")])
            .unwrap();
        let value = serde_json::to_value(&out).unwrap();
        assert!(value["documents"].is_array());
    }
}
