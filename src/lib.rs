//! # docsplit
//!
//! Deterministic document splitting for retrieval-augmented generation (RAG)
//! pipelines.
//!
//! ## The Problem
//!
//! Language models have context windows. Documents don't fit. You need to
//! split them into pieces small enough to embed and retrieve. But a retrieval
//! pipeline needs more than the pieces themselves. It needs to know where
//! every piece came from:
//!
//! - Which document produced this chunk, and which chunk is it?
//! - At exactly which character offset does the chunk sit in the source?
//! - On which page of the source does the chunk start?
//! - When chunks overlap for context continuity, which spans are repeated?
//!
//! Without that provenance you cannot cite a source, highlight a match, or
//! stitch retrieved chunks back into the original text. docsplit does the
//! splitting and the bookkeeping together, and guarantees the bookkeeping is
//! exact: for every unit except custom functions, concatenating the pieces
//! reproduces the input byte for byte.
//!
//! ## Split Units
//!
//! The unit decides what one "fragment" is. Chunks are windows of
//! `split_length` fragments advanced by `split_length - split_overlap`:
//!
//! | Unit | Fragment boundary | Delimiter kept |
//! |------|-------------------|----------------|
//! | `word` | Unicode whitespace runs | with the preceding word |
//! | `sentence` | UAX #29 (pluggable detector) | inside the sentence |
//! | `passage` | two or more newlines | with the preceding passage |
//! | `page` | form feed (`\f`) | with the preceding page |
//! | `line` | newline | with the preceding line |
//! | `function` | whatever a registered function returns | n/a |
//!
//! A trailing chunk with fewer than `split_threshold` fragments is folded
//! into its predecessor, so tiny tail chunks never reach the index.
//!
//! ## Quick Start
//!
//! ```rust
//! use docsplit::{Document, DocumentSplitter, SplitConfig, SplitUnit};
//!
//! let splitter = DocumentSplitter::new(SplitConfig {
//!     split_by: SplitUnit::Word,
//!     split_length: 10,
//!     split_overlap: 2,
//!     ..SplitConfig::default()
//! })?;
//!
//! let doc = Document::new(
//!     "This is a text with some words. There is a second sentence. \
//!      And there is a third sentence.",
//! );
//! let output = splitter.run(&[doc])?;
//!
//! for doc in &output.documents {
//!     // Each derived document carries provenance metadata.
//!     let start = doc.meta["split_idx_start"].as_u64().unwrap();
//!     let page = doc.meta["page_number"].as_u64().unwrap();
//!     println!("chunk {} at byte {start}, page {page}", doc.meta["split_id"]);
//! }
//! # Ok::<(), docsplit::Error>(())
//! ```
//!
//! ## Provenance Metadata
//!
//! Every derived document copies its source's metadata and adds:
//!
//! - `source_id`: id of the source document
//! - `split_id`: 0-based chunk index within the source
//! - `split_idx_start`: byte offset of the chunk in the source content
//! - `page_number`: 1-based page of the chunk's start offset
//! - `_split_overlap`: when overlap is configured, the spans shared with
//!   the neighboring chunks, as ranges into this chunk's own text
//!
//! In `function` mode only `source_id` is attached: a custom function may
//! drop or rewrite text, so offsets would be fiction.
//!
//! ## Custom Splitting Functions
//!
//! Custom logic is registered by name, which keeps serialized configurations
//! portable: a config carries the name, not the code.
//!
//! ```rust
//! use docsplit::{register_splitting_function, Document, DocumentSplitter, SplitConfig, SplitUnit};
//!
//! fn split_dots(text: &str) -> Vec<String> {
//!     text.split('.').map(str::to_string).collect()
//! }
//! register_splitting_function("my_app::split_dots", split_dots);
//!
//! let splitter = DocumentSplitter::new(SplitConfig {
//!     split_by: SplitUnit::Function,
//!     split_length: 1,
//!     splitting_function: Some("my_app::split_dots".into()),
//!     ..SplitConfig::default()
//! })?;
//! let output = splitter.run(&[Document::new("This.Is.A.Test")])?;
//! assert_eq!(output.documents.len(), 4);
//! # Ok::<(), docsplit::Error>(())
//! ```
//!
//! ## Guarantees
//!
//! - **Lossless**: fragment concatenation reconstructs the input exactly
//!   (all units except `function`).
//! - **Exact offsets**: `split_idx_start` always points at the literal
//!   occurrence of the chunk in the source.
//! - **Overlap round-trip**: dropping each chunk's backward overlap range
//!   and concatenating reconstructs the source.
//! - **Deterministic**: no global state, no caching; same input, same
//!   output ordering, every time.
//! - **Fail-fast**: configuration errors at construction, input errors
//!   before any document is split. No partial output.

mod config;
mod document;
mod error;
mod fragment;
mod overlap;
mod pages;
mod registry;
mod sentence;
mod splitter;
mod window;

pub use config::{SplitConfig, SplitUnit};
pub use document::Document;
pub use error::{Error, Result};
pub use fragment::Fragment;
pub use overlap::{OverlapNeighbor, OverlapRange};
pub use registry::{register_splitting_function, SplittingFn};
pub use sentence::{SentenceDetector, UnicodeSentenceDetector};
pub use splitter::{DocumentSplitter, SplitterOutput};
pub use window::Chunk;
