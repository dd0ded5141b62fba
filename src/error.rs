//! Error types for docsplit.

/// Errors that can occur while configuring or running a splitter.
///
/// Configuration problems (`InvalidSplitLength`, `OverlapExceedsLength`,
/// `MalformedConfig`, `MissingSplittingFunction`, `UnknownSplittingFunction`)
/// are raised eagerly when the splitter is built, never mid-run. Input
/// problems (`InvalidInput`, `UnsupportedContent`) are raised before any
/// document in the batch is split, so a failing call produces no output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `split_length` must be greater than zero.
    #[error("split_length must be > 0")]
    InvalidSplitLength,

    /// Overlap must leave the window some forward progress.
    #[error("split_overlap {overlap} must be less than split_length {length}")]
    OverlapExceedsLength {
        /// The configured window length, in fragments.
        length: usize,
        /// The overlap that was too large.
        overlap: usize,
    },

    /// Configuration could not be deserialized (unknown split unit,
    /// negative counts, wrong value types).
    #[error("malformed splitter configuration: {0}")]
    MalformedConfig(String),

    /// `split_by` is `function` but no splitting function name was given.
    #[error("split_by is 'function' but no splitting_function was configured")]
    MissingSplittingFunction,

    /// The named splitting function is not in the registry.
    #[error("no splitting function registered under {0:?}")]
    UnknownSplittingFunction(String),

    /// The dynamic input was not a sequence of documents.
    #[error("expected a sequence of documents: {0}")]
    InvalidInput(String),

    /// A document in the batch has no text content.
    #[error("document {id} has no text content")]
    UnsupportedContent {
        /// Id of the offending document.
        id: String,
    },
}

/// Result type for docsplit operations.
pub type Result<T> = std::result::Result<T, Error>;
