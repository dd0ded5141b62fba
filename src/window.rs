//! Chunk assembly: sliding a fragment window, then folding a short tail.
//!
//! ## Windowing
//!
//! ```text
//! split_length = 3, split_overlap = 1  (step = 2)
//!
//! Fragments: [f0, f1, f2, f3, f4]
//!
//! Chunk 0: [f0, f1, f2]
//! Chunk 1:         [f2, f3, f4]   <- f2 repeated
//! ```
//!
//! The window advances by `split_length - split_overlap` fragments and stops
//! once a window has reached the final fragment, so a fully consumed input
//! never produces a chunk that is a strict suffix of its predecessor.
//!
//! ## Tail merging
//!
//! A trailing chunk with fewer than `split_threshold` fragments is folded
//! into its predecessor by plain concatenation. Offsets assigned during
//! windowing are left untouched; only the final chunk ever moves.

use crate::fragment::Fragment;
use crate::overlap::OverlapRange;

/// A window of consecutive fragments forming one output unit.
///
/// Created by [`assemble`], possibly folded by [`merge_small_tail`], then
/// consumed read-only by page attribution and document materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The fragments in this chunk, in source order.
    pub fragments: Vec<Fragment>,
    /// 0-based emission order (`split_id`).
    pub index: usize,
    /// Byte offset of the first fragment in the original content.
    pub start: usize,
    /// 1-based page number of `start`. Assigned by page attribution;
    /// stays 1 in function mode.
    pub page: usize,
    /// Overlap ranges shared with neighboring chunks, in chunk-local
    /// coordinates.
    pub overlaps: Vec<OverlapRange>,
}

impl Chunk {
    /// Concatenated text of all fragments.
    #[must_use]
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    /// Total text length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.iter().map(Fragment::len).sum()
    }

    /// Whether the chunk holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of fragments in this chunk.
    #[must_use]
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }
}

/// Group fragments into chunks of `length` fragments, repeating `overlap`
/// fragments between adjacent chunks.
///
/// The caller guarantees `length > 0` and `overlap < length`; both are
/// validated when the splitter is configured. Windows whose concatenated
/// text is empty (custom splitting functions may return empty pieces) are
/// skipped without consuming an index.
pub(crate) fn assemble(fragments: &[Fragment], length: usize, overlap: usize) -> Vec<Chunk> {
    debug_assert!(length > 0 && overlap < length);
    if fragments.is_empty() {
        return Vec::new();
    }

    let step = length - overlap;
    let mut chunks = Vec::with_capacity(fragments.len().div_ceil(step));
    let mut index = 0;
    let mut at = 0;

    loop {
        let end = (at + length).min(fragments.len());
        let window = &fragments[at..end];

        if window.iter().any(|f| !f.is_empty()) {
            chunks.push(Chunk {
                fragments: window.to_vec(),
                index,
                start: window[0].start,
                page: 1,
                overlaps: Vec::new(),
            });
            index += 1;
        }

        // Stop once a window has reached the last fragment.
        if at + length >= fragments.len() {
            break;
        }
        at += step;
    }

    chunks
}

/// Fold a trailing chunk shorter than `threshold` fragments into its
/// predecessor.
///
/// Applies at most once and only to the final chunk. The predecessor keeps
/// its start offset and index; the tail's fragments are appended as-is.
pub(crate) fn merge_small_tail(chunks: &mut Vec<Chunk>, threshold: usize) {
    if threshold == 0 || chunks.len() < 2 {
        return;
    }
    let Some(tail) = chunks.pop() else {
        return;
    };
    if tail.fragment_count() < threshold {
        if let Some(previous) = chunks.last_mut() {
            previous.fragments.extend(tail.fragments);
        }
    } else {
        chunks.push(tail);
    }
}
