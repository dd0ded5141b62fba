//! Page attribution from form feed positions.
//!
//! The original content is scanned once for form feed (`\f`) characters,
//! producing a monotonically increasing list of break positions. A chunk
//! lives on the page containing its start offset:
//!
//! ```text
//! "page one\f page two\f page three"
//!           ^          ^
//!        break 8    break 18
//!
//! start 0  -> page 1
//! start 8  -> page 1   (the break char itself still ends page 1)
//! start 9  -> page 2
//! start 19 -> page 3
//! ```
//!
//! Numbering restarts at 1 for every source document; it never carries
//! across documents in a batch.

use crate::window::Chunk;

/// Byte positions of every form feed in `text`, in increasing order.
pub(crate) fn page_breaks(text: &str) -> Vec<usize> {
    text.char_indices()
        .filter(|(_, ch)| *ch == '\u{c}')
        .map(|(i, _)| i)
        .collect()
}

/// 1-based page number of the byte offset `start`.
///
/// A chunk starting exactly on a break character still belongs to the page
/// the break terminates.
pub(crate) fn page_number(breaks: &[usize], start: usize) -> usize {
    1 + breaks.partition_point(|&pos| pos < start)
}

/// Assign a page number to every chunk from its start offset.
pub(crate) fn attribute_pages(chunks: &mut [Chunk], breaks: &[usize]) {
    for chunk in chunks {
        chunk.page = page_number(breaks, chunk.start);
    }
}
