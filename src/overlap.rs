//! Overlap recording between adjacent chunks.
//!
//! When chunks overlap, adjacent pairs share a literal span of text. That
//! span is recorded on both chunks as an explicit range in each chunk's own
//! local coordinates, so the original document can be reconstructed
//! losslessly by dropping the backward range of every later chunk:
//!
//! ```text
//! Original:  "some words. There is a second sentence."
//! Chunk 0:   "some words. There is a "          start 0
//! Chunk 1:         "There is a second sentence." start 12
//!
//! shared span (absolute): [12, 23)
//! Chunk 0 record: { with: next,     range: (12, 23) }   <- local to chunk 0
//! Chunk 1 record: { with: previous, range: (0, 11) }    <- local to chunk 1
//! ```
//!
//! Small-tail merging can remove a chunk and break adjacency in offsets. In
//! that case no record is written for the pair; the engine never re-derives
//! an overlap against the new neighbor.

use serde::{Serialize, Serializer};

use crate::window::Chunk;

/// Which neighbor an overlap range is shared with.
///
/// Serializes as `0` (previous) or `1` (next) under the
/// `with_chunk_index` key of `_split_overlap` metadata entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapNeighbor {
    /// The span is shared with the preceding chunk.
    Previous,
    /// The span is shared with the following chunk.
    Next,
}

impl Serialize for OverlapNeighbor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(match self {
            Self::Previous => 0,
            Self::Next => 1,
        })
    }
}

/// A shared span between two adjacent chunks, in the owning chunk's local
/// byte coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverlapRange {
    /// The neighbor this span is shared with.
    #[serde(rename = "with_chunk_index")]
    pub neighbor: OverlapNeighbor,
    /// Half-open `(start, end)` byte range within the owning chunk's text.
    pub range: (usize, usize),
}

/// Record overlap ranges on every adjacent chunk pair that actually shares
/// text.
///
/// Pairs whose offsets no longer touch (after tail merging) are skipped
/// silently.
pub(crate) fn record_overlaps(chunks: &mut [Chunk]) {
    for i in 1..chunks.len() {
        let prev_start = chunks[i - 1].start;
        let prev_end = prev_start + chunks[i - 1].len();
        let curr_start = chunks[i].start;
        if curr_start >= prev_end {
            continue;
        }

        let shared = prev_end - curr_start;
        let prev_len = chunks[i - 1].len();
        let curr_len = chunks[i].len();

        chunks[i - 1].overlaps.push(OverlapRange {
            neighbor: OverlapNeighbor::Next,
            range: (curr_start - prev_start, prev_len),
        });
        chunks[i].overlaps.push(OverlapRange {
            neighbor: OverlapNeighbor::Previous,
            // Clipped to the chunk's own text; a merged tail can be shorter
            // than the shared span.
            range: (0, shared.min(curr_len)),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::Fragment;
    use crate::window::assemble;

    fn word_fragments(words: &[&str]) -> Vec<Fragment> {
        let mut start = 0;
        words
            .iter()
            .map(|w| {
                let f = Fragment::new(*w, start);
                start += w.len();
                f
            })
            .collect()
    }

    #[test]
    fn records_on_both_sides_in_local_coordinates() {
        let fragments = word_fragments(&["aa ", "bb ", "cc ", "dd ", "ee"]);
        let mut chunks = assemble(&fragments, 3, 1);
        record_overlaps(&mut chunks);

        // Chunk 0 "aa bb cc " [0, 9); chunk 1 "cc dd ee" [6, 14).
        assert_eq!(chunks[0].overlaps.len(), 1);
        assert_eq!(chunks[0].overlaps[0].neighbor, OverlapNeighbor::Next);
        assert_eq!(chunks[0].overlaps[0].range, (6, 9));
        assert_eq!(chunks[1].overlaps.len(), 1);
        assert_eq!(chunks[1].overlaps[0].neighbor, OverlapNeighbor::Previous);
        assert_eq!(chunks[1].overlaps[0].range, (0, 3));

        // The two records name the same text.
        let text0 = chunks[0].text();
        let text1 = chunks[1].text();
        assert_eq!(&text0[6..9], &text1[0..3]);
    }

    #[test]
    fn middle_chunk_gets_records_for_both_neighbors() {
        let fragments = word_fragments(&["a ", "b ", "c ", "d ", "e ", "f ", "g"]);
        let mut chunks = assemble(&fragments, 3, 1);
        assert_eq!(chunks.len(), 3);
        record_overlaps(&mut chunks);

        assert_eq!(chunks[1].overlaps.len(), 2);
        assert_eq!(chunks[1].overlaps[0].neighbor, OverlapNeighbor::Previous);
        assert_eq!(chunks[1].overlaps[1].neighbor, OverlapNeighbor::Next);
    }

    #[test]
    fn disjoint_chunks_get_no_records() {
        let fragments = word_fragments(&["a ", "b ", "c ", "d "]);
        let mut chunks = assemble(&fragments, 2, 0);
        record_overlaps(&mut chunks);

        assert!(chunks.iter().all(|c| c.overlaps.is_empty()));
    }

    #[test]
    fn serializes_with_chunk_index_and_range() {
        let record = OverlapRange {
            neighbor: OverlapNeighbor::Previous,
            range: (0, 5),
        };
        let value = serde_json::to_value(record).unwrap();
        assert_eq!(value, serde_json::json!({ "with_chunk_index": 0, "range": [0, 5] }));
    }
}
