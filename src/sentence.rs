//! Sentence boundary detection.
//!
//! Sentence detection seems simple until you encounter:
//!
//! ```text
//! "Dr. Smith went to Washington D.C. on Jan. 15th."
//!     ^                          ^       ^
//!     Not a sentence end (abbreviation)
//! ```
//!
//! The default detector uses Unicode Standard Annex #29 (UAX #29) sentence
//! segmentation, which handles abbreviations, decimal numbers, ellipses, and
//! URLs reasonably well without any language-specific rule tables.
//!
//! The detector is a trait rather than a fixed implementation so that callers
//! with stronger requirements (NLP toolkits, language-specific models) can
//! plug their own in via
//! [`DocumentSplitter::with_sentence_detector`](crate::DocumentSplitter::with_sentence_detector).
//! Whatever the implementation, it must not drop inter-sentence text: the
//! splitter relies on fragments concatenating back to the original document.

use unicode_segmentation::UnicodeSegmentation;

/// Detects sentence boundaries in text.
pub trait SentenceDetector: Send + Sync {
    /// Partition `text` into `(byte_offset, sentence)` pairs, in order.
    ///
    /// The pairs must cover the whole input with no gaps or overlaps:
    /// concatenating the sentences reproduces `text` exactly. Inter-sentence
    /// whitespace belongs to one of the neighboring sentences, never to
    /// neither.
    fn sentences<'a>(&self, text: &'a str) -> Vec<(usize, &'a str)>;
}

/// UAX #29 sentence segmentation via `unicode-segmentation`.
///
/// Trailing whitespace after a terminator is attached to the preceding
/// sentence, so offsets of subsequent sentences point at their first visible
/// character.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceDetector;

impl SentenceDetector for UnicodeSentenceDetector {
    fn sentences<'a>(&self, text: &'a str) -> Vec<(usize, &'a str)> {
        text.split_sentence_bounds()
            .scan(0usize, |offset, s| {
                let start = *offset;
                *offset += s.len();
                Some((start, s))
            })
            .collect()
    }
}
