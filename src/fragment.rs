//! Fragments and the unit splitter.
//!
//! A fragment is the smallest piece a document is cut into: one word, one
//! sentence, one passage, one page, or one line, together with its byte
//! offset in the original text. Windowing, tail merging, page attribution,
//! and overlap recording all operate on fragments; none of them look at the
//! raw text again, so correctness of every offset downstream rests on the
//! invariant established here:
//!
//! > For every unit except `function`, the fragments cover the input exactly.
//! > Concatenating their texts in order reproduces the original string, and
//! > each `start` is the byte index of the fragment in that string.
//!
//! Delimiters are never discarded. A word keeps its trailing whitespace run,
//! a line keeps its newline, a page keeps its form feed, a passage keeps its
//! blank-line run. The final fragment may lack a delimiter when the text does
//! not end with one.

use crate::sentence::SentenceDetector;

/// A minimal splitting unit with its position in the source text.
///
/// `start` is a byte offset (Rust slicing convention). In
/// [`SplitUnit::Function`](crate::SplitUnit::Function) mode the custom
/// function returns arbitrary strings, offsets are meaningless, and `start`
/// is always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// The fragment text, delimiter included.
    pub text: String,
    /// Byte offset of this fragment in the original document content.
    pub start: usize,
}

impl Fragment {
    /// Create a new fragment.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        Self {
            text: text.into(),
            start,
        }
    }

    /// Length of the fragment text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the fragment text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Split on Unicode whitespace runs, each word keeping its trailing run.
///
/// Leading whitespace forms a fragment of its own, so whitespace-only text
/// yields exactly one fragment and nothing is ever lost.
pub(crate) fn split_words(text: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut prev_was_ws = false;

    for (i, ch) in text.char_indices() {
        let is_ws = ch.is_whitespace();
        // A fragment ends where a whitespace run ends.
        if prev_was_ws && !is_ws {
            fragments.push(Fragment::new(&text[start..i], start));
            start = i;
        }
        prev_was_ws = is_ws;
    }
    if start < text.len() {
        fragments.push(Fragment::new(&text[start..], start));
    }
    fragments
}

/// Split after every newline, the newline staying with its line.
pub(crate) fn split_lines(text: &str) -> Vec<Fragment> {
    split_after_char(text, '\n')
}

/// Split after every form feed, the form feed staying with its page.
pub(crate) fn split_pages(text: &str) -> Vec<Fragment> {
    split_after_char(text, '\u{c}')
}

fn split_after_char(text: &str, delimiter: char) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        if ch == delimiter {
            let end = i + ch.len_utf8();
            fragments.push(Fragment::new(&text[start..end], start));
            start = end;
        }
    }
    // No empty trailing fragment when the text ends with a delimiter.
    if start < text.len() {
        fragments.push(Fragment::new(&text[start..], start));
    }
    fragments
}

/// Split after every run of two or more newlines, the run staying with the
/// preceding passage.
pub(crate) fn split_passages(text: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut newline_run = 0usize;

    for (i, ch) in text.char_indices() {
        if ch == '\n' {
            newline_run += 1;
        } else {
            if newline_run >= 2 {
                fragments.push(Fragment::new(&text[start..i], start));
                start = i;
            }
            newline_run = 0;
        }
    }
    if start < text.len() {
        fragments.push(Fragment::new(&text[start..], start));
    }
    fragments
}

/// Split with the configured sentence detector.
pub(crate) fn split_sentences(text: &str, detector: &dyn SentenceDetector) -> Vec<Fragment> {
    detector
        .sentences(text)
        .into_iter()
        .map(|(start, s)| Fragment::new(s, start))
        .collect()
}
