//! Grapheme cluster iteration.
//!
//! One grapheme cluster of plain text is one cursor unit, so these helpers
//! back all offset arithmetic on [`RichText`](crate::RichText).

use unicode_segmentation::UnicodeSegmentation;

/// Iterate over grapheme clusters in a string.
pub fn graphemes(s: &str) -> impl DoubleEndedIterator<Item = &str> {
    s.graphemes(true)
}

/// Number of grapheme clusters in a string.
#[must_use]
pub fn grapheme_count(s: &str) -> usize {
    if s.is_ascii() {
        // Every ASCII char is its own cluster except "\r\n".
        return s.len() - s.matches("\r\n").count();
    }
    s.graphemes(true).count()
}

/// Byte offset of the boundary before the `n`th grapheme cluster.
///
/// `n == grapheme_count(s)` yields `s.len()`; anything larger yields `None`.
#[must_use]
pub fn grapheme_byte_offset(s: &str, n: usize) -> Option<usize> {
    if n == 0 {
        return Some(0);
    }
    let mut boundaries = s
        .grapheme_indices(true)
        .map(|(idx, _)| idx)
        .chain(std::iter::once(s.len()));
    boundaries.nth(n)
}

/// Check if a grapheme cluster is whitespace (line breaks included).
#[must_use]
pub fn is_whitespace(grapheme: &str) -> bool {
    !grapheme.is_empty() && grapheme.chars().all(char::is_whitespace)
}

/// Check if a grapheme cluster ends a line.
#[must_use]
pub fn is_line_break(grapheme: &str) -> bool {
    matches!(
        grapheme,
        "\n" | "\r\n" | "\r" | "\u{2028}" | "\u{2029}" | "\u{85}"
    )
}
