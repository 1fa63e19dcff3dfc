//! Rich text: an ordered sequence of text and emoji spans.
//!
//! Offsets are cursor units (see [`Span::len`]). Every mutation keeps the
//! span list canonical: no empty text spans, and adjacent text spans with
//! equal styles are merged. [`RichText::apply_style`] is the one exception
//! and never touches span boundaries.

// if-let-else is clearer than map_or for the splitting logic
#![allow(clippy::option_if_let_else)]

use crate::catalog::Emoji;
use crate::error::{Error, Result};
use crate::style::Style;
use crate::text::span::{EmojiSpan, Span, TextSpan};
use crate::unicode::{grapheme_byte_offset, graphemes, is_line_break};
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// One cursor unit of rich text, as seen by layout engines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Unit<'a> {
    /// A grapheme cluster of plain text.
    Text { grapheme: &'a str, style: &'a Style },
    /// An inline emoji.
    Emoji { emoji: &'a Arc<Emoji>, style: &'a Style },
}

impl<'a> Unit<'a> {
    /// Rendering style of the unit.
    #[must_use]
    pub fn style(&self) -> &'a Style {
        match *self {
            Self::Text { style, .. } | Self::Emoji { style, .. } => style,
        }
    }
}

/// Text interleaved with inline emoji.
///
/// `Display` renders the placeholder projection, so `to_string()` is the
/// same as [`PlaceholderCodec::encode`](crate::PlaceholderCodec::encode).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RichText {
    spans: Vec<Span>,
}

impl RichText {
    /// Create empty rich text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create rich text holding a single run of plain text.
    #[must_use]
    pub fn plain(text: &str, style: Style) -> Self {
        Self::from_spans([Span::text(text, style)])
    }

    /// Build from spans, dropping empty text spans and merging equal neighbours.
    #[must_use]
    pub fn from_spans(spans: impl IntoIterator<Item = Span>) -> Self {
        let mut text = Self {
            spans: spans.into_iter().collect(),
        };
        text.normalize();
        text
    }

    /// The spans in order.
    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Consume into spans.
    #[must_use]
    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }

    /// Length in cursor units, counting each emoji as 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.iter().map(Span::len).sum()
    }

    /// Check if there is no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Length of the placeholder encoding in chars.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.spans
            .iter()
            .map(|span| match span {
                Span::Text(span) => span.text.chars().count(),
                Span::Emoji(span) => span.emoji.token().chars().count() + 2,
            })
            .sum()
    }

    /// Number of emoji spans.
    #[must_use]
    pub fn emoji_count(&self) -> usize {
        self.spans.iter().filter(|s| s.as_emoji().is_some()).count()
    }

    /// The emoji when the text is exactly one emoji and nothing else.
    #[must_use]
    pub fn single_emoji(&self) -> Option<&Arc<Emoji>> {
        match self.spans.as_slice() {
            [span] => span.as_emoji(),
            _ => None,
        }
    }

    /// Iterate cursor units.
    pub fn units(&self) -> impl Iterator<Item = Unit<'_>> {
        self.spans.iter().flat_map(span_units)
    }

    /// Append a span at the end.
    pub fn push(&mut self, span: Span) {
        if span.is_empty() {
            return;
        }
        self.spans.push(span);
        self.merge_around(self.spans.len() - 1);
    }

    /// Append another rich text at the end.
    pub fn append(&mut self, other: &Self) {
        for span in &other.spans {
            self.push(span.clone());
        }
    }

    /// Return `self` followed by `other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.append(other);
        out
    }

    /// Insert an emoji, styled like the neighbouring content.
    pub fn insert_emoji(&mut self, emoji: Arc<Emoji>, at: usize) -> Result<()> {
        let style = self.style_at(at)?;
        self.insert_emoji_styled(emoji, at, style)
    }

    /// Insert an emoji with an explicit style.
    pub fn insert_emoji_styled(&mut self, emoji: Arc<Emoji>, at: usize, style: Style) -> Result<()> {
        self.insert_spans(at, vec![Span::Emoji(EmojiSpan { emoji, style })])
    }

    /// Insert plain text, styled like the neighbouring content.
    ///
    /// Placeholder-shaped text is inserted literally; decode it first to turn
    /// `[token]` into emoji.
    pub fn insert_text(&mut self, text: &str, at: usize) -> Result<()> {
        let style = self.style_at(at)?;
        self.insert_text_styled(text, at, style)
    }

    /// Insert plain text with an explicit style.
    pub fn insert_text_styled(&mut self, text: &str, at: usize, style: Style) -> Result<()> {
        self.insert_spans(
            at,
            vec![Span::Text(TextSpan {
                text: text.to_string(),
                style,
            })],
        )
    }

    /// Insert another rich text, keeping its styles.
    pub fn insert_rich(&mut self, other: &Self, at: usize) -> Result<()> {
        self.insert_spans(at, other.spans.clone())
    }

    fn insert_spans(&mut self, at: usize, spans: Vec<Span>) -> Result<()> {
        self.check_offset(at)?;
        let idx = self.split_at(at);
        self.spans.splice(idx..idx, spans);
        self.normalize();
        Ok(())
    }

    /// Remove the units in `range`.
    pub fn delete_range(&mut self, range: Range<usize>) -> Result<()> {
        self.check_range(&range)?;
        if range.is_empty() {
            return Ok(());
        }
        let start = self.split_at(range.start);
        let end = self.split_at(range.end);
        self.spans.drain(start..end);
        self.normalize();
        Ok(())
    }

    /// Copy the units in `range`, splitting text spans at the cut points.
    pub fn substring(&self, range: Range<usize>) -> Result<Self> {
        self.check_range(&range)?;
        let mut copy = self.clone();
        let start = copy.split_at(range.start);
        let end = copy.split_at(range.end);
        Ok(Self::from_spans(copy.spans.drain(start..end)))
    }

    /// Give every span the same style. Span boundaries and emoji identities
    /// are left untouched.
    pub fn apply_style(&mut self, style: &Style) {
        for span in &mut self.spans {
            span.set_style(*style);
        }
    }

    /// Truncate trailing content so `len() <= limit`, counting each emoji as 1.
    ///
    /// Returns `true` when something was removed. Calling it again with the
    /// same limit is a no-op.
    pub fn apply_length_limit(&mut self, limit: usize) -> bool {
        let len = self.len();
        if len <= limit {
            return false;
        }
        let start = self.split_at(limit);
        self.spans.truncate(start);
        self.normalize();
        tracing::trace!(limit, removed = len - limit, "truncated rich text to length limit");
        true
    }

    /// Check if the last unit is a line break.
    #[must_use]
    pub fn ends_with_line_break(&self) -> bool {
        match self.spans.last() {
            Some(Span::Text(span)) => graphemes(&span.text).next_back().is_some_and(is_line_break),
            _ => false,
        }
    }

    /// Remove one trailing line break, if present.
    pub fn trim_trailing_line_break(&mut self) -> bool {
        if !self.ends_with_line_break() {
            return false;
        }
        let len = self.len();
        let start = self.split_at(len - 1);
        self.spans.truncate(start);
        true
    }

    /// Compare content ignoring style and span boundaries between text runs.
    #[must_use]
    pub fn content_eq(&self, other: &Self) -> bool {
        #[derive(PartialEq)]
        enum Piece<'a> {
            Text(String),
            Emoji(&'a Emoji),
        }

        fn pieces(text: &RichText) -> Vec<Piece<'_>> {
            let mut out: Vec<Piece<'_>> = Vec::new();
            for span in &text.spans {
                match span {
                    Span::Text(span) => {
                        if let Some(Piece::Text(run)) = out.last_mut() {
                            run.push_str(&span.text);
                        } else {
                            out.push(Piece::Text(span.text.clone()));
                        }
                    }
                    Span::Emoji(span) => out.push(Piece::Emoji(&span.emoji)),
                }
            }
            out
        }

        pieces(self) == pieces(other)
    }

    /// Style of the content a caret at `at` would extend: the unit before
    /// it, or the first unit when at the start.
    fn style_at(&self, at: usize) -> Result<Style> {
        self.check_offset(at)?;
        let mut pos = 0;
        let mut found = self.spans.first().map(|s| *s.style());
        for span in &self.spans {
            if pos >= at {
                break;
            }
            found = Some(*span.style());
            pos += span.len();
        }
        Ok(found.unwrap_or_default())
    }

    fn check_offset(&self, offset: usize) -> Result<()> {
        let len = self.len();
        if offset > len {
            return Err(Error::OutOfBounds { offset, len });
        }
        Ok(())
    }

    fn check_range(&self, range: &Range<usize>) -> Result<()> {
        let len = self.len();
        if range.start > range.end || range.end > len {
            return Err(Error::InvalidRange {
                start: range.start,
                end: range.end,
                len,
            });
        }
        Ok(())
    }

    /// Make sure a span boundary exists at `offset` and return the index of
    /// the first span starting there. Offsets past the end map to `len`.
    fn split_at(&mut self, offset: usize) -> usize {
        let mut pos = 0;
        for idx in 0..self.spans.len() {
            if pos == offset {
                return idx;
            }
            let span_len = self.spans[idx].len();
            if offset < pos + span_len {
                let Span::Text(span) = &mut self.spans[idx] else {
                    // Emoji are one unit wide, so offsets never fall inside one.
                    return idx;
                };
                let Some(byte) = grapheme_byte_offset(&span.text, offset - pos) else {
                    return idx;
                };
                let tail = span.text.split_off(byte);
                let style = span.style;
                self.spans
                    .insert(idx + 1, Span::Text(TextSpan { text: tail, style }));
                return idx + 1;
            }
            pos += span_len;
        }
        self.spans.len()
    }

    fn normalize(&mut self) {
        let mut out: Vec<Span> = Vec::with_capacity(self.spans.len());
        for span in self.spans.drain(..) {
            if span.is_empty() {
                continue;
            }
            if let (Some(Span::Text(prev)), Span::Text(next)) = (out.last_mut(), &span) {
                if prev.style == next.style {
                    prev.text.push_str(&next.text);
                    continue;
                }
            }
            out.push(span);
        }
        self.spans = out;
    }

    fn merge_around(&mut self, idx: usize) {
        if idx == 0 || idx >= self.spans.len() {
            return;
        }
        let mergeable = matches!(
            (&self.spans[idx - 1], &self.spans[idx]),
            (Span::Text(prev), Span::Text(next)) if prev.style == next.style
        );
        if !mergeable {
            return;
        }
        if let Span::Text(next) = self.spans.remove(idx) {
            if let Span::Text(prev) = &mut self.spans[idx - 1] {
                prev.text.push_str(&next.text);
            }
        }
    }
}

fn span_units(span: &Span) -> Box<dyn Iterator<Item = Unit<'_>> + '_> {
    match span {
        Span::Text(span) => Box::new(graphemes(&span.text).map(|grapheme| Unit::Text {
            grapheme,
            style: &span.style,
        })),
        Span::Emoji(span) => Box::new(std::iter::once(Unit::Emoji {
            emoji: &span.emoji,
            style: &span.style,
        })),
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        for span in &self.spans {
            span.write_placeholder(&mut out);
        }
        f.write_str(&out)
    }
}

impl From<Span> for RichText {
    fn from(span: Span) -> Self {
        Self::from_spans([span])
    }
}
