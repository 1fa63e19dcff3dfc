//! Line breaking of rich text.

use crate::config::EmojiTextConfig;
use crate::layout::glyph::{GlyphCache, ImageSource};
use crate::layout::metrics::FontMetrics;
use crate::text::{RichText, Unit};
use crate::unicode::{is_line_break, is_whitespace};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Text wrapping mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
    /// No soft wrapping; only line breaks end a line.
    None,
    /// Wrap before any grapheme that would overflow.
    Char,
    /// Wrap at whitespace and around emoji, falling back to `Char` for
    /// words longer than a line.
    #[default]
    Word,
}

/// One laid-out line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineInfo {
    /// Cursor-unit range in the measured text. Lines are contiguous; a
    /// trailing line break belongs to the line it ends.
    pub range: Range<usize>,
    /// The line's content.
    pub text: RichText,
    /// Rendered width, excluding trailing whitespace.
    pub width: f32,
    /// Set when a single unit is wider than the layout width.
    pub exceeds_max_width: bool,
}

/// A text layout engine, as provided by the host.
pub trait TextLayout {
    /// Break `text` into lines no wider than `max_width` where possible.
    fn lines(&self, text: &RichText, max_width: f32) -> Vec<LineInfo>;

    /// Width of the widest line when nothing soft-wraps.
    fn measure(&self, text: &RichText) -> f32 {
        self.lines(text, f32::INFINITY)
            .iter()
            .map(|line| line.width)
            .fold(0.0, f32::max)
    }
}

#[derive(Clone, Copy, Debug)]
struct Cell {
    advance: f32,
    whitespace: bool,
    line_break: bool,
    emoji: bool,
}

/// Greedy first-fit line breaker.
pub struct GreedyLayout<M, S> {
    metrics: M,
    glyphs: GlyphCache<S>,
    wrap_mode: WrapMode,
}

impl<M: FontMetrics, S: ImageSource> GreedyLayout<M, S> {
    /// Create a word-wrapping layout.
    pub fn new(metrics: M, glyphs: GlyphCache<S>) -> Self {
        Self {
            metrics,
            glyphs,
            wrap_mode: WrapMode::default(),
        }
    }

    /// Create a layout with the configured wrap mode, cache size and glyph scales.
    pub fn from_config(metrics: M, source: S, config: &EmojiTextConfig) -> Self {
        Self::new(metrics, GlyphCache::from_config(source, config)).with_wrap_mode(config.wrap_mode)
    }

    /// Set the wrap mode.
    #[must_use]
    pub fn with_wrap_mode(mut self, mode: WrapMode) -> Self {
        self.wrap_mode = mode;
        self
    }

    /// The wrap mode.
    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    /// The glyph cache used for emoji.
    pub fn glyphs(&self) -> &GlyphCache<S> {
        &self.glyphs
    }

    fn cell(&self, unit: Unit<'_>) -> Cell {
        match unit {
            Unit::Text { grapheme, style } => {
                let line_break = is_line_break(grapheme);
                Cell {
                    advance: if line_break {
                        0.0
                    } else {
                        self.metrics.advance(grapheme, &style.font)
                    },
                    whitespace: is_whitespace(grapheme),
                    line_break,
                    emoji: false,
                }
            }
            Unit::Emoji { emoji, style } => Cell {
                advance: self.glyphs.glyph(emoji, &style.font).width,
                whitespace: false,
                line_break: false,
                emoji: true,
            },
        }
    }

    fn break_cells(&self, cells: &[Cell], max_width: f32) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut start = 0;
        let mut pen = 0.0f32;
        // Where the current line may end in word mode.
        let mut word_break: Option<usize> = None;
        let mut i = 0;

        while i < cells.len() {
            let cell = cells[i];

            if cell.line_break {
                ranges.push(start..i + 1);
                start = i + 1;
                pen = 0.0;
                word_break = None;
                i += 1;
                continue;
            }

            if cell.whitespace {
                // Trailing whitespace hangs past the edge.
                pen += cell.advance;
                i += 1;
                if self.wrap_mode == WrapMode::Word {
                    word_break = Some(i);
                }
                continue;
            }

            if cell.emoji && self.wrap_mode == WrapMode::Word && i > start {
                word_break = Some(i);
            }

            if self.wrap_mode != WrapMode::None && i > start && pen + cell.advance > max_width {
                let end = match self.wrap_mode {
                    WrapMode::Word => word_break.filter(|&b| b > start).unwrap_or(i),
                    _ => i,
                };
                ranges.push(start..end);
                start = end;
                pen = cells[end..i].iter().map(|c| c.advance).sum();
                word_break = None;
                continue;
            }

            pen += cell.advance;
            i += 1;
            if cell.emoji && self.wrap_mode == WrapMode::Word {
                word_break = Some(i);
            }
        }

        if start < cells.len() {
            ranges.push(start..cells.len());
        }
        ranges
    }
}

/// Width of a line's cells, ignoring trailing whitespace.
fn ink_width(cells: &[Cell]) -> f32 {
    let end = cells
        .iter()
        .rposition(|c| !c.whitespace)
        .map_or(0, |idx| idx + 1);
    cells[..end].iter().map(|c| c.advance).sum()
}

impl<M: FontMetrics, S: ImageSource> TextLayout for GreedyLayout<M, S> {
    fn lines(&self, text: &RichText, max_width: f32) -> Vec<LineInfo> {
        let cells: Vec<Cell> = text.units().map(|unit| self.cell(unit)).collect();
        self.break_cells(&cells, max_width)
            .into_iter()
            .map(|range| {
                let width = ink_width(&cells[range.clone()]);
                LineInfo {
                    text: text.substring(range.clone()).unwrap_or_default(),
                    width,
                    exceeds_max_width: width > max_width,
                    range,
                }
            })
            .collect()
    }
}
