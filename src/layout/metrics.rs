//! Text advance providers.

use crate::style::Font;
use crate::unicode::{WidthMethod, display_width_with_method, is_line_break};

/// Supplies the advance width of plain-text grapheme clusters.
///
/// Hosts plug their real text shaper in here. Closures of the form
/// `Fn(&str, &Font) -> f32` implement the trait directly.
pub trait FontMetrics {
    /// Advance of `grapheme` set in `font`, in points.
    fn advance(&self, grapheme: &str, font: &Font) -> f32;
}

impl<F> FontMetrics for F
where
    F: Fn(&str, &Font) -> f32,
{
    fn advance(&self, grapheme: &str, font: &Font) -> f32 {
        self(grapheme, font)
    }
}

/// Fixed-pitch metrics: each display cell is `cell_ratio * font.size` wide.
///
/// Wide (CJK, emoji) clusters take two cells and combining marks none, as
/// computed by `unicode-width`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMetrics {
    /// Cell width relative to the font size.
    pub cell_ratio: f32,
    /// How ambiguous-width characters are counted.
    pub width_method: WidthMethod,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            cell_ratio: 0.5,
            width_method: WidthMethod::WcWidth,
        }
    }
}

impl MonospaceMetrics {
    /// Create metrics with the given cell ratio.
    #[must_use]
    pub fn new(cell_ratio: f32) -> Self {
        Self {
            cell_ratio,
            ..Self::default()
        }
    }
}

impl FontMetrics for MonospaceMetrics {
    fn advance(&self, grapheme: &str, font: &Font) -> f32 {
        if is_line_break(grapheme) {
            return 0.0;
        }
        let cells = display_width_with_method(grapheme, self.width_method);
        cells as f32 * self.cell_ratio * font.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_advance() {
        let metrics = MonospaceMetrics::default();
        let font = Font::system(10.0);
        assert!((metrics.advance("a", &font) - 5.0).abs() < f32::EPSILON);
        assert!((metrics.advance("漢", &font) - 10.0).abs() < f32::EPSILON);
        assert!(metrics.advance("\n", &font).abs() < f32::EPSILON);
    }

    #[test]
    fn test_ambiguous_width() {
        let font = Font::system(10.0);
        let cjk = MonospaceMetrics {
            width_method: WidthMethod::Unicode,
            ..MonospaceMetrics::default()
        };
        assert!((cjk.advance("①", &font) - 10.0).abs() < f32::EPSILON);
        assert!((MonospaceMetrics::default().advance("①", &font) - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_closure_metrics() {
        let metrics = |g: &str, font: &Font| g.len() as f32 * font.size;
        assert!((metrics.advance("ab", &Font::system(3.0)) - 6.0).abs() < f32::EPSILON);
    }
}
