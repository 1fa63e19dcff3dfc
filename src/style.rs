//! Fonts, text attributes and span styles.
//!
//! This module provides the rendering attributes carried by rich text spans:
//!
//! - [`Font`]: point size plus the line metrics emoji glyphs are sized from
//! - [`TextAttributes`]: bold/underline flags plus a packed link id
//! - [`Style`]: Complete span styling (font, color, attributes, link id)
//! - [`StyleBuilder`]: Fluent builder for constructing styles
//!
//! # Examples
//!
//! ```
//! use emoji_text::{Font, Rgba, Style, TextAttributes};
//!
//! let body = Style::new(Font::system(15.0)).with_color(Rgba::BLACK);
//!
//! // The fold continuation is a tappable link.
//! let expand = Style::builder()
//!     .font(Font::system(15.0))
//!     .color(Rgba::BLUE)
//!     .link(1)
//!     .build();
//! assert_eq!(expand.attributes.link_id(), Some(1));
//! assert!(body.attributes.is_empty());
//! ```

use crate::color::Rgba;
use bitflags::bitflags;

/// Ascender of the system font relative to its point size.
const SYSTEM_ASCENDER_RATIO: f32 = 0.952;
/// Descender of the system font relative to its point size (negative, below baseline).
const SYSTEM_DESCENDER_RATIO: f32 = -0.238;

/// Font line metrics, in points.
///
/// Only the metrics matter to this crate: text advances come from a
/// [`FontMetrics`](crate::layout::FontMetrics) provider, and emoji glyph
/// boxes are derived from `line_height` and `descender`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    /// Nominal point size.
    pub size: f32,
    /// Distance from the baseline to the top of the tallest glyphs.
    pub ascender: f32,
    /// Distance from the baseline to the bottom of the lowest glyphs (negative).
    pub descender: f32,
    /// Default line height (`ascender - descender` unless overridden).
    pub line_height: f32,
}

impl Font {
    /// Create a font from explicit metrics.
    #[must_use]
    pub const fn new(size: f32, ascender: f32, descender: f32) -> Self {
        Self {
            size,
            ascender,
            descender,
            line_height: ascender - descender,
        }
    }

    /// Approximate metrics of the platform system font at `size` points.
    #[must_use]
    pub const fn system(size: f32) -> Self {
        Self::new(
            size,
            size * SYSTEM_ASCENDER_RATIO,
            size * SYSTEM_DESCENDER_RATIO,
        )
    }

    /// Return the font with an explicit line height.
    #[must_use]
    pub const fn with_line_height(self, line_height: f32) -> Self {
        Self {
            line_height,
            ..self
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(17.0)
    }
}

bitflags! {
    /// Text rendering flags.
    ///
    /// Link IDs are packed into the upper 24 bits so a span can carry a tap
    /// target (e.g. the "expand" continuation) without extra storage.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u32 {
        const BOLD      = 0x01;
        /// Links are drawn underlined.
        const UNDERLINE = 0x02;
    }
}

impl TextAttributes {
    /// Mask for the lower 8 bits containing style flags.
    pub const FLAGS_MASK: u32 = 0x0000_00FF;
    /// Mask for the upper 24 bits containing link ID.
    pub const LINK_ID_MASK: u32 = 0xFFFF_FF00;
    /// Bit shift for link ID storage.
    pub const LINK_ID_SHIFT: u32 = 8;
    /// Maximum link ID that fits in 24 bits.
    pub const MAX_LINK_ID: u32 = 0x00FF_FFFF;

    /// Extract the link ID (if any).
    #[must_use]
    pub const fn link_id(self) -> Option<u32> {
        let id = (self.bits() & Self::LINK_ID_MASK) >> Self::LINK_ID_SHIFT;
        if id == 0 { None } else { Some(id) }
    }

    /// Return attributes with a link ID set (masked to 24 bits).
    #[must_use]
    pub const fn with_link_id(self, link_id: u32) -> Self {
        let id = link_id & Self::MAX_LINK_ID;
        let bits = (self.bits() & Self::FLAGS_MASK) | (id << Self::LINK_ID_SHIFT);
        Self::from_bits_retain(bits)
    }
}

/// Rendering attributes of a span.
///
/// Plain text plays no part in the placeholder encoding, so two rich texts
/// that differ only in style encode to the same string. Emoji spans use only
/// `font` (for glyph sizing); `color` and `attributes` are ignored for them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    /// Font used for text advances and emoji glyph sizing.
    pub font: Font,
    /// Foreground color (None = host default).
    pub color: Option<Rgba>,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Create a style with the given font and no color or attributes.
    #[must_use]
    pub const fn new(font: Font) -> Self {
        Self {
            font,
            color: None,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a new style builder.
    #[must_use]
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    /// Return a new style with the specified color.
    #[must_use]
    pub const fn with_color(self, color: Rgba) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    /// Return a new style with a link ID.
    #[must_use]
    pub const fn with_link(self, link_id: u32) -> Self {
        Self {
            attributes: self.attributes.with_link_id(link_id),
            ..self
        }
    }
}

/// Builder for creating styles fluently.
#[derive(Clone, Debug, Default)]
pub struct StyleBuilder {
    style: Style,
}

impl StyleBuilder {
    /// Set the font.
    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.style.font = font;
        self
    }

    /// Set the foreground color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Add bold attribute.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.style.attributes |= TextAttributes::BOLD;
        self
    }

    /// Add underline attribute.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.style.attributes |= TextAttributes::UNDERLINE;
        self
    }

    /// Set link ID.
    #[must_use]
    pub fn link(mut self, link_id: u32) -> Self {
        self.style.attributes = self.style.attributes.with_link_id(link_id);
        self
    }

    /// Build the final style.
    #[must_use]
    pub fn build(self) -> Style {
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_font_metrics() {
        let font = Font::system(20.0);
        assert!((font.ascender - 19.04).abs() < 1e-4);
        assert!((font.descender + 4.76).abs() < 1e-4);
        assert!((font.line_height - 23.8).abs() < 1e-4);
        assert!(font.descender < 0.0);
    }

    #[test]
    fn test_font_line_height_override() {
        let font = Font::system(10.0).with_line_height(30.0);
        assert!((font.line_height - 30.0).abs() < f32::EPSILON);
        assert!((font.size - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_style_builder() {
        let style = Style::builder()
            .font(Font::system(12.0))
            .color(Rgba::BLUE)
            .bold()
            .underline()
            .build();

        assert_eq!(style.font, Font::system(12.0));
        assert_eq!(style.color, Some(Rgba::BLUE));
        assert!(style.attributes.contains(TextAttributes::BOLD));
        assert!(style.attributes.contains(TextAttributes::UNDERLINE));
    }

    #[test]
    fn test_style_defaults_to_system_font() {
        let style = Style::default();
        assert_eq!(style.font, Font::system(17.0));
        assert_eq!(style.color, None);
    }

    #[test]
    fn test_text_attributes_link_id_packing() {
        let attrs = TextAttributes::BOLD.with_link_id(0x12_3456);
        assert!(attrs.contains(TextAttributes::BOLD));
        assert_eq!(attrs.link_id(), Some(0x12_3456));

        let relinked = attrs.with_link_id(7);
        assert_eq!(relinked.link_id(), Some(7));
        assert!(relinked.contains(TextAttributes::BOLD));
        assert!(!relinked.contains(TextAttributes::UNDERLINE));
    }

    #[test]
    fn test_with_link_keeps_color() {
        let style = Style::new(Font::system(12.0))
            .with_color(Rgba::BLACK)
            .with_link(3);
        assert_eq!(style.attributes.link_id(), Some(3));
        assert_eq!(style.color, Some(Rgba::BLACK));
        assert!(Style::default().attributes.link_id().is_none());
    }

    #[test]
    fn test_text_attributes_link_id_masking() {
        let attrs = TextAttributes::empty().with_link_id(0x1FF_FFFF);
        assert_eq!(attrs.link_id(), Some(TextAttributes::MAX_LINK_ID));
    }
}
