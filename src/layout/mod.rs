//! Measuring and folding rich text.
//!
//! The host's text layout engine is modelled by [`TextLayout`]: given rich
//! text and a width it reports where lines break. [`GreedyLayout`] is a
//! reference implementation driven by a [`FontMetrics`] provider and a
//! [`GlyphCache`] of emoji image sizes. [`fold_to_lines`] works against any
//! `TextLayout`.
//!
//! # Examples
//!
//! ```
//! use emoji_text::layout::{GlyphCache, GreedyLayout, MonospaceMetrics, UniformImageSource};
//! use emoji_text::{fold_to_lines, Font, RichText, Style};
//! use std::num::NonZeroUsize;
//!
//! let layout = GreedyLayout::new(
//!     MonospaceMetrics::default(),
//!     GlyphCache::new(UniformImageSource::default(), NonZeroUsize::new(16).unwrap()),
//! );
//! let style = Style::new(Font::system(10.0));
//! let text = RichText::plain("one two three four five six", style);
//! let more = RichText::plain("…more", style);
//!
//! let folded = fold_to_lines(&text, 2, 50.0, &more, &layout);
//! assert!(folded.to_string().ends_with("…more"));
//! ```

mod fold;
mod glyph;
mod measure;
mod metrics;

pub use fold::fold_to_lines;
pub use glyph::{EmojiGlyph, GlyphCache, GlyphScale, ImageSize, ImageSource, UniformImageSource};
pub use measure::{GreedyLayout, LineInfo, TextLayout, WrapMode};
pub use metrics::{FontMetrics, MonospaceMetrics};
