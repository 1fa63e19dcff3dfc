//! Emoji glyph sizing and the image-size cache.
//!
//! An emoji glyph is scaled so its height is `line_height * 1.03` of the
//! surrounding font, its width follows the image's native aspect ratio, and
//! it sits `descender * 1.06` below the baseline. Image sizes come from the
//! host through [`ImageSource`] and are memoised per resource path in a
//! bounded LRU.

use crate::catalog::Emoji;
use crate::config::EmojiTextConfig;
use crate::style::Font;
use lru::LruCache;
use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Pixel size of an emoji image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageSize {
    pub width: f32,
    pub height: f32,
}

impl ImageSize {
    /// Stand-in for images that cannot be loaded.
    pub const UNIT: Self = Self::new(1.0, 1.0);

    /// Create an image size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width divided by height; degenerate sizes count as square.
    #[must_use]
    pub fn aspect_ratio(self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        Self::new(64.0, 64.0)
    }
}

/// Loads image sizes on behalf of the glyph cache.
pub trait ImageSource {
    /// Native size of the image at `path`, or `None` if it cannot be read.
    fn image_size(&self, path: &Path) -> Option<ImageSize>;
}

impl<F> ImageSource for F
where
    F: Fn(&Path) -> Option<ImageSize>,
{
    fn image_size(&self, path: &Path) -> Option<ImageSize> {
        self(path)
    }
}

/// Reports the same size for every image (e.g. a square sprite sheet).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UniformImageSource(pub ImageSize);

impl ImageSource for UniformImageSource {
    fn image_size(&self, _path: &Path) -> Option<ImageSize> {
        Some(self.0)
    }
}

/// Multipliers applied to font metrics when sizing emoji glyphs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphScale {
    /// Glyph height relative to the line height.
    pub height: f32,
    /// Baseline offset relative to the descender.
    pub baseline: f32,
}

impl Default for GlyphScale {
    fn default() -> Self {
        Self {
            height: 1.03,
            baseline: 1.06,
        }
    }
}

impl GlyphScale {
    /// Scales from configuration.
    #[must_use]
    pub fn from_config(config: &EmojiTextConfig) -> Self {
        Self {
            height: config.glyph_height_scale,
            baseline: config.glyph_baseline_scale,
        }
    }
}

/// Layout box of an emoji glyph, in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmojiGlyph {
    pub width: f32,
    pub height: f32,
    /// Vertical offset of the box origin from the baseline (negative = below).
    pub baseline_offset: f32,
}

impl EmojiGlyph {
    /// Size a glyph for an image set in `font`.
    #[must_use]
    pub fn for_font(image: ImageSize, font: &Font, scale: GlyphScale) -> Self {
        let height = font.line_height * scale.height;
        Self {
            width: height * image.aspect_ratio(),
            height,
            baseline_offset: font.descender * scale.baseline,
        }
    }
}

/// Capacity-bounded cache of emoji image sizes keyed by resource path.
///
/// Owned by the layout side; the codec never sees it. Failed loads are not
/// cached, so an image that appears later is picked up.
pub struct GlyphCache<S> {
    source: S,
    scale: GlyphScale,
    sizes: RefCell<LruCache<PathBuf, ImageSize>>,
}

impl<S: ImageSource> GlyphCache<S> {
    /// Create a cache with default glyph scales.
    pub fn new(source: S, capacity: NonZeroUsize) -> Self {
        Self {
            source,
            scale: GlyphScale::default(),
            sizes: RefCell::new(LruCache::new(capacity)),
        }
    }

    /// Create a cache sized and scaled from configuration.
    pub fn from_config(source: S, config: &EmojiTextConfig) -> Self {
        Self::new(source, config.cache_capacity()).with_scale(GlyphScale::from_config(config))
    }

    /// Override the glyph scales.
    #[must_use]
    pub fn with_scale(mut self, scale: GlyphScale) -> Self {
        self.scale = scale;
        self
    }

    /// Glyph scales in use.
    pub fn scale(&self) -> GlyphScale {
        self.scale
    }

    /// Native image size of an emoji's still image (1x1 when unavailable).
    pub fn image_size(&self, emoji: &Emoji) -> ImageSize {
        let path = emoji.static_resource();
        if let Some(size) = self.sizes.borrow_mut().get(path) {
            return *size;
        }
        match self.source.image_size(path) {
            Some(size) => {
                self.sizes.borrow_mut().put(path.to_path_buf(), size);
                size
            }
            None => {
                tracing::debug!(path = %path.display(), "emoji image unavailable, using 1x1");
                ImageSize::UNIT
            }
        }
    }

    /// Glyph box for an emoji set in `font`.
    pub fn glyph(&self, emoji: &Emoji, font: &Font) -> EmojiGlyph {
        EmojiGlyph::for_font(self.image_size(emoji), font, self.scale)
    }

    /// Number of cached sizes.
    pub fn len(&self) -> usize {
        self.sizes.borrow().len()
    }

    /// Check if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.sizes.borrow().is_empty()
    }

    /// Drop all cached sizes.
    pub fn clear(&self) {
        self.sizes.borrow_mut().clear();
    }
}
