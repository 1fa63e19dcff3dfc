//! Tunables for glyph sizing, caching, length limiting and wrapping.

use crate::error::{Error, Result};
use crate::layout::WrapMode;
use crate::color::Rgba;
use crate::style::{Font, Style};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;

/// Configuration shared by the codec, the layout engine and edit sessions.
///
/// Every field is optional in JSON; missing fields take their defaults.
///
/// ```
/// use emoji_text::EmojiTextConfig;
///
/// let config = EmojiTextConfig::from_json_str(
///     r##"{ "length_limit": 140, "link_color": "#3478F6" }"##,
/// ).unwrap();
/// assert_eq!(config.length_limit, Some(140));
/// assert_eq!(config.link_style(1).attributes.link_id(), Some(1));
/// assert!((config.glyph_height_scale - 1.03).abs() < f32::EPSILON);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiTextConfig {
    /// Emoji glyph height as a multiple of the font line height.
    pub glyph_height_scale: f32,
    /// Emoji glyph baseline offset as a multiple of the font descender.
    pub glyph_baseline_scale: f32,
    /// Number of emoji image sizes kept by the glyph cache.
    pub glyph_cache_capacity: usize,
    /// Maximum text length in cursor units (`None` = unlimited).
    pub length_limit: Option<usize>,
    /// Soft wrapping strategy of the reference layout.
    pub wrap_mode: WrapMode,
    /// Point size of the default system font.
    pub default_font_size: f32,
    /// Hex colour of plain text (`None` = host default).
    pub text_color: Option<Rgba>,
    /// Hex colour of link spans such as the fold continuation.
    pub link_color: Option<Rgba>,
}

impl Default for EmojiTextConfig {
    fn default() -> Self {
        Self {
            glyph_height_scale: 1.03,
            glyph_baseline_scale: 1.06,
            glyph_cache_capacity: 256,
            length_limit: None,
            wrap_mode: WrapMode::Word,
            default_font_size: 17.0,
            text_color: None,
            link_color: None,
        }
    }
}

impl EmojiTextConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check that every value is in its accepted domain.
    pub fn validate(&self) -> Result<()> {
        if !(self.glyph_height_scale.is_finite() && self.glyph_height_scale > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "glyph_height_scale must be positive, got {}",
                self.glyph_height_scale
            )));
        }
        if !self.glyph_baseline_scale.is_finite() {
            return Err(Error::InvalidConfig(
                "glyph_baseline_scale must be finite".to_string(),
            ));
        }
        if self.glyph_cache_capacity == 0 {
            return Err(Error::InvalidConfig(
                "glyph_cache_capacity must be at least 1".to_string(),
            ));
        }
        if self.length_limit == Some(0) {
            return Err(Error::InvalidConfig(
                "length_limit must be at least 1 (omit it for no limit)".to_string(),
            ));
        }
        if !(self.default_font_size.is_finite() && self.default_font_size > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "default_font_size must be positive, got {}",
                self.default_font_size
            )));
        }
        Ok(())
    }

    /// Glyph cache capacity as the non-zero value the cache expects.
    #[must_use]
    pub fn cache_capacity(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.glyph_cache_capacity).unwrap_or(NonZeroUsize::MIN)
    }

    /// Style built from the default system font and text colour.
    #[must_use]
    pub fn default_style(&self) -> Style {
        let style = Style::new(Font::system(self.default_font_size));
        match self.text_color {
            Some(color) => style.with_color(color),
            None => style,
        }
    }

    /// Underlined style for a tappable span carrying `link_id`, coloured with
    /// `link_color` and falling back to the text colour.
    #[must_use]
    pub fn link_style(&self, link_id: u32) -> Style {
        let mut builder = Style::builder()
            .font(Font::system(self.default_font_size))
            .underline()
            .link(link_id);
        if let Some(color) = self.link_color.or(self.text_color) {
            builder = builder.color(color);
        }
        builder.build()
    }
}
