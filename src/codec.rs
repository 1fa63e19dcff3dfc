//! Conversion between placeholder text and rich text.
//!
//! Placeholder text is the storage/transport form: free text in which each
//! emoji appears as `[token]`. Decoding scans for `[` + word characters + `]`
//! (leftmost, non-overlapping) and turns matches whose token is in the
//! catalog into emoji spans. Everything else, unknown tokens included, stays
//! literal text. Literal brackets are never escaped, so user text that
//! happens to contain `[smile]` decodes as the emoji.
//!
//! # Examples
//!
//! ```
//! use emoji_text::{Emoji, EmojiCatalog, PlaceholderCodec};
//! use std::sync::Arc;
//!
//! let catalog = EmojiCatalog::from_emojis([Emoji::new("smile", "smile.png", "smile.gif")?])?;
//! let codec = PlaceholderCodec::new(Arc::new(catalog));
//!
//! let text = codec.decode("hi [smile]!");
//! assert_eq!(text.spans().len(), 3);
//! assert_eq!(text.len(), 5);
//! assert_eq!(codec.encode(&text), "hi [smile]!");
//! # Ok::<(), emoji_text::Error>(())
//! ```

use crate::catalog::{Emoji, EmojiCatalog};
use crate::config::EmojiTextConfig;
use crate::style::Style;
use crate::text::{RichText, Span};
use regex::Regex;
use std::ops::Range;
use std::sync::{Arc, LazyLock};

/// `[` + one or more word characters + `]`, capturing the token.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(\w+)\]").expect("placeholder regex"));

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+$").expect("token regex"));

/// Check if `token` can appear inside a placeholder.
#[must_use]
pub fn is_valid_token(token: &str) -> bool {
    TOKEN.is_match(token)
}

/// A placeholder in a string that names a known emoji.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceholderMatch {
    /// Byte range of the whole `[token]`, brackets included.
    pub range: Range<usize>,
    pub emoji: Arc<Emoji>,
}

/// Encoder/decoder bound to an emoji catalog.
#[derive(Clone, Debug)]
pub struct PlaceholderCodec {
    catalog: Arc<EmojiCatalog>,
    style: Style,
}

impl PlaceholderCodec {
    /// Create a codec that decodes with the default style.
    #[must_use]
    pub fn new(catalog: Arc<EmojiCatalog>) -> Self {
        Self {
            catalog,
            style: Style::default(),
        }
    }

    /// Create a codec that decodes with the configured default font.
    #[must_use]
    pub fn from_config(catalog: Arc<EmojiCatalog>, config: &EmojiTextConfig) -> Self {
        Self::new(catalog).with_style(config.default_style())
    }

    /// Set the style used by [`decode`](Self::decode).
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The catalog tokens are resolved against.
    #[must_use]
    pub fn catalog(&self) -> &Arc<EmojiCatalog> {
        &self.catalog
    }

    /// The style used by [`decode`](Self::decode).
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Serialize rich text: text spans verbatim, emoji as `[token]`.
    #[must_use]
    pub fn encode(&self, text: &RichText) -> String {
        text.to_string()
    }

    /// Find placeholders naming known emoji, in ascending position.
    #[must_use]
    pub fn find_placeholders(&self, text: &str) -> Vec<PlaceholderMatch> {
        PLACEHOLDER
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let token = caps.get(1)?;
                let emoji = self.catalog.lookup(token.as_str())?;
                Some(PlaceholderMatch {
                    range: whole.range(),
                    emoji: Arc::clone(emoji),
                })
            })
            .collect()
    }

    /// Parse placeholder text with the codec's style.
    #[must_use]
    pub fn decode(&self, text: &str) -> RichText {
        self.decode_styled(text, &self.style)
    }

    /// Parse placeholder text, giving every span `style`.
    #[must_use]
    pub fn decode_styled(&self, text: &str, style: &Style) -> RichText {
        let matches = self.find_placeholders(text);
        Self::build(text, &matches, style)
    }

    /// Parse placeholder text, using `single` when the whole input is exactly
    /// one known emoji (large emoji display) and `multi` otherwise.
    #[must_use]
    pub fn decode_with_single(&self, text: &str, multi: &Style, single: &Style) -> RichText {
        let matches = self.find_placeholders(text);
        let style = match matches.as_slice() {
            [only] if only.range == (0..text.len()) => single,
            _ => multi,
        };
        Self::build(text, &matches, style)
    }

    fn build(text: &str, matches: &[PlaceholderMatch], style: &Style) -> RichText {
        tracing::trace!(len = text.len(), emoji = matches.len(), "decoding placeholder text");
        let mut spans = Vec::with_capacity(matches.len() * 2 + 1);
        let mut cursor = 0;
        for m in matches {
            if m.range.start > cursor {
                spans.push(Span::text(&text[cursor..m.range.start], *style));
            }
            spans.push(Span::emoji(Arc::clone(&m.emoji), *style));
            cursor = m.range.end;
        }
        if cursor < text.len() {
            spans.push(Span::text(&text[cursor..], *style));
        }
        RichText::from_spans(spans)
    }
}
