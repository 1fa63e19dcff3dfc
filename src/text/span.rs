//! Spans: runs of plain text or a single inline emoji.

use crate::catalog::Emoji;
use crate::style::Style;
use crate::unicode::grapheme_count;
use std::sync::Arc;

/// A run of plain text with one style.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpan {
    pub text: String,
    pub style: Style,
}

/// A single emoji reference.
#[derive(Clone, Debug, PartialEq)]
pub struct EmojiSpan {
    pub emoji: Arc<Emoji>,
    /// Only `style.font` is used, to size the glyph.
    pub style: Style,
}

/// A contiguous unit of rich text.
#[derive(Clone, Debug, PartialEq)]
pub enum Span {
    Text(TextSpan),
    Emoji(EmojiSpan),
}

impl Span {
    /// Create a text span.
    #[must_use]
    pub fn text(text: impl Into<String>, style: Style) -> Self {
        Self::Text(TextSpan {
            text: text.into(),
            style,
        })
    }

    /// Create an emoji span.
    #[must_use]
    pub fn emoji(emoji: Arc<Emoji>, style: Style) -> Self {
        Self::Emoji(EmojiSpan { emoji, style })
    }

    /// Length in cursor units: grapheme clusters for text, 1 for an emoji.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text(span) => grapheme_count(&span.text),
            Self::Emoji(_) => 1,
        }
    }

    /// Check if this is a text span without text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(span) if span.text.is_empty())
    }

    /// Rendering style.
    #[must_use]
    pub fn style(&self) -> &Style {
        match self {
            Self::Text(span) => &span.style,
            Self::Emoji(span) => &span.style,
        }
    }

    /// Replace the rendering style.
    pub fn set_style(&mut self, style: Style) {
        match self {
            Self::Text(span) => span.style = style,
            Self::Emoji(span) => span.style = style,
        }
    }

    /// The text of a text span.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(span) => Some(&span.text),
            Self::Emoji(_) => None,
        }
    }

    /// The emoji of an emoji span.
    #[must_use]
    pub fn as_emoji(&self) -> Option<&Arc<Emoji>> {
        match self {
            Self::Text(_) => None,
            Self::Emoji(span) => Some(&span.emoji),
        }
    }

    /// Append the placeholder projection of this span.
    pub fn write_placeholder(&self, out: &mut String) {
        match self {
            Self::Text(span) => out.push_str(&span.text),
            Self::Emoji(span) => {
                out.push('[');
                out.push_str(span.emoji.token());
                out.push(']');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smile() -> Arc<Emoji> {
        Arc::new(Emoji::new("smile", "smile.png", "smile.gif").unwrap())
    }

    #[test]
    fn test_span_len() {
        assert_eq!(Span::text("héllo", Style::default()).len(), 5);
        assert_eq!(Span::text("👍🏽", Style::default()).len(), 1);
        assert_eq!(Span::emoji(smile(), Style::default()).len(), 1);
    }

    #[test]
    fn test_span_placeholder() {
        let mut out = String::new();
        Span::text("hi ", Style::default()).write_placeholder(&mut out);
        Span::emoji(smile(), Style::default()).write_placeholder(&mut out);
        assert_eq!(out, "hi [smile]");
    }

    #[test]
    fn test_span_is_empty() {
        assert!(Span::text("", Style::default()).is_empty());
        assert!(!Span::emoji(smile(), Style::default()).is_empty());
    }
}
