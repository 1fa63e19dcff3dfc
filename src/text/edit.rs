//! Editing session over rich text.
//!
//! This module provides [`EditSession`], which owns the [`RichText`] behind
//! one text input together with its selection, typing style, length limit
//! and IME composing state.
//!
//! # Examples
//!
//! ```
//! use emoji_text::{EditSession, Emoji, EmojiCatalog, PlaceholderCodec};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(EmojiCatalog::from_emojis([Emoji::new("smile", "s.png", "s.gif")?])?);
//! let smile = Arc::clone(catalog.lookup("smile").unwrap());
//! let mut session = EditSession::new(PlaceholderCodec::new(catalog));
//!
//! session.insert_text("hi ")?;
//! session.insert_emoji(smile)?;
//! assert_eq!(session.caret(), 4);
//! assert_eq!(session.plain_text(), "hi [smile]");
//!
//! // Backspace removes the whole emoji.
//! session.backspace()?;
//! assert_eq!(session.plain_text(), "hi");
//! # Ok::<(), emoji_text::Error>(())
//! ```

use crate::catalog::Emoji;
use crate::codec::PlaceholderCodec;
use crate::config::EmojiTextConfig;
use crate::error::{Error, Result};
use crate::style::Style;
use crate::text::{RichText, Span};
use std::ops::Range;
use std::sync::Arc;

/// Rich text being edited, with selection and typing state.
///
/// Offsets are cursor units. The selection is a range; when it is empty it
/// is the caret. Every edit replaces the selection and leaves an empty
/// selection after the inserted content.
///
/// # Length limit
///
/// With a limit set, trailing content beyond it is cut after each edit,
/// counting an emoji as one unit. While an IME is composing the limit is
/// not enforced; it is applied when composing ends.
#[derive(Clone, Debug)]
pub struct EditSession {
    text: RichText,
    selection: Range<usize>,
    style: Style,
    length_limit: Option<usize>,
    composing: bool,
    codec: PlaceholderCodec,
}

impl EditSession {
    /// Create an empty session typing in the codec's style.
    #[must_use]
    pub fn new(codec: PlaceholderCodec) -> Self {
        Self {
            text: RichText::new(),
            selection: 0..0,
            style: *codec.style(),
            length_limit: None,
            composing: false,
            codec,
        }
    }

    /// Create an empty session with the configured style and length limit.
    #[must_use]
    pub fn from_config(codec: PlaceholderCodec, config: &EmojiTextConfig) -> Self {
        let mut session = Self::new(codec);
        session.style = config.default_style();
        session.length_limit = config.length_limit;
        session
    }

    /// Replace the whole content with decoded placeholder text, caret at the end.
    pub fn set_placeholder_text(&mut self, text: &str) {
        self.text = self.codec.decode_styled(text, &self.style);
        let end = self.text.len();
        self.selection = end..end;
        self.enforce_limit();
    }

    /// The content.
    #[must_use]
    pub fn text(&self) -> &RichText {
        &self.text
    }

    /// The codec used for copy and paste.
    #[must_use]
    pub fn codec(&self) -> &PlaceholderCodec {
        &self.codec
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Caret position (the end of the selection).
    #[must_use]
    pub fn caret(&self) -> usize {
        self.selection.end
    }

    /// Select `range`; an empty range places the caret.
    pub fn select(&mut self, range: Range<usize>) -> Result<()> {
        let len = self.text.len();
        if range.start > range.end || range.end > len {
            return Err(Error::InvalidRange {
                start: range.start,
                end: range.end,
                len,
            });
        }
        self.selection = range;
        Ok(())
    }

    /// Place the caret at `offset`.
    pub fn set_caret(&mut self, offset: usize) -> Result<()> {
        self.select(offset..offset)
    }

    /// Typing style.
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Change the typing style and restyle existing content.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
        self.text.apply_style(&style);
        self.enforce_limit();
    }

    /// Current length limit.
    #[must_use]
    pub fn length_limit(&self) -> Option<usize> {
        self.length_limit
    }

    /// Set or clear the length limit, enforcing it immediately.
    pub fn set_length_limit(&mut self, limit: Option<usize>) {
        self.length_limit = limit;
        self.enforce_limit();
    }

    /// Check if an IME is composing.
    #[must_use]
    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Start or end IME composition. Ending it applies the length limit.
    pub fn set_composing(&mut self, composing: bool) {
        self.composing = composing;
        if !composing {
            self.enforce_limit();
        }
    }

    /// Replace the selection with an emoji in the typing style.
    pub fn insert_emoji(&mut self, emoji: Arc<Emoji>) -> Result<()> {
        let mut insert = RichText::new();
        insert.push(Span::emoji(emoji, self.style));
        self.replace_selection(&insert)
    }

    /// Replace the selection with literal text in the typing style.
    pub fn insert_text(&mut self, text: &str) -> Result<()> {
        self.replace_selection(&RichText::plain(text, self.style))
    }

    /// Insert a line break (the keyboard's return key).
    pub fn insert_newline(&mut self) -> Result<()> {
        self.insert_text("\n")
    }

    /// Delete the selection, or the unit before the caret.
    ///
    /// Returns `false` when there was nothing to delete.
    pub fn backspace(&mut self) -> Result<bool> {
        let range = if self.selection.is_empty() {
            match self.selection.start.checked_sub(1) {
                Some(start) => start..self.selection.start,
                None => return Ok(false),
            }
        } else {
            self.selection.clone()
        };
        self.text.delete_range(range.clone())?;
        self.selection = range.start..range.start;
        Ok(true)
    }

    /// Placeholder text of the selection.
    pub fn copy(&self) -> Result<String> {
        let selected = self.text.substring(self.selection.clone())?;
        Ok(self.codec.encode(&selected))
    }

    /// Copy the selection, then delete it.
    pub fn cut(&mut self) -> Result<String> {
        let copied = self.copy()?;
        if !self.selection.is_empty() {
            self.backspace()?;
        }
        Ok(copied)
    }

    /// Decode placeholder text in the typing style and replace the selection
    /// with it. The caret ends up after the pasted content.
    pub fn paste(&mut self, text: &str) -> Result<()> {
        let decoded = self.codec.decode_styled(text, &self.style);
        self.replace_selection(&decoded)
    }

    /// Placeholder text of the whole content, trimmed of surrounding
    /// whitespace and newlines (what gets stored or sent).
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.codec.encode(&self.text).trim().to_string()
    }

    fn replace_selection(&mut self, insert: &RichText) -> Result<()> {
        let range = self.selection.clone();
        self.text.delete_range(range.clone())?;
        let before = self.text.len();
        self.text.insert_rich(insert, range.start)?;
        // Graphemes can join across the seam.
        let caret = (range.start + self.text.len().saturating_sub(before)).min(self.text.len());
        self.selection = caret..caret;
        self.enforce_limit();
        Ok(())
    }

    fn enforce_limit(&mut self) {
        if self.composing {
            return;
        }
        let Some(limit) = self.length_limit else {
            return;
        };
        if self.text.apply_length_limit(limit) {
            tracing::debug!(limit, "edit exceeded length limit");
            let len = self.text.len();
            self.selection = self.selection.start.min(len)..self.selection.end.min(len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmojiCatalog;
    use crate::style::Font;

    fn codec() -> PlaceholderCodec {
        let catalog = EmojiCatalog::from_emojis([
            Emoji::new("smile", "smile.png", "smile.gif").unwrap(),
            Emoji::new("cry", "cry.png", "cry.gif").unwrap(),
        ])
        .unwrap();
        PlaceholderCodec::new(Arc::new(catalog))
    }

    fn emoji(session: &EditSession, token: &str) -> Arc<Emoji> {
        Arc::clone(session.codec().catalog().lookup(token).unwrap())
    }

    #[test]
    fn test_insert_moves_caret() {
        let mut session = EditSession::new(codec());
        session.insert_text("ab").unwrap();
        let smile = emoji(&session, "smile");
        session.insert_emoji(smile).unwrap();
        session.insert_text("c").unwrap();
        assert_eq!(session.caret(), 4);
        assert_eq!(session.text().len(), 4);
        assert_eq!(session.plain_text(), "ab[smile]c");
    }

    #[test]
    fn test_insert_at_caret() {
        let mut session = EditSession::new(codec());
        session.insert_text("ac").unwrap();
        session.set_caret(1).unwrap();
        session.insert_text("b").unwrap();
        assert_eq!(session.plain_text(), "abc");
        assert_eq!(session.caret(), 2);
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut session = EditSession::new(codec());
        session.set_placeholder_text("hello world");
        session.select(0..5).unwrap();
        let cry = emoji(&session, "cry");
        session.insert_emoji(cry).unwrap();
        assert_eq!(session.plain_text(), "[cry] world");
        assert_eq!(session.selection(), 1..1);
    }

    #[test]
    fn test_backspace() {
        let mut session = EditSession::new(codec());
        assert!(!session.backspace().unwrap());

        session.set_placeholder_text("a[smile]");
        assert!(session.backspace().unwrap());
        assert_eq!(session.plain_text(), "a");

        session.set_placeholder_text("abcd");
        session.select(1..3).unwrap();
        assert!(session.backspace().unwrap());
        assert_eq!(session.plain_text(), "ad");
        assert_eq!(session.caret(), 1);
    }

    #[test]
    fn test_newline() {
        let mut session = EditSession::new(codec());
        session.insert_text("a").unwrap();
        session.insert_newline().unwrap();
        assert!(session.text().ends_with_line_break());
        assert_eq!(session.caret(), 2);
        // Surrounding newlines are trimmed from the stored form.
        assert_eq!(session.plain_text(), "a");
    }

    #[test]
    fn test_copy_cut_paste() {
        let mut session = EditSession::new(codec());
        session.set_placeholder_text("x[smile]y[cry]");
        session.select(1..3).unwrap();
        assert_eq!(session.copy().unwrap(), "[smile]y");

        let cut = session.cut().unwrap();
        assert_eq!(cut, "[smile]y");
        assert_eq!(session.plain_text(), "x[cry]");
        assert_eq!(session.caret(), 1);

        session.set_caret(2).unwrap();
        session.paste(&cut).unwrap();
        assert_eq!(session.plain_text(), "x[cry][smile]y");
        assert_eq!(session.caret(), 4);
        assert_eq!(session.text().emoji_count(), 2);
    }

    #[test]
    fn test_paste_unknown_token_is_literal() {
        let mut session = EditSession::new(codec());
        session.paste("[nope]").unwrap();
        assert_eq!(session.text().emoji_count(), 0);
        assert_eq!(session.caret(), 6);
    }

    #[test]
    fn test_paste_uses_session_style() {
        let mut session = EditSession::new(codec());
        let style = Style::new(Font::system(22.0));
        session.set_style(style);
        session.paste("a[smile]").unwrap();
        assert!(session.text().spans().iter().all(|s| *s.style() == style));
    }

    #[test]
    fn test_set_style_restyles_content() {
        let mut session = EditSession::new(codec());
        session.set_placeholder_text("a[smile]b");
        let spans_before = session.text().spans().len();
        let style = Style::builder().font(Font::system(30.0)).bold().build();
        session.set_style(style);
        assert_eq!(session.text().spans().len(), spans_before);
        assert!(session.text().spans().iter().all(|s| *s.style() == style));
    }

    #[test]
    fn test_length_limit() {
        let mut session = EditSession::new(codec());
        session.set_length_limit(Some(3));
        session.insert_text("ab").unwrap();
        let smile = emoji(&session, "smile");
        session.insert_emoji(Arc::clone(&smile)).unwrap();
        session.insert_emoji(smile).unwrap();
        assert_eq!(session.plain_text(), "ab[smile]");
        assert_eq!(session.caret(), 3);
    }

    #[test]
    fn test_length_limit_deferred_while_composing() {
        let mut session = EditSession::new(codec());
        session.set_length_limit(Some(4));
        session.set_composing(true);
        session.insert_text("abcdef").unwrap();
        assert_eq!(session.text().len(), 6);

        session.set_composing(false);
        assert_eq!(session.plain_text(), "abcd");
        assert_eq!(session.caret(), 4);
    }

    #[test]
    fn test_from_config() {
        let config = EmojiTextConfig {
            length_limit: Some(5),
            default_font_size: 12.0,
            ..EmojiTextConfig::default()
        };
        let mut session = EditSession::from_config(codec(), &config);
        assert_eq!(session.length_limit(), Some(5));
        assert!((session.style().font.size - 12.0).abs() < f32::EPSILON);
        session.paste("hello world").unwrap();
        assert_eq!(session.plain_text(), "hello");
    }

    #[test]
    fn test_select_out_of_bounds() {
        let mut session = EditSession::new(codec());
        session.set_placeholder_text("ab");
        assert!(matches!(
            session.select(1..3),
            Err(Error::InvalidRange { len: 2, .. })
        ));
        assert!(session.select(2..1).is_err());
    }
}
