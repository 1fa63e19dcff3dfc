//! Emoji keyboard input targets.
//!
//! A keyboard can drive two kinds of text input: ones that hold rich text
//! and take emoji directly, and ones that only hold placeholder text. The
//! caller says which one it has by wrapping it in an [`InputTarget`], and
//! [`dispatch`] routes a [`KeyboardAction`] accordingly.

use crate::catalog::Emoji;
use crate::error::{Error, Result};
use crate::text::EditSession;
use std::ops::Range;
use std::sync::Arc;

/// An input that stores rich text and accepts emoji spans.
pub trait RichTextInput {
    /// Replace the selection with an emoji.
    fn insert_emoji(&mut self, emoji: Arc<Emoji>) -> Result<()>;

    /// Delete the selection or the unit before the caret.
    fn delete_backward(&mut self) -> Result<bool>;

    /// Insert a line break.
    fn insert_newline(&mut self) -> Result<()>;
}

/// An input that only stores placeholder text.
pub trait PlainTextInput {
    /// Replace the selection with `text`. Returns `false` if the input
    /// rejected the change.
    fn replace_selection(&mut self, text: &str) -> bool;

    /// Delete the selection or the character before the caret.
    fn delete_backward(&mut self) -> bool;
}

/// The input a keyboard action is sent to.
pub enum InputTarget<'a> {
    Rich(&'a mut dyn RichTextInput),
    Plain(&'a mut dyn PlainTextInput),
}

/// A key on the emoji keyboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyboardAction {
    /// An emoji cell was tapped.
    Emoji(Arc<Emoji>),
    /// The delete key.
    Backspace,
    /// The return key.
    Return,
}

impl KeyboardAction {
    /// Get the emoji if this is an emoji tap.
    #[must_use]
    pub fn emoji(&self) -> Option<&Arc<Emoji>> {
        match self {
            Self::Emoji(emoji) => Some(emoji),
            _ => None,
        }
    }
}

/// Apply a keyboard action to an input.
///
/// Plain inputs receive emoji as `[token]` text. Returns whether the input
/// changed.
pub fn dispatch(target: InputTarget<'_>, action: &KeyboardAction) -> Result<bool> {
    match target {
        InputTarget::Rich(input) => match action {
            KeyboardAction::Emoji(emoji) => input.insert_emoji(Arc::clone(emoji)).map(|()| true),
            KeyboardAction::Backspace => input.delete_backward(),
            KeyboardAction::Return => input.insert_newline().map(|()| true),
        },
        InputTarget::Plain(input) => {
            let changed = match action {
                KeyboardAction::Emoji(emoji) => input.replace_selection(&emoji.placeholder()),
                KeyboardAction::Backspace => input.delete_backward(),
                KeyboardAction::Return => input.replace_selection("\n"),
            };
            if !changed {
                tracing::trace!(?action, "plain input rejected keyboard action");
            }
            Ok(changed)
        }
    }
}

impl RichTextInput for EditSession {
    fn insert_emoji(&mut self, emoji: Arc<Emoji>) -> Result<()> {
        Self::insert_emoji(self, emoji)
    }

    fn delete_backward(&mut self) -> Result<bool> {
        self.backspace()
    }

    fn insert_newline(&mut self) -> Result<()> {
        Self::insert_newline(self)
    }
}

/// A single-line style text field holding placeholder text.
///
/// Offsets are `char` indices. An optional maximum length makes
/// [`replace_selection`](PlainTextInput::replace_selection) refuse edits
/// that would exceed it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlainTextField {
    text: String,
    selection: Range<usize>,
    max_chars: Option<usize>,
}

impl PlainTextField {
    /// Create an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field holding `text`, caret at the end.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let end = text.chars().count();
        Self {
            text: text.to_string(),
            selection: end..end,
            max_chars: None,
        }
    }

    /// Refuse edits that would grow the text past `max_chars` characters.
    #[must_use]
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = Some(max_chars);
        self
    }

    /// The placeholder text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Select a `char` range.
    pub fn select(&mut self, range: Range<usize>) -> Result<()> {
        let len = self.text.chars().count();
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

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(idx, _)| idx)
    }

    fn replace_chars(&mut self, range: Range<usize>, text: &str) {
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);
        self.text.replace_range(start..end, text);
        let caret = range.start + text.chars().count();
        self.selection = caret..caret;
    }
}

impl PlainTextInput for PlainTextField {
    fn replace_selection(&mut self, text: &str) -> bool {
        if let Some(max) = self.max_chars {
            let len = self.text.chars().count() - self.selection.len() + text.chars().count();
            if len > max {
                return false;
            }
        }
        self.replace_chars(self.selection.clone(), text);
        true
    }

    fn delete_backward(&mut self) -> bool {
        let range = if self.selection.is_empty() {
            match self.selection.start.checked_sub(1) {
                Some(start) => start..self.selection.start,
                None => return false,
            }
        } else {
            self.selection.clone()
        };
        self.replace_chars(range, "");
        true
    }
}
