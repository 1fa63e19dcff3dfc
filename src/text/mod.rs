//! Rich text: the span model and editing on top of it.
//!
//! Key types:
//!
//! - [`Span`]: a run of plain text or a single inline emoji
//! - [`RichText`]: an ordered span list measured in cursor units
//! - [`EditSession`]: a rich text input with selection, style and length limit
//! - [`RichTextInput`] / [`PlainTextInput`]: what an emoji keyboard can drive
//!
//! # Cursor units
//!
//! Offsets and lengths count one unit per grapheme cluster of plain text and
//! one unit per emoji, whatever the length of its `[token]` placeholder.
//!
//! ```
//! use emoji_text::{Emoji, RichText, Span, Style};
//! use std::sync::Arc;
//!
//! let smile = Arc::new(Emoji::new("smile", "smile.png", "smile.gif")?);
//! let text = RichText::from_spans([
//!     Span::text("ok ", Style::default()),
//!     Span::emoji(smile, Style::default()),
//! ]);
//! assert_eq!(text.len(), 4);
//! assert_eq!(text.encoded_len(), 10);
//! # Ok::<(), emoji_text::Error>(())
//! ```

mod edit;
mod input;
mod rich;
mod span;

pub use edit::EditSession;
pub use input::{
    InputTarget, KeyboardAction, PlainTextField, PlainTextInput, RichTextInput, dispatch,
};
pub use rich::{RichText, Unit};
pub use span::{EmojiSpan, Span, TextSpan};
