//! `emoji_text` - Rich text with inline emoji and a placeholder codec
//!
//! Text interleaved with inline emoji images is edited and displayed as
//! [`RichText`], and stored or sent as plain text in which each emoji is a
//! `[token]` placeholder. [`PlaceholderCodec`] converts between the two,
//! [`EditSession`] drives editing from an emoji keyboard, and
//! [`fold_to_lines`] truncates text to a line count behind a "more"
//! affordance.
//!
//! # Examples
//!
//! ```
//! use emoji_text::{EmojiCatalog, PlaceholderCodec};
//! use std::sync::Arc;
//!
//! let catalog = EmojiCatalog::from_json_str(
//!     r#"[{ "text": "smile", "resourceName": "smile.png", "dynamicName": "smile.gif" }]"#,
//! )?;
//! let codec = PlaceholderCodec::new(Arc::new(catalog));
//!
//! let text = codec.decode("good morning [smile]");
//! assert_eq!(text.emoji_count(), 1);
//! assert_eq!(codec.encode(&text), "good morning [smile]");
//! # Ok::<(), emoji_text::Error>(())
//! ```

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Intentional float/size casts
#![allow(clippy::cast_precision_loss)] // Intentional for glyph math
#![allow(clippy::module_name_repetitions)] // Allow EmojiCatalog in catalog etc
#![allow(clippy::missing_errors_doc)] // Errors are the crate Error enum
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod catalog;
pub mod codec;
pub mod color;
pub mod config;
pub mod error;
pub mod layout;
pub mod style;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use catalog::{Emoji, EmojiCatalog};
pub use codec::{PlaceholderCodec, PlaceholderMatch};
pub use color::Rgba;
pub use config::EmojiTextConfig;
pub use error::{Error, Result};
pub use style::{Font, Style, TextAttributes};

// Re-export layout types
pub use layout::{GreedyLayout, LineInfo, TextLayout, WrapMode, fold_to_lines};

// Re-export text types
pub use text::{
    EditSession, InputTarget, KeyboardAction, PlainTextField, PlainTextInput, RichText,
    RichTextInput, Span, dispatch,
};
