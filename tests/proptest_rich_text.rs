//! Property-based tests for rich text editing invariants.
//!
//! Text pieces are ASCII so grapheme clusters never join across span seams.

mod common;

use common::{TOKENS, catalog, style};
use emoji_text::{Font, RichText, Span, Style};
use proptest::prelude::*;
use std::sync::Arc;

// ============================================================================
// Strategies
// ============================================================================

#[derive(Clone, Debug)]
enum Piece {
    Text(String),
    Emoji(usize),
}

fn piece() -> impl Strategy<Value = Piece> {
    prop_oneof![
        3 => "[a-zA-Z0-9 \\n]{1,8}".prop_map(Piece::Text),
        1 => (0..TOKENS.len()).prop_map(Piece::Emoji),
    ]
}

fn rich_text() -> impl Strategy<Value = RichText> {
    prop::collection::vec(piece(), 0..16).prop_map(|pieces| {
        let catalog = catalog();
        RichText::from_spans(pieces.into_iter().map(|p| match p {
            Piece::Text(text) => Span::text(text, style()),
            Piece::Emoji(idx) => Span::emoji(Arc::clone(&catalog.all()[idx]), style()),
        }))
    })
}

/// Rich text plus a valid range into it.
fn with_range() -> impl Strategy<Value = (RichText, usize, usize)> {
    rich_text().prop_flat_map(|text| {
        let len = text.len();
        (Just(text), 0..=len, 0..=len).prop_map(|(t, a, b)| (t, a.min(b), a.max(b)))
    })
}

// ============================================================================
// Length limit
// ============================================================================

proptest! {
    /// After limiting, length is exactly min(len, limit) and a second pass is a no-op.
    #[test]
    fn length_limit_is_exact_and_idempotent(text in rich_text(), limit in 0usize..40) {
        let mut limited = text.clone();
        let changed = limited.apply_length_limit(limit);
        prop_assert_eq!(changed, text.len() > limit);
        prop_assert_eq!(limited.len(), text.len().min(limit));

        let once = limited.clone();
        prop_assert!(!limited.apply_length_limit(limit));
        prop_assert_eq!(limited, once);
    }

    /// Limiting keeps a prefix of the placeholder text.
    #[test]
    fn length_limit_keeps_prefix(text in rich_text(), limit in 0usize..40) {
        let mut limited = text.clone();
        limited.apply_length_limit(limit);
        prop_assert!(text.to_string().starts_with(&limited.to_string()));
    }
}

// ============================================================================
// Substring / delete / insert
// ============================================================================

proptest! {
    /// Splitting at any offset and concatenating restores the content.
    #[test]
    fn substring_halves_concat((text, at, _) in with_range()) {
        let len = text.len();
        let head = text.substring(0..at).unwrap();
        let tail = text.substring(at..len).unwrap();
        prop_assert_eq!(head.len(), at);
        prop_assert!(head.concat(&tail).content_eq(&text));
        prop_assert_eq!(head.concat(&tail), text);
    }

    /// Deleting a range removes exactly that many units, and re-inserting the
    /// removed substring restores the content.
    #[test]
    fn delete_then_reinsert((text, start, end) in with_range()) {
        let removed = text.substring(start..end).unwrap();
        let mut edited = text.clone();
        edited.delete_range(start..end).unwrap();
        prop_assert_eq!(edited.len(), text.len() - (end - start));

        edited.insert_rich(&removed, start).unwrap();
        prop_assert!(edited.content_eq(&text));
    }

    /// Out-of-range edits are errors and leave the text untouched.
    #[test]
    fn out_of_range_is_rejected(text in rich_text(), extra in 1usize..5) {
        let len = text.len();
        let mut edited = text.clone();
        prop_assert!(edited.delete_range(0..len + extra).is_err());
        prop_assert!(edited.insert_text("x", len + extra).is_err());
        prop_assert!(edited.substring(len..len + extra).is_err());
        prop_assert_eq!(edited, text);
    }

    /// Emoji insertion adds exactly one unit at the offset.
    #[test]
    fn insert_emoji_adds_one_unit((text, at, _) in with_range(), idx in 0..TOKENS.len()) {
        let emoji = Arc::clone(&catalog().all()[idx]);
        let mut edited = text.clone();
        edited.insert_emoji(Arc::clone(&emoji), at).unwrap();
        prop_assert_eq!(edited.len(), text.len() + 1);
        prop_assert_eq!(edited.emoji_count(), text.emoji_count() + 1);
        let inserted = edited.substring(at..at + 1).unwrap();
        prop_assert_eq!(inserted.single_emoji().map(|e| e.token()), Some(emoji.token()));
    }

    /// Restyling never changes span boundaries or emoji identities.
    #[test]
    fn apply_style_keeps_structure(text in rich_text(), size in 8.0f32..40.0) {
        let restyle = Style::new(Font::system(size));
        let mut styled = text.clone();
        styled.apply_style(&restyle);
        prop_assert_eq!(styled.spans().len(), text.spans().len());
        prop_assert!(styled.content_eq(&text));
        prop_assert!(styled.spans().iter().all(|s| *s.style() == restyle));
    }
}
