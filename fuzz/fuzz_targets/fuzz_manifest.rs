//! Fuzz target for emoji manifest parsing.
//!
//! Arbitrary bytes must produce a catalog or an error, never a panic, and
//! every loaded token must decode back to its emoji.

#![no_main]

use emoji_text::{EmojiCatalog, PlaceholderCodec};
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    let Ok(catalog) = EmojiCatalog::from_reader(data) else {
        return;
    };
    let codec = PlaceholderCodec::new(Arc::new(catalog));
    for emoji in codec.catalog().all() {
        let decoded = codec.decode(&emoji.placeholder());
        assert_eq!(decoded.single_emoji().map(|e| e.token()), Some(emoji.token()));
    }
});
