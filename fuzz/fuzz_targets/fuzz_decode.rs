//! Fuzz target for placeholder decoding and rich text edits.
//!
//! Decoding must be lossless for any input, and edits at arbitrary offsets
//! must either succeed or return an error without panicking.

#![no_main]

use arbitrary::Arbitrary;
use emoji_text::{Emoji, EmojiCatalog, PlaceholderCodec};
use libfuzzer_sys::fuzz_target;
use std::sync::{Arc, LazyLock};

static CODEC: LazyLock<PlaceholderCodec> = LazyLock::new(|| {
    let catalog = EmojiCatalog::from_emojis(
        ["smile", "cry", "笑", "a"]
            .into_iter()
            .map(|token| Emoji::new(token, "x.png", "x.gif").expect("valid token")),
    )
    .expect("unique tokens");
    PlaceholderCodec::new(Arc::new(catalog))
});

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    text: &'a str,
    at: usize,
    end: usize,
    insert: &'a str,
    limit: usize,
}

fuzz_target!(|input: Input<'_>| {
    let codec = &*CODEC;
    let mut rich = codec.decode(input.text);
    assert_eq!(codec.encode(&rich), input.text);

    let len = rich.len();
    let _ = rich.substring(input.at..input.end);
    let _ = rich.insert_text(input.insert, input.at);
    let _ = rich.delete_range(input.at..input.end);
    if rich.apply_length_limit(input.limit % (len + 1)) {
        assert!(!rich.apply_length_limit(input.limit % (len + 1)));
    }
});
