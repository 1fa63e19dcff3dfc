//! Shared fixtures for integration tests.
//!
//! Every test crate gets the same small emoji catalog, a deterministic
//! layout (10pt per ASCII grapheme, 10.3pt per square emoji) and a tracing
//! subscriber that writes through the test harness.

#![allow(dead_code)]
#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry

use emoji_text::layout::{GlyphCache, GreedyLayout, ImageSize, MonospaceMetrics, UniformImageSource};
use emoji_text::{EmojiCatalog, Font, PlaceholderCodec, Style, WrapMode};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};
use tracing::Level;

/// Tokens in the fixture manifest, in manifest order.
pub const TOKENS: [&str; 4] = ["smile", "cry", "heart", "笑"];

static INIT: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_test_writer()
            .try_init();
    });
}

/// The fixture manifest as JSON.
pub fn manifest_json() -> serde_json::Value {
    serde_json::json!([
        { "text": "smile", "resourceName": "smile.png", "dynamicName": "smile.gif" },
        { "text": "cry", "resourceName": "cry.png", "dynamicName": "cry.gif" },
        { "text": "heart", "resourceName": "heart.png", "dynamicName": "heart.gif" },
        { "text": "笑", "resourceName": "laugh.png", "dynamicName": "laugh.gif" }
    ])
}

/// Write the fixture manifest into `dir` and return its path.
pub fn write_manifest(dir: &Path) -> PathBuf {
    let path = dir.join("emoji.json");
    let json = serde_json::to_string_pretty(&manifest_json()).expect("serialize manifest");
    std::fs::write(&path, json).expect("write manifest");
    path
}

/// The fixture catalog, parsed in memory.
pub fn catalog() -> Arc<EmojiCatalog> {
    let json = manifest_json().to_string();
    Arc::new(EmojiCatalog::from_json_str(&json).expect("fixture manifest"))
}

/// 10pt font with a 10pt line height.
pub fn style() -> Style {
    Style::new(Font::system(10.0).with_line_height(10.0))
}

/// Codec over the fixture catalog decoding in [`style`].
pub fn codec() -> PlaceholderCodec {
    PlaceholderCodec::new(catalog()).with_style(style())
}

/// Deterministic layout for [`style`] text.
pub fn layout(mode: WrapMode) -> GreedyLayout<MonospaceMetrics, UniformImageSource> {
    let glyphs = GlyphCache::new(
        UniformImageSource(ImageSize::new(72.0, 72.0)),
        NonZeroUsize::new(32).expect("non-zero"),
    );
    GreedyLayout::new(MonospaceMetrics::new(1.0), glyphs).with_wrap_mode(mode)
}
