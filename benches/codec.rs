//! Placeholder codec performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use emoji_text::{Emoji, EmojiCatalog, PlaceholderCodec};
use std::hint::black_box;
use std::sync::Arc;

fn catalog(size: usize) -> Arc<EmojiCatalog> {
    let emojis = (0..size).map(|i| {
        Emoji::new(format!("emoji_{i}"), format!("{i}.png"), format!("{i}.gif"))
            .expect("valid token")
    });
    Arc::new(EmojiCatalog::from_emojis(emojis).expect("unique tokens"))
}

fn message(words: usize) -> String {
    (0..words)
        .map(|i| {
            if i % 5 == 0 {
                format!("[emoji_{}]", i % 100)
            } else if i % 17 == 0 {
                "[unknown]".to_string()
            } else {
                "word".to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode(c: &mut Criterion) {
    let codec = PlaceholderCodec::new(catalog(100));
    let mut group = c.benchmark_group("decode");
    for words in [10, 100, 1_000] {
        let text = message(words);
        group.bench_with_input(BenchmarkId::from_parameter(words), &text, |b, text| {
            b.iter(|| codec.decode(black_box(text)));
        });
    }
    group.finish();
}

fn encode(c: &mut Criterion) {
    let codec = PlaceholderCodec::new(catalog(100));
    let mut group = c.benchmark_group("encode");
    for words in [10, 100, 1_000] {
        let rich = codec.decode(&message(words));
        group.bench_with_input(BenchmarkId::from_parameter(words), &rich, |b, rich| {
            b.iter(|| codec.encode(black_box(rich)));
        });
    }
    group.finish();
}

fn catalog_lookup(c: &mut Criterion) {
    let catalog = catalog(1_000);
    c.bench_function("catalog_lookup_hit", |b| {
        b.iter(|| catalog.lookup(black_box("emoji_500")));
    });
    c.bench_function("catalog_lookup_miss", |b| {
        b.iter(|| catalog.lookup(black_box("nope")));
    });
}

criterion_group!(benches, decode, encode, catalog_lookup);
criterion_main!(benches);
