//! Benchmarks for the rich-text conversion pipeline.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};

use blockshift::{
    Block, BlockStyle, MarkDef, Span, collect_footnotes, convert_str, lexical_to_portable_text,
};

/// Build a synthetic Lexical document with `paragraphs` paragraphs of
/// mixed inline content, plus periodic lists, quotes, and embeds.
fn sample_document(paragraphs: usize) -> Value {
    let mut children = Vec::new();

    for i in 0..paragraphs {
        children.push(json!({
            "type": "paragraph",
            "children": [
                {"type": "text", "text": format!("Paragraph {i} opens with plain prose, "), "format": 0},
                {"type": "text", "text": "turns bold, ", "format": 1},
                {"type": "text", "text": "then italic, ", "format": 2},
                {"type": "link",
                 "fields": {"url": format!("https://example.com/{}", i % 7), "newTab": i % 2 == 0},
                 "children": [{"type": "text", "text": "links out"}]},
                {"type": "linebreak"},
                {"type": "text", "text": "and closes with code.", "format": 16}
            ]
        }));

        if i % 5 == 0 {
            children.push(json!({
                "type": "list",
                "listType": if i % 10 == 0 { "number" } else { "bullet" },
                "children": [
                    {"type": "listitem", "children": [{"type": "text", "text": "first item"}]},
                    {"type": "listitem", "indent": 1, "children": [{"type": "text", "text": "nested item"}]}
                ]
            }));
        }
        if i % 11 == 0 {
            children.push(json!({
                "type": "quote",
                "children": [{"type": "text", "text": "A quotation worth keeping."}]
            }));
        }
        if i % 13 == 0 {
            children.push(json!({
                "type": "block",
                "fields": {"media": {"filename": format!("figure-{i}.png")}}
            }));
        }
    }

    json!({"root": {"children": children}})
}

/// Build a block sequence where every block references its own footnote
/// definition, for exercising the collection pass.
fn footnote_blocks(count: usize) -> Vec<Block> {
    (0..count)
        .map(|i| Block {
            key: format!("block-{i}"),
            style: BlockStyle::Normal,
            list_item: None,
            level: None,
            children: vec![Span {
                key: format!("span-{i}"),
                text: format!("Sentence {i} with a reference."),
                marks: vec![format!("fn-{i}")],
            }],
            mark_defs: vec![MarkDef::Footnote {
                key: format!("fn-{i}"),
                note: vec![Block {
                    key: format!("note-{i}"),
                    style: BlockStyle::Normal,
                    list_item: None,
                    level: None,
                    children: vec![Span {
                        key: format!("note-span-{i}"),
                        text: format!("Endnote body {i}."),
                        marks: Vec::new(),
                    }],
                    mark_defs: Vec::new(),
                }],
            }],
        })
        .collect()
}

// ============================================================================
// Conversion Benchmarks
// ============================================================================

fn bench_convert_small(c: &mut Criterion) {
    let doc = sample_document(10);
    c.bench_function("convert_small", |b| {
        b.iter(|| lexical_to_portable_text(black_box(&doc), "bench"));
    });
}

fn bench_convert_large(c: &mut Criterion) {
    let doc = sample_document(500);
    c.bench_function("convert_large", |b| {
        b.iter(|| lexical_to_portable_text(black_box(&doc), "bench"));
    });
}

fn bench_convert_from_str(c: &mut Criterion) {
    let json = sample_document(100).to_string();
    c.bench_function("convert_from_str", |b| {
        b.iter(|| convert_str(black_box(&json), "bench").unwrap());
    });
}

// ============================================================================
// Footnote Collection Benchmarks
// ============================================================================

fn bench_collect_footnotes(c: &mut Criterion) {
    let blocks = footnote_blocks(200);
    c.bench_function("collect_footnotes", |b| {
        b.iter(|| collect_footnotes(black_box(&blocks), "bench"));
    });
}

criterion_group!(
    benches,
    bench_convert_small,
    bench_convert_large,
    bench_convert_from_str,
    bench_collect_footnotes
);
criterion_main!(benches);
