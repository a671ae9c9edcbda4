//! Benchmarks for paragraph balancing and document rendering.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vimhelp::render::{balance, tokenize, BalanceOptions};
use vimhelp::{Block, DefinitionItem, Document, Inline, RenderOptions};

const SENTENCE: &str = "The quick brown fox jumps over the lazy dog while `inline code` \
                        stays on one line and words of varying length fill the paragraph. ";

/// Creates paragraph text with the given number of sentences.
fn create_text(sentences: usize) -> String {
    SENTENCE.repeat(sentences)
}

/// Creates a document mixing the block types that need layout work.
fn create_document(sections: usize) -> Document {
    let mut doc = Document::new();
    for i in 0..sections {
        doc.add_block(Block::heading(2, &format!("Section {}", i + 1)));
        doc.add_block(Block::para(&create_text(4)));
        doc.add_block(Block::BulletList(vec![
            vec![Block::plain(&create_text(1))],
            vec![
                Block::para(&create_text(2)),
                Block::code(Some("lua"), "local x = require('plugin')\nx.setup()\n"),
            ],
        ]));
        doc.add_block(Block::DefinitionList(vec![
            DefinitionItem::new(Inline::words("option"), vec![Block::para(&create_text(2))]),
            DefinitionItem::new(
                Inline::words("another_option"),
                vec![Block::para(&create_text(1))],
            ),
        ]));
    }
    doc
}

/// Benchmark balancing at various paragraph sizes.
fn bench_balance(c: &mut Criterion) {
    let mut group = c.benchmark_group("balance");

    for sentences in [1, 10, 50].iter() {
        let tokens = tokenize(&create_text(*sentences));
        let options = BalanceOptions::new().ignoring_last();

        group.bench_function(format!("{}_tokens", tokens.len()), |b| {
            b.iter(|| balance(black_box(&tokens), 78, &options));
        });
    }

    group.finish();
}

/// Benchmark tokenizing with code spans.
fn bench_tokenize(c: &mut Criterion) {
    let text = create_text(50);
    c.bench_function("tokenize", |b| {
        b.iter(|| tokenize(black_box(&text)));
    });
}

/// Benchmark whole-document rendering.
fn bench_render(c: &mut Criterion) {
    let doc = create_document(20);
    let options = RenderOptions::default();
    c.bench_function("render_document", |b| {
        b.iter(|| vimhelp::render(black_box(&doc), &options).unwrap());
    });
}

criterion_group!(benches, bench_balance, bench_tokenize, bench_render);
criterion_main!(benches);
