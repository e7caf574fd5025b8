//! Benchmarks for shaping, wrapping and report assembly.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ocrpdf::model::Document;
use ocrpdf::{assemble, shape, wrap};

const LATIN: &str = "The quick brown fox jumps over the lazy dog while the scanner hums. ";
const PERSIAN: &str = "این یک متن آزمایشی برای سنجش سرعت شکل‌دهی و چیدمان صفحه است. ";

fn sample(paragraph: &str, paragraphs: usize) -> String {
    (0..paragraphs)
        .map(|_| paragraph.repeat(6))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn bench_wrap(c: &mut Criterion) {
    let text = sample(LATIN, 50);
    let mut group = c.benchmark_group("wrap");
    for max_chars in [40, 80, 120] {
        group.bench_with_input(BenchmarkId::from_parameter(max_chars), &max_chars, |b, &max| {
            b.iter(|| wrap(black_box(&text), max))
        });
    }
    group.finish();
}

fn bench_shape(c: &mut Criterion) {
    let text = sample(PERSIAN, 20);
    c.bench_function("shape_persian", |b| b.iter(|| shape(black_box(&text), true)));
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    for docs in [1, 10, 50] {
        let batch = Document::batch((0..docs).map(|i| (format!("{}.pdf", i), sample(LATIN, 10))));
        group.bench_with_input(BenchmarkId::new("latin", docs), &batch, |b, batch| {
            b.iter(|| assemble(black_box(batch), false))
        });

        let batch =
            Document::batch((0..docs).map(|i| (format!("{}.pdf", i), sample(PERSIAN, 10))));
        group.bench_with_input(BenchmarkId::new("persian", docs), &batch, |b, batch| {
            b.iter(|| assemble(black_box(batch), true))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_wrap, bench_shape, bench_assemble);
criterion_main!(benches);
