//! Benchmarks for the analysis pipeline.
//!
//! Scoring is quadratic in sentence count, so sizes are given in sentences.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dupesense::{dice_coefficient, segment, Optimizer};

fn sample_text(sentences: usize) -> String {
    // Realistic prose with a repeat every few sentences
    let pool = [
        "The quick brown fox jumps over the lazy dog. ",
        "Pack my box with five dozen liquor jugs. ",
        "How vexingly quick daft zebras jump! ",
        "The five boxing wizards jump quickly. ",
        "Sphinx of black quartz, judge my vow. ",
        "The quick brown fox jumped over a lazy dog. ",
        "Pack my box with five dozen liquor jugs. ",
    ];
    (0..sentences).map(|i| pool[i % pool.len()]).collect()
}

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");

    for n in [10, 100, 1_000] {
        let text = sample_text(n);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("segment", n), &text, |b, text| {
            b.iter(|| segment(black_box(text)))
        });
    }

    group.finish();
}

fn bench_dice(c: &mut Criterion) {
    c.bench_function("dice_coefficient", |b| {
        b.iter(|| {
            dice_coefficient(
                black_box("the quick brown fox jumps over the lazy dog"),
                black_box("the quick brown fox jumped over a lazy dog"),
            )
        })
    });
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let optimizer = Optimizer::new();

    for n in [10, 50, 200] {
        let text = sample_text(n);
        // n(n-1)/2 comparisons per run
        group.throughput(Throughput::Elements((n * (n - 1) / 2) as u64));
        group.bench_with_input(BenchmarkId::new("analyze", n), &text, |b, text| {
            b.iter(|| optimizer.analyze(black_box(text)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_segment, bench_dice, bench_analyze);
criterion_main!(benches);
