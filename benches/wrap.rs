//! Word-wrap benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use glyph_grid::core::wrap;

fn bench_wrap_prose(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");

    let prose = "The quick brown fox jumps over the lazy dog. ".repeat(200);
    group.throughput(Throughput::Bytes(prose.len() as u64));

    group.bench_function("prose_40", |b| {
        b.iter(|| black_box(wrap::split(black_box(&prose), 40)))
    });

    group.bench_function("prose_8", |b| {
        b.iter(|| black_box(wrap::split(black_box(&prose), 8)))
    });

    group.finish();
}

fn bench_wrap_separators(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");

    // Hyphenated and comma-separated runs with few spaces
    let dense = "alpha-beta,gamma.delta;epsilon:zeta/eta ".repeat(200);
    group.throughput(Throughput::Bytes(dense.len() as u64));

    group.bench_function("separators", |b| {
        b.iter(|| black_box(wrap::split(black_box(&dense), 12)))
    });

    group.finish();
}

fn bench_wrap_unbreakable(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");

    let word = "x".repeat(4000);
    group.throughput(Throughput::Bytes(word.len() as u64));

    group.bench_function("unbreakable", |b| {
        b.iter(|| black_box(wrap::split(black_box(&word), 16)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_wrap_prose,
    bench_wrap_separators,
    bench_wrap_unbreakable
);
criterion_main!(benches);
