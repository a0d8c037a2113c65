//! Criterion comparison of the two dedup strategies across input sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use storefront_core::dedup::{dedup_fast, dedup_naive};

fn input_of(size: usize) -> Vec<i64> {
    // Every value appears about twice.
    (0..size as i64).map(|i| (i * 7919) % (size as i64 / 2 + 1)).collect()
}

fn bench_dedup(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedup");

    for size in [100usize, 1_000, 5_000] {
        let input = input_of(size);

        group.bench_with_input(BenchmarkId::new("naive", size), &input, |b, input| {
            b.iter(|| dedup_naive(black_box(input.as_slice())))
        });
        group.bench_with_input(BenchmarkId::new("fast", size), &input, |b, input| {
            b.iter(|| dedup_fast(black_box(input.as_slice())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dedup);
criterion_main!(benches);
