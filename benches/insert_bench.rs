//! Insertion benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use parity_avl::BalancedTree;

/// Deterministic key stream mixing both parities (xorshift).
fn keys(count: usize) -> Vec<i64> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 1_000_000) as i64
        })
        .collect()
}

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for count in [1_000usize, 10_000, 100_000] {
        let input = keys(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
            b.iter(|| {
                let tree: BalancedTree = input.iter().copied().collect();
                black_box(tree.height())
            });
        });
    }
    group.finish();
}

fn benchmark_post_order(c: &mut Criterion) {
    let tree: BalancedTree = keys(100_000).into_iter().collect();
    c.bench_function("post_order_100000", |b| {
        b.iter(|| black_box(tree.post_order().sum::<i64>()));
    });
}

criterion_group!(benches, benchmark_insert, benchmark_post_order);
criterion_main!(benches);
