use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ps_interview::dp::linear::{length_of_lis, length_of_lis_quadratic};
use ps_interview::graph::grid::{num_islands_bfs, num_islands_dfs, num_islands_dset};
use ps_interview::hashing::{two_sum_brute, two_sum_hash, two_sum_sorted};
use ps_interview::heap::{kth_largest_heap, kth_largest_select, kth_largest_sort};
use ps_interview::rng::Rng;

fn two_sum(c: &mut Criterion) {
    let mut rng = Rng::new(1);
    let nums = rng.vec_i32(2000, 0..1_000_000);
    // Unreachable target, so every variant scans everything
    let target = -1;

    c.bench_function("two_sum_brute", |b| b.iter(|| two_sum_brute(black_box(&nums), target)));
    c.bench_function("two_sum_hash", |b| b.iter(|| two_sum_hash(black_box(&nums), target)));
    c.bench_function("two_sum_sorted", |b| b.iter(|| two_sum_sorted(black_box(&nums), target)));
}

fn lis(c: &mut Criterion) {
    let mut rng = Rng::new(2);
    let xs = rng.vec_i32(3000, 0..10_000);

    c.bench_function("lis_quadratic", |b| b.iter(|| length_of_lis_quadratic(black_box(&xs))));
    c.bench_function("lis_patience", |b| b.iter(|| length_of_lis(black_box(&xs))));
}

fn kth_largest(c: &mut Criterion) {
    let mut rng = Rng::new(3);
    let xs = rng.vec_i32(100_000, -1_000_000..1_000_000);
    let k = 5000;

    c.bench_function("kth_largest_sort", |b| b.iter(|| kth_largest_sort(black_box(&xs), k)));
    c.bench_function("kth_largest_heap", |b| b.iter(|| kth_largest_heap(black_box(&xs), k)));
    c.bench_function("kth_largest_select", |b| {
        let mut rng = Rng::new(4);
        b.iter(|| kth_largest_select(black_box(&xs), k, &mut rng))
    });
}

fn islands(c: &mut Criterion) {
    let mut rng = Rng::new(5);
    let grid: Vec<Vec<u8>> = (0..300)
        .map(|_| {
            (0..300)
                .map(|_| if rng.index(5) < 2 { b'1' } else { b'0' })
                .collect()
        })
        .collect();

    c.bench_function("islands_dfs", |b| b.iter(|| num_islands_dfs(black_box(&grid))));
    c.bench_function("islands_bfs", |b| b.iter(|| num_islands_bfs(black_box(&grid))));
    c.bench_function("islands_dset", |b| b.iter(|| num_islands_dset(black_box(&grid))));
}

criterion_group!(benches, two_sum, lis, kth_largest, islands);
criterion_main!(benches);
