//! Full-search benchmarks.
//!
//! These benchmarks run the complete backtracking search for a range of board
//! sizes. The work grows roughly exponentially with the size, so the larger
//! boards dominate.
//!
//! Run with:
//! ```bash
//! cargo bench --bench solve
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use queens_rs::search::solve;

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for size in [6usize, 8, 10] {
        // Placements per run is deterministic, so report throughput in
        // placements rather than wall-clock alone.
        let placements = solve(size).unwrap().placements;
        group.throughput(Throughput::Elements(placements));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| solve(size).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
