//! Criterion benchmarks for the greedy optimizer.
//!
//! Measures optimisation time across batch sizes to track the quadratic
//! scan cost and detect regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package waybill-solver-greedy
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use waybill_core::{DistanceMatrix, OptimizeRequest, Optimizer};
use waybill_solver_greedy::{GreedyOptimizer, GreedyOptimizerConfig};


use bench_support::{BENCHMARK_SEED, benchmark_depot, generate_clustered_stops};

/// Batch sizes to benchmark.
const BATCH_SIZES: &[usize] = &[10, 50, 200, 1000];

fn element_count(size: usize) -> u64 {
    u64::try_from(size).unwrap_or(u64::MAX)
}

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_optimize");
    let optimizer = GreedyOptimizer::with_config(GreedyOptimizerConfig {
        depot: benchmark_depot(),
        ..GreedyOptimizerConfig::default()
    });

    for &size in BATCH_SIZES {
        let request = OptimizeRequest::new(generate_clustered_stops(size, BENCHMARK_SEED));
        group.throughput(Throughput::Elements(element_count(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &request, |b, request| {
            b.iter(|| optimizer.optimize(request));
        });
    }
    group.finish();
}

fn bench_distance_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_matrix");
    for &size in BATCH_SIZES.iter().take(3) {
        let stops = generate_clustered_stops(size, BENCHMARK_SEED);
        group.throughput(Throughput::Elements(element_count(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &stops, |b, stops| {
            b.iter(|| DistanceMatrix::from_stops(stops));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_optimize, bench_distance_matrix);
criterion_main!(benches);
