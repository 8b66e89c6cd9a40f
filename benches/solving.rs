//! Benchmarks for the stable-matching engine.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- solve
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stable_marriage::fixtures::regression_fixtures;
use stable_marriage::{
    PreferenceTable, QueueDiscipline, RankTable, Side, SolverConfig, StableMatcher,
};

// ============================================================================
// HELPER FUNCTIONS - Deterministic market generation
// ============================================================================

/// N random permutations of `[1, n]` (same seed = same table)
fn random_table(n: usize, seed: u64) -> Vec<Vec<usize>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let mut row: Vec<usize> = (1..=n).collect();
            row.shuffle(&mut rng);
            row
        })
        .collect()
}

/// Everyone ranks the other side identically: N(N+1)/2 proposals
fn uniform_table(n: usize) -> Vec<Vec<usize>> {
    vec![(1..=n).collect(); n]
}

// ============================================================================
// BENCHMARK: Regression fixtures
// ============================================================================

fn bench_fixtures(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixtures");
    let matcher = StableMatcher::new();

    for fixture in regression_fixtures() {
        group.bench_function(fixture.name, |b| {
            b.iter(|| {
                black_box(matcher.solve(
                    fixture.size(),
                    black_box(&fixture.proposer_prefs),
                    black_box(&fixture.receiver_prefs),
                ))
            });
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Rank table construction
// ============================================================================

fn bench_rank_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_build");

    for n in [100, 500, 1_000] {
        let rows = random_table(n, 7);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &rows, |b, rows| {
            let table = PreferenceTable::new(Side::Receiver, rows);
            b.iter(|| black_box(RankTable::build(&table)));
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Solve
// ============================================================================

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(30);

    let fifo = StableMatcher::new();
    let lifo = StableMatcher::with_config(SolverConfig::new().with_discipline(QueueDiscipline::Lifo));

    for n in [10, 100, 500] {
        let proposers = random_table(n, 42);
        let receivers = random_table(n, 43);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("random_fifo", n), &n, |b, &n| {
            b.iter(|| black_box(fifo.solve(n, &proposers, &receivers)));
        });
        group.bench_with_input(BenchmarkId::new("random_lifo", n), &n, |b, &n| {
            b.iter(|| black_box(lifo.solve(n, &proposers, &receivers)));
        });

        let uniform = uniform_table(n);
        group.bench_with_input(BenchmarkId::new("uniform", n), &n, |b, &n| {
            b.iter(|| black_box(fifo.solve(n, &uniform, &uniform)));
        });
    }

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(benches, bench_fixtures, bench_rank_build, bench_solve);

criterion_main!(benches);
