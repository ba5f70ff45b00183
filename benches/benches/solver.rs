//! Backward Solver Benchmark
//!
//! A solve is sixteen forward rounds plus one schedule expansion, so it
//! should sit close to a single block compression.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use shaprobe::solver::demo_request;
use shaprobe::{solve_block, FixedWords, RoundTarget, State8};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solver");

    let demo = demo_request().unwrap();
    group.bench_function("demo", |b| b.iter(|| black_box(&demo).solve().unwrap()));

    // Every free round forced
    let mut rng = rand::rng();
    let targets: Vec<RoundTarget> = (0..14)
        .map(|r| RoundTarget::new(r).a(rng.random()))
        .collect();
    let fixed = FixedWords::new().with_padding_tail().unwrap();
    group.bench_function("14-targets", |b| {
        b.iter(|| solve_block(State8::initial(), black_box(&fixed), black_box(&targets)).unwrap())
    });

    // Solve plus the forward replay that proves it
    group.bench_function("solve+verify", |b| {
        b.iter(|| {
            let solved = solve_block(State8::initial(), &fixed, black_box(&targets)).unwrap();
            solved.satisfies(&targets)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
