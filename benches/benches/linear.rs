//! GF(2) Inversion Benchmark
//!
//! One-off matrix build and elimination versus per-query cost.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use shaprobe::{sigma1, verify_round_trips, LinearInverter, Matrix32};
use std::hint::black_box;

// =============================================================================
// BENCHMARK 1: SETUP
// =============================================================================

fn bench_setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Setup");

    group.bench_function("from_linear_fn", |b| {
        b.iter(|| Matrix32::from_linear_fn(black_box(sigma1)))
    });

    let m = Matrix32::from_linear_fn(sigma1);
    group.bench_function("invert", |b| b.iter(|| black_box(&m).invert().unwrap()));
    group.bench_function("mul", |b| {
        let inv = m.invert().unwrap();
        b.iter(|| black_box(&m).mul(black_box(&inv)))
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 2: QUERIES
// =============================================================================

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Queries");
    let inverter = LinearInverter::sigma1().unwrap();

    group.bench_function("invert", |b| {
        b.iter(|| inverter.invert(black_box(0x6A3F_1FED)))
    });

    let inputs: Vec<u32> = {
        let mut rng = rand::rng();
        (0..100_000).map(|_| rng.random()).collect()
    };
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("round-trips-100k", |b| {
        b.iter(|| verify_round_trips(&inverter, black_box(&inputs)).all_perfect())
    });

    group.finish();
}

criterion_group!(benches, bench_setup, bench_queries);
criterion_main!(benches);
