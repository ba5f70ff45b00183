//! Compression Throughput Benchmark
//!
//! Cost of the traceable engine against the `sha2` reference, and the cost
//! of observing it.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use sha2::{Digest, Sha256};
use shaprobe::{RoundFilter, TraceRecorder};
use std::hint::black_box;

const KB: usize = 1024;

// =============================================================================
// BENCHMARK 1: DIGEST
// =============================================================================

/// Untraced digests across padding boundaries and bulk sizes.
fn bench_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Digest");

    let sizes = [
        (55, "55B"),
        (56, "56B"),
        (64, "64B"),
        (KB, "1KB"),
        (64 * KB, "64KB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::new("shaprobe", name),
            &input,
            |b, data| b.iter(|| shaprobe::compress_all(black_box(data)).unwrap()),
        );
        group.bench_with_input(
            criterion::BenchmarkId::new("sha2", name),
            &input,
            |b, data| b.iter(|| Sha256::digest(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: TRACING OVERHEAD
// =============================================================================

/// Same message, three sinks: none, one-point filter, full recorder.
fn bench_tracing(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Tracing");

    let mut input = vec![0u8; 4 * KB];
    rand::rng().fill(&mut input[..]);
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("no-trace", |b| {
        b.iter(|| shaprobe::compress_all(black_box(&input)).unwrap())
    });

    group.bench_function("round-filter", |b| {
        b.iter(|| {
            let mut filter = RoundFilter::new(0, 13);
            shaprobe::compress_all_traced(black_box(&input), &mut filter).unwrap();
            filter.captured()
        })
    });

    group.bench_function("recorder", |b| {
        b.iter(|| {
            let mut recorder = TraceRecorder::new();
            shaprobe::compress_all_traced(black_box(&input), &mut recorder).unwrap();
            recorder.into_events().len()
        })
    });

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(benches, bench_digest, bench_tracing);
criterion_main!(benches);
