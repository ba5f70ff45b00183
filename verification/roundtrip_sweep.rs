//! # Round-Trip Sweep
//!
//! Long-running check of a linear inverter over a contiguous range of
//! 32-bit words, up to the whole domain.
//!
//! The range is walked in chunks; each chunk is checked in parallel on the
//! Rayon pool and progress is logged between chunks. Exits non-zero on the
//! first chunk that contains a failure.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use shaprobe::linear::WordFn;
use shaprobe::{verify_round_trips, LinearInverter, RoundTripSummary};
use std::time::Instant;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Function {
    Sigma0,
    Sigma1,
    Gamma0,
    Gamma1,
}

impl Function {
    fn word_fn(self) -> WordFn {
        match self {
            Self::Sigma0 => shaprobe::sigma0,
            Self::Sigma1 => shaprobe::sigma1,
            Self::Gamma0 => shaprobe::gamma0,
            Self::Gamma1 => shaprobe::gamma1,
        }
    }
}

/// Sweep `f(invert(f(x))) == f(x)` over a word range.
#[derive(Parser)]
#[command(name = "roundtrip_sweep")]
struct Args {
    /// Function to sweep
    #[arg(short, long, value_enum, default_value_t = Function::Sigma1)]
    function: Function,

    /// First word (inclusive)
    #[arg(long, default_value_t = 0)]
    start: u32,

    /// Last word (inclusive)
    #[arg(long, default_value_t = u32::MAX)]
    end: u32,

    /// Words per chunk
    #[arg(long, default_value_t = 1 << 22)]
    chunk: u32,

    /// Worker threads (0 = one per core)
    #[arg(short, long, default_value_t = 0)]
    threads: usize,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_default();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

/// Entry point for the round-trip sweep.
fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if args.start > args.end {
        anyhow::bail!("--start must not exceed --end");
    }
    if args.chunk == 0 {
        anyhow::bail!("--chunk must be positive");
    }
    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("Failed to size the worker pool")?;
    }

    let inverter = LinearInverter::new(args.function.word_fn())
        .with_context(|| format!("{:?} is not invertible", args.function))?;
    tracing::info!(
        function = ?args.function,
        start = args.start,
        end = args.end,
        threads = rayon::current_num_threads(),
        "sweep starting"
    );

    let started = Instant::now();
    let mut total = RoundTripSummary::default();
    let mut lo = u64::from(args.start);
    let end = u64::from(args.end);

    while lo <= end {
        let hi = end.min(lo + u64::from(args.chunk) - 1);
        let inputs: Vec<u32> = (lo..=hi).filter_map(|x| u32::try_from(x).ok()).collect();

        let summary = verify_round_trips(&inverter, &inputs);
        let failed = !summary.all_perfect();
        total.merge(summary);

        tracing::info!(
            done = total.total,
            upto = hi,
            elapsed = ?started.elapsed(),
            "chunk checked"
        );

        if failed {
            for report in total.failures.iter().take(8) {
                tracing::error!(
                    input = report.input,
                    recovered = report.recovered,
                    diff_bits = report.input_bit_errors(),
                    "round-trip failed"
                );
            }
            anyhow::bail!("{} failure(s) by word {hi:#010x}", total.failures.len());
        }

        lo = hi + 1;
    }

    println!(
        "{:?}: {} words, all perfect ({:.1?})",
        args.function,
        total.total,
        started.elapsed()
    );

    Ok(())
}
