//! Roundtrip Command
//!
//! Random-batch check that `invert` and `forward` undo each other.

use super::LinearFunction;
use anyhow::Result;
use rand::prelude::*;
use rand::rngs::StdRng;
use rayon::prelude::*;
use shaprobe::codec::format_word;
use shaprobe::verify_round_trips;
use std::time::Instant;

/// Failures printed before the summary.
const SHOWN_FAILURES: usize = 8;

/// Run `count` random round-trips in each direction.
pub fn run_round_trips(count: usize, seed: Option<u64>, function: LinearFunction) -> Result<()> {
    let inverter = function.inverter()?;
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    let inputs: Vec<u32> = (0..count).map(|_| rng.random()).collect();
    tracing::info!(count, seed, function = function.name(), "starting round-trips");

    let start = Instant::now();

    // x -> f(x) -> invert -> x
    let summary = verify_round_trips(&inverter, &inputs);

    // y -> invert(y) -> f -> y, reusing the batch as outputs
    let output_failures = inputs
        .par_iter()
        .filter(|&&y| inverter.forward(inverter.invert(y)) != y)
        .count();

    tracing::info!(elapsed = ?start.elapsed(), "round-trips finished");

    for failure in summary.failures.iter().take(SHOWN_FAILURES) {
        println!(
            "x = {}  invert(f(x)) = {}  diff {} ({} bits)",
            format_word(failure.input),
            format_word(failure.recovered),
            format_word(failure.input_diff()),
            failure.input_bit_errors(),
        );
    }

    println!("function       {}", function.name());
    println!("seed           {seed}");
    println!("invert(f(x))   {}/{} perfect", summary.perfect, summary.total);
    println!("f(invert(y))   {}/{} perfect", count - output_failures, count);

    if !summary.all_perfect() || output_failures > 0 {
        anyhow::bail!("{} round-trip failure(s)", summary.failures.len() + output_failures);
    }
    println!("all round-trips OK");

    Ok(())
}
