//! CLI Commands
//!
//! All shaprobe CLI commands organized as separate modules.

mod digest;
mod invert;
mod matrix;
mod roundtrip;
mod solve;
mod trace;

pub use digest::digest_message;
pub use invert::invert_words;
pub use matrix::print_matrix;
pub use roundtrip::run_round_trips;
pub use solve::{solve_and_report, SolveArgs};
pub use trace::trace_message;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use shaprobe::codec::parse_hex_message;
use shaprobe::linear::WordFn;
use shaprobe::LinearInverter;

// =============================================================================
// SHARED ARGUMENTS
// =============================================================================

/// A message given on the command line.
#[derive(Args, Debug)]
pub struct MessageArgs {
    /// Message bytes in hex (or literal text with --text)
    #[arg(value_name = "MESSAGE")]
    input: String,

    /// Treat MESSAGE as UTF-8 text instead of hex
    #[arg(short, long)]
    text: bool,
}

impl MessageArgs {
    /// Decode into message bytes.
    pub fn bytes(&self) -> Result<Vec<u8>> {
        if self.text {
            return Ok(self.input.as_bytes().to_vec());
        }
        parse_hex_message(&self.input).context("Invalid hex message")
    }
}

/// Linear mixing functions with an exact inverse.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum LinearFunction {
    /// Compression Σ0: rotr 2, 13, 22
    Sigma0,
    /// Compression Σ1: rotr 6, 11, 25
    Sigma1,
    /// Schedule σ0: rotr 7, 18, shr 3
    Gamma0,
    /// Schedule σ1: rotr 17, 19, shr 10
    Gamma1,
}

impl LinearFunction {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sigma0 => "Sigma0",
            Self::Sigma1 => "Sigma1",
            Self::Gamma0 => "gamma0",
            Self::Gamma1 => "gamma1",
        }
    }

    /// The plain word function.
    pub fn word_fn(self) -> WordFn {
        match self {
            Self::Sigma0 => shaprobe::sigma0,
            Self::Sigma1 => shaprobe::sigma1,
            Self::Gamma0 => shaprobe::gamma0,
            Self::Gamma1 => shaprobe::gamma1,
        }
    }

    /// Build the inverter.
    pub fn inverter(self) -> Result<LinearInverter<WordFn>> {
        let inverter = LinearInverter::new(self.word_fn())
            .with_context(|| format!("{} matrix is not invertible", self.name()))?;
        tracing::debug!(function = self.name(), "inverter ready");
        Ok(inverter)
    }
}
