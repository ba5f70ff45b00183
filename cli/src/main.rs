//! shaprobe CLI
//!
//! Hex-in/hex-out front end for tracing, solving and inverting SHA-256
//! internals. Results go to stdout, diagnostics to stderr.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{
    digest_message, invert_words, print_matrix, run_round_trips, solve_and_report, trace_message,
    LinearFunction, MessageArgs, SolveArgs,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "shaprobe")]
#[command(about = "Trace, solve and invert SHA-256 internals", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the SHA-256 digest of a message
    Digest {
        #[command(flatten)]
        message: MessageArgs,

        /// Also compute the digest with the `sha2` crate and compare
        #[arg(long)]
        check: bool,
    },

    /// Print the working registers after one round of one block
    Trace {
        #[command(flatten)]
        message: MessageArgs,

        /// Zero-based block index
        #[arg(short, long, default_value_t = 0)]
        block: usize,

        /// Zero-based round index
        #[arg(short, long, default_value_t = 13)]
        round: usize,

        /// Print all eight registers instead of a..d
        #[arg(long)]
        all: bool,
    },

    /// Solve for block words that force chosen registers
    Solve(SolveArgs),

    /// Invert a linear mixing function for one or more target words
    Invert {
        /// Target outputs in hex
        #[arg(value_name = "WORD")]
        words: Vec<String>,

        /// Function to invert
        #[arg(short, long, value_enum, default_value_t = LinearFunction::Sigma1)]
        function: LinearFunction,

        /// Read targets from stdin until `quit`
        #[arg(short, long)]
        interactive: bool,
    },

    /// Check invert/forward round-trips on random words
    Roundtrip {
        /// Number of random inputs
        #[arg(short = 'n', long, default_value_t = 10_000)]
        count: usize,

        /// Seed for reproducible inputs
        #[arg(long)]
        seed: Option<u64>,

        /// Function to check
        #[arg(short, long, value_enum, default_value_t = LinearFunction::Sigma1)]
        function: LinearFunction,
    },

    /// Print the GF(2) matrix of a linear mixing function
    Matrix {
        /// Function whose matrix to print
        #[arg(short, long, value_enum, default_value_t = LinearFunction::Sigma1)]
        function: LinearFunction,

        /// Print the inverse instead
        #[arg(long)]
        inverse: bool,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_default();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Digest { message, check } => digest_message(message, *check)?,
        Commands::Trace {
            message,
            block,
            round,
            all,
        } => trace_message(message, *block, *round, *all)?,
        Commands::Solve(args) => solve_and_report(args)?,
        Commands::Invert {
            words,
            function,
            interactive,
        } => invert_words(words, *function, *interactive)?,
        Commands::Roundtrip {
            count,
            seed,
            function,
        } => run_round_trips(*count, *seed, *function)?,
        Commands::Matrix { function, inverse } => print_matrix(*function, *inverse)?,
    }

    Ok(())
}
