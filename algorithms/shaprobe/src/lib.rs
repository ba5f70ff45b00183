#![cfg_attr(not(feature = "std"), no_std)]

//! # shaprobe
//!
//! SHA-256 internals toolkit: a traceable compression engine, a backward
//! round solver that forces chosen registers at chosen rounds, and exact
//! GF(2) inversion of the linear mixing functions.
//!
//! Not a production hash library: no side-channel hardening, no streaming.

//! # Usage
//! ```rust
//! use shaprobe::{solve_block, FixedWords, LinearInverter, RoundTarget, State8};
//!
//! // 1. Digest
//! let digest = shaprobe::compress_all(b"abc")?;
//! assert!(shaprobe::codec::format_bytes(&digest).starts_with("ba7816bf"));
//!
//! // 2. Force a = 0xDEADBEEF after round 3
//! let targets = [RoundTarget::new(3).a(0xDEAD_BEEF)];
//! let solved = solve_block(State8::initial(), &FixedWords::new(), &targets)?;
//! assert!(solved.satisfies(&targets));
//!
//! // 3. Invert Σ1
//! let sigma1 = LinearInverter::sigma1()?;
//! let x = sigma1.invert(0x6A3F_1FED);
//! assert!(sigma1.verify(x, 0x6A3F_1FED));
//! # Ok::<(), shaprobe::ShaProbeError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod codec;
pub mod engine;
pub mod kernels;
pub mod linear;
mod oneshot;
pub mod solver;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use engine::{
    compress_block, pad, CompressionEngine, MessageBlock, NoTrace, Register, RoundEvent,
    RoundFilter, Schedule, State8, TraceRecorder, TraceSink,
};
pub use kernels::constants::{DIGEST_SIZE, H_INIT, K};
pub use kernels::primitives::{ch, gamma0, gamma1, maj, rotr, sigma0, sigma1};
pub use linear::{
    verify_round_trips, BitVector32, LinearInverter, Matrix32, RoundTripReport, RoundTripSummary,
};
pub use oneshot::{chain_all, compress_all, compress_all_traced, verify_digest};
pub use solver::{
    solve_block, solve_targets, FixedWords, ForcedRound, RoundTarget, SolveRequest, SolvedBlock,
    SolverState,
};
pub use types::{ConflictReason, Result, ShaProbeError};
