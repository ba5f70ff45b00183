//! Forward Engine
//!
//! Padding, schedule expansion and the traceable compression loop.

pub mod compress;
pub mod padding;
pub mod schedule;
pub mod state;
pub mod trace;

pub use compress::{compress_block, run_rounds, CompressionEngine};
pub use padding::{blocks, pad, MessageBlock};
pub use schedule::Schedule;
pub use state::{Register, RoundTerms, State8};
pub use trace::{NoTrace, RoundEvent, RoundFilter, TraceRecorder, TraceSink};
