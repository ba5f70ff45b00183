//! Compression Engine
//!
//! Runs the 64 rounds over one block and folds the result into the chaining
//! value. Blocks must be fed strictly in order.

use crate::engine::padding::MessageBlock;
use crate::engine::schedule::Schedule;
use crate::engine::state::State8;
use crate::engine::trace::{RoundEvent, TraceSink};
use crate::kernels::constants::{DIGEST_SIZE, K, ROUNDS};

// =============================================================================
// SINGLE BLOCK
// =============================================================================

/// Run all rounds of one block and return the working state *before*
/// the feed-forward.
pub fn run_rounds<S: TraceSink>(
    start: State8,
    schedule: &Schedule,
    block_index: usize,
    sink: &mut S,
) -> State8 {
    let mut state = start;
    for (round, (&k, &w)) in K.iter().zip(schedule.words()).enumerate().take(ROUNDS) {
        state = state.round(k, w);
        sink.on_round(&RoundEvent {
            block: block_index,
            round,
            state,
        });
    }
    state
}

/// Compress one block: expand, run 64 rounds, feed forward.
pub fn compress_block<S: TraceSink>(
    chaining: State8,
    block: &MessageBlock,
    block_index: usize,
    sink: &mut S,
) -> State8 {
    let schedule = Schedule::expand(block);
    chaining.feed_forward(run_rounds(chaining, &schedule, block_index, sink))
}

// =============================================================================
// MULTI-BLOCK ENGINE
// =============================================================================

/// Sequential chaining over any number of blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionEngine {
    chaining: State8,
    blocks: usize,
}

impl Default for CompressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CompressionEngine {
    /// Start from the standard initial chaining value.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_chaining(State8::initial())
    }

    /// Start from an arbitrary chaining value.
    #[must_use]
    pub const fn with_chaining(chaining: State8) -> Self {
        Self {
            chaining,
            blocks: 0,
        }
    }

    /// Fold the next block into the chaining value.
    pub fn compress<S: TraceSink>(&mut self, block: &MessageBlock, sink: &mut S) {
        self.chaining = compress_block(self.chaining, block, self.blocks, sink);
        self.blocks += 1;
    }

    /// Current chaining value.
    #[must_use]
    pub const fn chaining(&self) -> State8 {
        self.chaining
    }

    /// Number of blocks folded so far.
    #[must_use]
    pub const fn blocks_processed(&self) -> usize {
        self.blocks
    }

    /// Serialise the chaining value as a digest.
    #[must_use]
    pub fn digest(&self) -> [u8; DIGEST_SIZE] {
        self.chaining.to_digest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::trace::{NoTrace, TraceRecorder};

    fn abc_block() -> MessageBlock {
        let mut block = [0u32; 16];
        block[0] = 0x6162_6380;
        block[15] = 0x18;
        block
    }

    #[test]
    fn test_abc_first_and_last_round() {
        // FIPS 180-2 appendix B.1
        let mut rec = TraceRecorder::new();
        let _ = compress_block(State8::initial(), &abc_block(), 0, &mut rec);
        let events = rec.events();
        assert_eq!(events.len(), 64);
        assert_eq!(events[0].state.a, 0x5d6a_ebcd);
        assert_eq!(events[0].state.e, 0xfa2a_4622);
        assert_eq!(events[63].state.a, 0x506e_3058);
        assert_eq!(events[63].state.e, 0x5ef5_0f24);
        assert_eq!(events[63].state.h, 0x961f_4894);
    }

    #[test]
    fn test_trace_does_not_change_result() {
        let mut rec = TraceRecorder::new();
        let traced = compress_block(State8::initial(), &abc_block(), 0, &mut rec);
        let plain = compress_block(State8::initial(), &abc_block(), 0, &mut NoTrace);
        assert_eq!(traced, plain);
    }

    #[test]
    fn test_engine_counts_blocks_and_tags_events() {
        let mut engine = CompressionEngine::new();
        let mut rec = TraceRecorder::new();
        engine.compress(&[0u32; 16], &mut rec);
        engine.compress(&[0u32; 16], &mut rec);
        assert_eq!(engine.blocks_processed(), 2);
        assert_eq!(rec.events()[64].block, 1);
        assert_eq!(rec.events()[64].round, 0);
    }

    #[test]
    fn test_chaining_value_carries_between_blocks() {
        let mut engine = CompressionEngine::new();
        engine.compress(&abc_block(), &mut NoTrace);
        let after_first = engine.chaining();
        let mut resumed = CompressionEngine::with_chaining(after_first);
        engine.compress(&[7u32; 16], &mut NoTrace);
        resumed.compress(&[7u32; 16], &mut NoTrace);
        assert_eq!(engine.chaining(), resumed.chaining());
    }
}
