//! Backward Solving
//!
//! Synthesises block words that force chosen registers at chosen rounds.

pub mod backward;
pub mod target;

pub use backward::{solve_block, solve_targets, ForcedRound, SolvedBlock, SolverState};
pub use target::{FixedWords, RoundTarget};

use crate::engine::state::State8;
use crate::kernels::constants::BLOCK_WORDS;
use crate::types::Result;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// =============================================================================
// REQUESTS
// =============================================================================

/// Everything one solve needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    /// Chaining value entering the block.
    pub initial: State8,
    /// Words the solve must leave alone.
    pub fixed: FixedWords,
    /// Targets in strictly increasing round order.
    pub targets: Vec<RoundTarget>,
}

impl SolveRequest {
    /// Run the solve.
    ///
    /// # Errors
    /// See [`solve_block`].
    pub fn solve(&self) -> Result<SolvedBlock> {
        solve_block(self.initial, &self.fixed, &self.targets)
    }
}

/// `"Hello World! This is a test message for "` as ten big-endian words.
pub const DEMO_PREFIX: [u32; 10] = [
    0x4865_6c6c,
    0x6f20_576f,
    0x726c_6421,
    0x2054_6869,
    0x7320_6973,
    0x2061_2074,
    0x6573_7420,
    0x6d65_7373,
    0x6167_6520,
    0x666f_7220,
];

/// Value the demo forces into `a` at rounds 10..=13.
pub const DEMO_TARGET: u32 = 0xDEAD_BEEF;

/// Ten fixed prefix words, `a` forced to [`DEMO_TARGET`] after rounds
/// 10 through 13, padding tail pinned. After round 13, `a..d` all equal
/// the target and the solved words 0..=13 form a 56-byte message.
///
/// # Errors
/// Never in practice; the prefix stops well short of the padding tail.
pub fn demo_request() -> Result<SolveRequest> {
    let mut slots = [None; BLOCK_WORDS];
    for (slot, word) in slots.iter_mut().zip(DEMO_PREFIX) {
        *slot = Some(word);
    }
    let fixed = FixedWords::from_slots(slots).with_padding_tail()?;
    Ok(SolveRequest {
        initial: State8::initial(),
        fixed,
        targets: (10..14)
            .map(|round| RoundTarget::new(round).a(DEMO_TARGET))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::padding::words_to_bytes;

    #[test]
    fn test_demo_prefix_spells_text() {
        assert_eq!(
            words_to_bytes(&DEMO_PREFIX),
            b"Hello World! This is a test message for ".to_vec()
        );
    }

    #[test]
    fn test_demo_round_13_all_targets() {
        let solved = demo_request().unwrap().solve().unwrap();
        let states = solved.replay();
        let s13 = states[13];
        assert_eq!([s13.a, s13.b, s13.c, s13.d], [DEMO_TARGET; 4]);
        assert_eq!(&solved.block()[..10], &DEMO_PREFIX[..]);
        assert_eq!(solved.steps().len(), 4);
    }
}
