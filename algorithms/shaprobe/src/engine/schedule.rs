//! Message Schedule Expansion
//!
//! `W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]  (mod 2^32)` for `t` in `16..64`.

use core::ops::Index;

use crate::engine::padding::MessageBlock;
use crate::kernels::constants::{BLOCK_WORDS, SCHEDULE_LEN};
use crate::kernels::primitives::{gamma0, gamma1};

/// The 64 expanded schedule words of one block.
///
/// Words 16..64 are pure functions of words 0..16; the type exposes no way
/// to mutate them after expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    words: [u32; SCHEDULE_LEN],
}

impl Schedule {
    /// Expand a block into its full schedule.
    #[must_use]
    pub fn expand(block: &MessageBlock) -> Self {
        let mut words = [0u32; SCHEDULE_LEN];
        words[..BLOCK_WORDS].copy_from_slice(block);
        for t in BLOCK_WORDS..SCHEDULE_LEN {
            words[t] = gamma1(words[t - 2])
                .wrapping_add(words[t - 7])
                .wrapping_add(gamma0(words[t - 15]))
                .wrapping_add(words[t - 16]);
        }
        Self { words }
    }

    /// All 64 words.
    #[must_use]
    pub const fn words(&self) -> &[u32; SCHEDULE_LEN] {
        &self.words
    }

    /// The 16 block words the schedule was expanded from.
    #[must_use]
    pub fn block(&self) -> MessageBlock {
        let mut block = [0u32; BLOCK_WORDS];
        block.copy_from_slice(&self.words[..BLOCK_WORDS]);
        block
    }
}

impl Index<usize> for Schedule {
    type Output = u32;

    fn index(&self, t: usize) -> &u32 {
        &self.words[t]
    }
}
