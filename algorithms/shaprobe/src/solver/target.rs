//! Solve Inputs
//!
//! Round targets and the schedule words a solve is not allowed to touch.

use crate::engine::state::Register;
use crate::kernels::constants::{BLOCK_WORDS, PADDING_MARKER_WORD, PADDING_TAIL_WORD};
use crate::types::{ConflictReason, Result, ShaProbeError};

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// =============================================================================
// ROUND TARGET
// =============================================================================

/// Desired values for a subset of registers a..d after a given round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTarget {
    round: usize,
    values: [Option<u32>; 4],
}

impl RoundTarget {
    /// An empty target at `round` (state *after* that round executes).
    #[must_use]
    pub const fn new(round: usize) -> Self {
        Self {
            round,
            values: [None; 4],
        }
    }

    /// Target `a = b = c = d = value` at `round`.
    #[must_use]
    pub const fn all(round: usize, value: u32) -> Self {
        Self {
            round,
            values: [Some(value); 4],
        }
    }

    /// Require `a == value`.
    #[must_use]
    pub const fn a(mut self, value: u32) -> Self {
        self.values[0] = Some(value);
        self
    }

    /// Require `b == value`.
    #[must_use]
    pub const fn b(mut self, value: u32) -> Self {
        self.values[1] = Some(value);
        self
    }

    /// Require `c == value`.
    #[must_use]
    pub const fn c(mut self, value: u32) -> Self {
        self.values[2] = Some(value);
        self
    }

    /// Require `d == value`.
    #[must_use]
    pub const fn d(mut self, value: u32) -> Self {
        self.values[3] = Some(value);
        self
    }

    /// Require `register == value`; `None` for e..h, which cannot be targeted.
    #[must_use]
    pub const fn with(mut self, register: Register, value: u32) -> Option<Self> {
        let idx = register.index();
        if idx >= self.values.len() {
            return None;
        }
        self.values[idx] = Some(value);
        Some(self)
    }

    /// Round index.
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Demanded value of `register`, if any.
    #[must_use]
    pub fn get(&self, register: Register) -> Option<u32> {
        self.values.get(register.index()).copied().flatten()
    }

    /// `(register, value)` pairs in a..d order.
    pub fn assignments(&self) -> impl Iterator<Item = (Register, u32)> + '_ {
        Register::ALL
            .iter()
            .zip(self.values.iter())
            .filter_map(|(reg, value)| value.map(|v| (*reg, v)))
    }

    /// True when no register is constrained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

// =============================================================================
// FIXED WORDS
// =============================================================================

/// Block words pinned before solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedWords {
    words: [Option<u32>; BLOCK_WORDS],
}

impl FixedWords {
    /// Nothing pinned.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: [None; BLOCK_WORDS],
        }
    }

    /// Wrap an explicit slot array (`None` = free).
    #[must_use]
    pub const fn from_slots(words: [Option<u32>; BLOCK_WORDS]) -> Self {
        Self { words }
    }

    /// Pin words `0..prefix.len()`.
    ///
    /// # Errors
    /// [`ShaProbeError::Validation`] if `prefix` is longer than a block.
    pub fn with_prefix(prefix: &[u32]) -> Result<Self> {
        let mut fixed = Self::new();
        for (i, &w) in prefix.iter().enumerate() {
            fixed = fixed.pin(i, w)?;
        }
        Ok(fixed)
    }

    /// Pin word `index` to `value`.
    ///
    /// # Errors
    /// [`ShaProbeError::Validation`] if `index` is not a block word.
    pub fn pin(mut self, index: usize, value: u32) -> Result<Self> {
        let slot = self
            .words
            .get_mut(index)
            .ok_or_else(|| ShaProbeError::Validation {
                input: index.to_string(),
                reason: "block word index must be below 16",
            })?;
        *slot = Some(value);
        Ok(self)
    }

    /// Pin `W[14] = 0x80000000` and `W[15] = 0`: the first block of any
    /// message whose content fills words 0..=13 exactly.
    ///
    /// A slot already pinned to the same value is left as is.
    ///
    /// # Errors
    /// [`ShaProbeError::Conflict`] with [`ConflictReason::PinnedWord`] if
    /// word 14 or 15 is already pinned to something else.
    pub fn with_padding_tail(self) -> Result<Self> {
        self.pin_tail_word(14, PADDING_MARKER_WORD)?
            .pin_tail_word(15, PADDING_TAIL_WORD)
    }

    fn pin_tail_word(mut self, index: usize, value: u32) -> Result<Self> {
        match self.words[index] {
            Some(pinned) if pinned != value => Err(ShaProbeError::conflict(
                index,
                ConflictReason::PinnedWord {
                    word: index,
                    value: pinned,
                },
            )),
            _ => {
                self.words[index] = Some(value);
                Ok(self)
            }
        }
    }

    /// Pinned value of word `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.words.get(index).copied().flatten()
    }

    /// Number of pinned words.
    #[must_use]
    pub fn pinned_count(&self) -> usize {
        self.words.iter().filter(|w| w.is_some()).count()
    }
}
