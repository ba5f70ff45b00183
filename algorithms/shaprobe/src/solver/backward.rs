//! Backward Round Solver
//!
//! Inverts one round of the compression function for its schedule word:
//!
//! ```text
//! T2   = Σ0(a) + maj(a, b, c)
//! T1   = target - T2
//! W[t] = T1 - h - Σ1(e) - ch(e, f, g) - K[t]
//! ```
//!
//! Registers b..d after round `t` are the values of `a` after rounds
//! `t-1..t-3`, so every a..d target reduces to forcing `a` at some round.
//! Only the 16 block words are free; forcing `a` past round 15, or at a
//! round whose word is pinned, is a conflict.

use crate::engine::compress::run_rounds;
use crate::engine::padding::{words_to_bytes, MessageBlock};
use crate::engine::schedule::Schedule;
use crate::engine::state::{Register, RoundTerms, State8};
use crate::engine::trace::TraceRecorder;
use crate::kernels::constants::{BLOCK_WORDS, K, PADDING_MARKER_WORD, PADDING_TAIL_WORD, ROUNDS};
use crate::kernels::primitives::{ch, maj, sigma0, sigma1};
use crate::solver::target::{FixedWords, RoundTarget};
use crate::types::{ConflictReason, Result, ShaProbeError};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// =============================================================================
// ACCUMULATOR
// =============================================================================

/// One synthesised schedule word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForcedRound {
    /// Round whose `a` was forced.
    pub round: usize,
    /// Value `a` takes after the round.
    pub target: u32,
    /// `T1` of the round.
    pub t1: u32,
    /// `T2` of the round.
    pub t2: u32,
    /// The schedule word that produces `target`.
    pub word: u32,
}

/// Register state threaded through consecutive solve steps.
///
/// Each step consumes the accumulator and hands back its successor, so the
/// state produced by earlier rounds is always explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverState {
    state: State8,
    round: usize,
    words: [u32; BLOCK_WORDS],
}

impl SolverState {
    /// Start before round 0 from `initial`.
    #[must_use]
    pub const fn new(initial: State8) -> Self {
        Self {
            state: initial,
            round: 0,
            words: [0; BLOCK_WORDS],
        }
    }

    /// Registers after the last executed round.
    #[must_use]
    pub const fn state(&self) -> State8 {
        self.state
    }

    /// Index of the next round to execute.
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Schedule words consumed so far.
    #[must_use]
    pub fn words(&self) -> &[u32] {
        &self.words[..self.round]
    }

    fn free_round(&self) -> Result<usize> {
        if self.round >= BLOCK_WORDS {
            return Err(ShaProbeError::conflict(
                self.round,
                ConflictReason::DerivedWord { word: self.round },
            ));
        }
        Ok(self.round)
    }

    /// Execute the next round forward with a given word.
    ///
    /// # Errors
    /// [`ShaProbeError::Conflict`] once all 16 block words are consumed.
    pub fn advance(mut self, word: u32) -> Result<Self> {
        let t = self.free_round()?;
        self.state = self.state.round(K[t], word);
        self.words[t] = word;
        self.round += 1;
        Ok(self)
    }

    /// Execute the next round with the word that makes `a == target`.
    ///
    /// # Errors
    /// [`ShaProbeError::Conflict`] once all 16 block words are consumed.
    pub fn force_a(mut self, target: u32) -> Result<(Self, ForcedRound)> {
        let t = self.free_round()?;
        let s = self.state;
        let t2 = sigma0(s.a).wrapping_add(maj(s.a, s.b, s.c));
        let t1 = target.wrapping_sub(t2);
        let word = t1
            .wrapping_sub(s.h)
            .wrapping_sub(sigma1(s.e))
            .wrapping_sub(ch(s.e, s.f, s.g))
            .wrapping_sub(K[t]);

        self.state = s.shift(RoundTerms { t1, t2 });
        self.words[t] = word;
        self.round += 1;
        debug_assert_eq!(self.state.a, target);

        let forced = ForcedRound {
            round: t,
            target,
            t1,
            t2,
            word,
        };
        Ok((self, forced))
    }
}

// =============================================================================
// PLANNING
// =============================================================================

/// Reduce targets to "a must equal v after round r" for r in `0..16`.
///
/// Pre-round-0 references are checked against `initial` directly.
fn plan(
    initial: &State8,
    fixed: &FixedWords,
    targets: &[RoundTarget],
) -> Result<[Option<u32>; BLOCK_WORDS]> {
    let mut forced = [None; BLOCK_WORDS];
    let mut previous: Option<usize> = None;

    for target in targets {
        let round = target.round();
        if round >= ROUNDS {
            return Err(ShaProbeError::conflict(round, ConflictReason::RoundOutOfRange));
        }
        if let Some(prev) = previous.filter(|&p| round <= p) {
            return Err(ShaProbeError::conflict(
                round,
                ConflictReason::OutOfOrder { previous: prev },
            ));
        }
        previous = Some(round);

        for (register, value) in target.assignments() {
            let lag = register.index();
            let Some(a_round) = round.checked_sub(lag) else {
                // b/c/d after round 0..2 still hold initial a/b/c
                let actual = initial.get(Register::ALL[lag - round - 1]);
                if actual != value {
                    return Err(ShaProbeError::conflict(
                        round,
                        ConflictReason::InitialState {
                            actual,
                            wanted: value,
                        },
                    ));
                }
                continue;
            };

            if a_round >= BLOCK_WORDS {
                return Err(ShaProbeError::conflict(
                    round,
                    ConflictReason::DerivedWord { word: a_round },
                ));
            }
            if let Some(pinned) = fixed.get(a_round) {
                return Err(ShaProbeError::conflict(
                    round,
                    ConflictReason::PinnedWord {
                        word: a_round,
                        value: pinned,
                    },
                ));
            }
            match forced[a_round] {
                Some(first) if first != value => {
                    return Err(ShaProbeError::conflict(
                        round,
                        ConflictReason::Contradiction {
                            first,
                            second: value,
                        },
                    ));
                }
                _ => forced[a_round] = Some(value),
            }
        }
    }
    Ok(forced)
}

// =============================================================================
// SOLVE
// =============================================================================

/// A solved block together with the steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedBlock {
    initial: State8,
    schedule: Schedule,
    steps: Vec<ForcedRound>,
}

impl SolvedBlock {
    /// Chaining value the block was solved against.
    #[must_use]
    pub const fn initial(&self) -> State8 {
        self.initial
    }

    /// Fully expanded schedule.
    #[must_use]
    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// The 16 block words.
    #[must_use]
    pub fn block(&self) -> MessageBlock {
        self.schedule.block()
    }

    /// One entry per forced round, in round order.
    #[must_use]
    pub fn steps(&self) -> &[ForcedRound] {
        &self.steps
    }

    /// True when `W[14]`/`W[15]` carry the single-block padding tail.
    #[must_use]
    pub fn has_padding_tail(&self) -> bool {
        self.schedule[14] == PADDING_MARKER_WORD && self.schedule[15] == PADDING_TAIL_WORD
    }

    /// The 56-byte message (words 0..=13) whose padded first block is this
    /// block, or `None` when the tail words are not the padding tail.
    #[must_use]
    pub fn message_bytes(&self) -> Option<Vec<u8>> {
        self.has_padding_tail()
            .then(|| words_to_bytes(&self.schedule.words()[..14]))
    }

    /// Working state after each of the 64 rounds, recomputed forward.
    #[must_use]
    pub fn replay(&self) -> Vec<State8> {
        let mut recorder = TraceRecorder::new();
        let _ = run_rounds(self.initial, &self.schedule, 0, &mut recorder);
        recorder.into_events().into_iter().map(|e| e.state).collect()
    }

    /// Re-run the block forward and check every target holds.
    #[must_use]
    pub fn satisfies(&self, targets: &[RoundTarget]) -> bool {
        let states = self.replay();
        targets.iter().all(|target| {
            states.get(target.round()).is_some_and(|state| {
                target
                    .assignments()
                    .all(|(register, value)| state.get(register) == value)
            })
        })
    }
}

/// Solve for a block that meets `targets`, keeping `fixed` words intact.
///
/// Unconstrained free words are zero.
///
/// # Errors
/// [`ShaProbeError::Conflict`] when a target is out of order, contradicts
/// another target or the initial state, or needs a pinned or derived word.
pub fn solve_block(
    initial: State8,
    fixed: &FixedWords,
    targets: &[RoundTarget],
) -> Result<SolvedBlock> {
    let forced = plan(&initial, fixed, targets)?;

    let mut acc = SolverState::new(initial);
    let mut steps = Vec::new();
    for (t, demand) in forced.iter().enumerate() {
        acc = match demand {
            Some(target) => {
                let (next, step) = acc.force_a(*target)?;
                steps.push(step);
                next
            }
            None => acc.advance(fixed.get(t).unwrap_or(0))?,
        };
    }

    let mut block = [0u32; BLOCK_WORDS];
    block.copy_from_slice(acc.words());
    Ok(SolvedBlock {
        initial,
        schedule: Schedule::expand(&block),
        steps,
    })
}

/// Solve and return just the expanded schedule.
///
/// # Errors
/// Same as [`solve_block`].
pub fn solve_targets(
    initial: State8,
    fixed: &FixedWords,
    targets: &[RoundTarget],
) -> Result<Schedule> {
    solve_block(initial, fixed, targets).map(|solved| *solved.schedule())
}
