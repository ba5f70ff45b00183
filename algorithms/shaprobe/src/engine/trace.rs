//! Round Tracing
//!
//! Observation hooks for the compression loop. A sink only ever receives
//! copies of the working registers; it cannot alter the computation.

use crate::engine::state::State8;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Snapshot delivered after every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEvent {
    /// Zero-based block index within the padded message.
    pub block: usize,
    /// Zero-based round index (`0..64`).
    pub round: usize,
    /// Working registers after this round.
    pub state: State8,
}

/// Receiver of per-round snapshots.
///
/// Any `FnMut(&RoundEvent)` closure is a sink.
pub trait TraceSink {
    /// Called once per round, after the registers have been updated.
    fn on_round(&mut self, event: &RoundEvent);
}

impl<F: FnMut(&RoundEvent)> TraceSink for F {
    #[inline]
    fn on_round(&mut self, event: &RoundEvent) {
        self(event);
    }
}

/// Sink that ignores every event; monomorphises away entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    #[inline(always)]
    fn on_round(&mut self, _event: &RoundEvent) {}
}

/// Captures the state at a single (block, round) point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundFilter {
    block: usize,
    round: usize,
    captured: Option<State8>,
}

impl RoundFilter {
    /// Watch `round` of `block`.
    #[must_use]
    pub const fn new(block: usize, round: usize) -> Self {
        Self {
            block,
            round,
            captured: None,
        }
    }

    /// The captured snapshot, if that point was reached.
    #[must_use]
    pub const fn captured(&self) -> Option<State8> {
        self.captured
    }
}

impl TraceSink for RoundFilter {
    fn on_round(&mut self, event: &RoundEvent) {
        if event.block == self.block && event.round == self.round {
            self.captured = Some(event.state);
        }
    }
}

/// Records every event, optionally restricted to one block.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    only_block: Option<usize>,
    events: Vec<RoundEvent>,
}

impl TraceRecorder {
    /// Record all blocks.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            only_block: None,
            events: Vec::new(),
        }
    }

    /// Record only the rounds of `block`.
    #[must_use]
    pub const fn for_block(block: usize) -> Self {
        Self {
            only_block: Some(block),
            events: Vec::new(),
        }
    }

    /// Recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Consume the recorder.
    #[must_use]
    pub fn into_events(self) -> Vec<RoundEvent> {
        self.events
    }
}

impl TraceSink for TraceRecorder {
    fn on_round(&mut self, event: &RoundEvent) {
        if self.only_block.is_none_or(|b| b == event.block) {
            self.events.push(*event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(block: usize, round: usize) -> RoundEvent {
        RoundEvent {
            block,
            round,
            state: State8::from_words([round as u32; 8]),
        }
    }

    #[test]
    fn test_filter_captures_only_its_point() {
        let mut filter = RoundFilter::new(1, 13);
        filter.on_round(&event(0, 13));
        assert_eq!(filter.captured(), None);
        filter.on_round(&event(1, 13));
        filter.on_round(&event(1, 14));
        assert_eq!(filter.captured(), Some(State8::from_words([13; 8])));
    }

    #[test]
    fn test_recorder_block_restriction() {
        let mut rec = TraceRecorder::for_block(0);
        for block in 0..2 {
            for round in 0..3 {
                rec.on_round(&event(block, round));
            }
        }
        assert_eq!(rec.events().len(), 3);
        assert!(rec.events().iter().all(|e| e.block == 0));
    }

    #[test]
    fn test_closure_is_a_sink() {
        let mut count = 0usize;
        let mut sink = |_: &RoundEvent| count += 1;
        sink.on_round(&event(0, 0));
        sink.on_round(&event(0, 1));
        assert_eq!(count, 2);
    }
}
