//! Round-Trip Verification
//!
//! Batch checks of `f(invert(f(x))) == f(x)` and `invert(f(x)) == x`.
//! Every input is independent, so batches fan out over Rayon when the
//! `multithread` feature is enabled.

use crate::linear::inverter::LinearInverter;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// =============================================================================
// REPORTS
// =============================================================================

/// Outcome of one forward-invert-forward cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTripReport {
    /// Original input `x`.
    pub input: u32,
    /// `f(x)`.
    pub output: u32,
    /// `invert(f(x))`.
    pub recovered: u32,
    /// `f(invert(f(x)))`.
    pub reforward: u32,
}

impl RoundTripReport {
    /// Assemble a report from its four observations.
    #[must_use]
    pub const fn new(input: u32, output: u32, recovered: u32, reforward: u32) -> Self {
        Self {
            input,
            output,
            recovered,
            reforward,
        }
    }

    /// `recovered == input`.
    #[must_use]
    pub const fn input_matches(&self) -> bool {
        self.input == self.recovered
    }

    /// `reforward == output`.
    #[must_use]
    pub const fn output_matches(&self) -> bool {
        self.output == self.reforward
    }

    /// Both directions agree.
    #[must_use]
    pub const fn is_perfect(&self) -> bool {
        self.input_matches() && self.output_matches()
    }

    /// XOR between original and recovered input.
    #[must_use]
    pub const fn input_diff(&self) -> u32 {
        self.input ^ self.recovered
    }

    /// XOR between original and re-forwarded output.
    #[must_use]
    pub const fn output_diff(&self) -> u32 {
        self.output ^ self.reforward
    }

    /// Number of input bits that did not survive the cycle.
    #[must_use]
    pub const fn input_bit_errors(&self) -> u32 {
        self.input_diff().count_ones()
    }

    /// Number of output bits that changed on re-forwarding.
    #[must_use]
    pub const fn output_bit_errors(&self) -> u32 {
        self.output_diff().count_ones()
    }
}

/// Aggregate over a batch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundTripSummary {
    /// Inputs checked.
    pub total: usize,
    /// Inputs that round-tripped perfectly.
    pub perfect: usize,
    /// Reports for every imperfect input, in input order.
    pub failures: Vec<RoundTripReport>,
}

impl RoundTripSummary {
    /// True when every input round-tripped.
    #[must_use]
    pub fn all_perfect(&self) -> bool {
        self.perfect == self.total
    }

    /// Fold another summary into this one.
    pub fn merge(&mut self, other: Self) {
        self.total += other.total;
        self.perfect += other.perfect;
        self.failures.extend(other.failures);
    }
}

// =============================================================================
// BATCH
// =============================================================================

/// Check every input in `inputs`.
pub fn verify_round_trips<F>(inverter: &LinearInverter<F>, inputs: &[u32]) -> RoundTripSummary
where
    F: Fn(u32) -> u32 + Sync,
{
    let failures: Vec<RoundTripReport> = inputs
        .check_each(|x| inverter.round_trip(x))
        .into_iter()
        .filter(|r| !r.is_perfect())
        .collect();

    RoundTripSummary {
        total: inputs.len(),
        perfect: inputs.len() - failures.len(),
        failures,
    }
}

/// Feature-agnostic per-input fan-out.
trait BatchProcessor {
    fn check_each<G>(self, g: G) -> Vec<RoundTripReport>
    where
        G: Fn(u32) -> RoundTripReport + Sync + Send;
}

impl BatchProcessor for &[u32] {
    fn check_each<G>(self, g: G) -> Vec<RoundTripReport>
    where
        G: Fn(u32) -> RoundTripReport + Sync + Send,
    {
        #[cfg(feature = "multithread")]
        {
            use rayon::prelude::*;
            self.par_iter().map(|&x| g(x)).collect()
        }
        #[cfg(not(feature = "multithread"))]
        {
            self.iter().map(|&x| g(x)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Result;

    #[cfg(not(feature = "std"))]
    use alloc::vec;

    #[test]
    fn test_report_diffs() {
        let r = RoundTripReport::new(0b1010, 7, 0b1000, 7);
        assert!(!r.input_matches());
        assert!(r.output_matches());
        assert_eq!(r.input_bit_errors(), 1);
        assert_eq!(r.output_bit_errors(), 0);
        assert!(!r.is_perfect());
    }

    #[test]
    fn test_sigma1_batch_is_perfect() -> Result<()> {
        let inv = LinearInverter::sigma1()?;
        let inputs: Vec<u32> = (0..4096u32).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();
        let summary = verify_round_trips(&inv, &inputs);
        assert_eq!(summary.total, 4096);
        assert!(summary.all_perfect());
        assert!(summary.failures.is_empty());
        Ok(())
    }

    #[test]
    fn test_merge_accumulates() {
        let mut a = RoundTripSummary {
            total: 2,
            perfect: 2,
            failures: Vec::new(),
        };
        a.merge(RoundTripSummary {
            total: 3,
            perfect: 2,
            failures: vec![RoundTripReport::new(1, 2, 3, 4)],
        });
        assert_eq!((a.total, a.perfect, a.failures.len()), (5, 4, 1));
        assert!(!a.all_perfect());
    }
}
