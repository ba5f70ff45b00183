//! Linear Function Inverter
//!
//! Builds the matrix of a linear word function once, inverts it once, then
//! answers `invert` queries with a single matrix-vector product.

use crate::kernels::primitives::{gamma0, gamma1, sigma0, sigma1};
use crate::linear::matrix::Matrix32;
use crate::linear::roundtrip::RoundTripReport;
use crate::types::Result;

/// Plain function pointer over words.
pub type WordFn = fn(u32) -> u32;

/// Inverter for one GF(2)-linear bijection on 32-bit words.
#[derive(Clone)]
pub struct LinearInverter<F> {
    f: F,
    matrix: Matrix32,
    inverse: Matrix32,
}

impl<F: Fn(u32) -> u32> LinearInverter<F> {
    /// Derive and invert the matrix of `f`.
    ///
    /// # Errors
    /// [`crate::ShaProbeError::SingularMatrix`] if `f` is not a bijection
    /// (or not linear in a way that happens to be singular).
    pub fn new(f: F) -> Result<Self> {
        let matrix = Matrix32::from_linear_fn(&f);
        let inverse = matrix.invert()?;
        Ok(Self {
            f,
            matrix,
            inverse,
        })
    }

    /// The unique `x` with `f(x) == output`.
    #[must_use]
    pub fn invert(&self, output: u32) -> u32 {
        self.inverse.apply_word(output)
    }

    /// Evaluate the wrapped function.
    #[must_use]
    pub fn forward(&self, input: u32) -> u32 {
        (self.f)(input)
    }

    /// `f(input) == expected_output`.
    #[must_use]
    pub fn verify(&self, input: u32, expected_output: u32) -> bool {
        self.forward(input) == expected_output
    }

    /// Full forward-invert-forward check for one input.
    #[must_use]
    pub fn round_trip(&self, input: u32) -> RoundTripReport {
        let output = self.forward(input);
        let recovered = self.invert(output);
        RoundTripReport::new(input, output, recovered, self.forward(recovered))
    }

    /// Matrix of the wrapped function.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix32 {
        &self.matrix
    }

    /// Its inverse.
    #[must_use]
    pub const fn inverse(&self) -> &Matrix32 {
        &self.inverse
    }
}

impl LinearInverter<WordFn> {
    /// Inverter for Σ1.
    ///
    /// # Errors
    /// Never in practice; Σ1 is a bijection.
    pub fn sigma1() -> Result<Self> {
        Self::new(sigma1)
    }

    /// Inverter for Σ0.
    ///
    /// # Errors
    /// Never in practice; Σ0 is a bijection.
    pub fn sigma0() -> Result<Self> {
        Self::new(sigma0)
    }

    /// Inverter for the schedule σ0.
    ///
    /// # Errors
    /// Never in practice; σ0 is a bijection despite its shift term.
    pub fn gamma0() -> Result<Self> {
        Self::new(gamma0)
    }

    /// Inverter for the schedule σ1.
    ///
    /// # Errors
    /// Never in practice; σ1 is a bijection despite its shift term.
    pub fn gamma1() -> Result<Self> {
        Self::new(gamma1)
    }
}

impl<F> core::fmt::Debug for LinearInverter<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LinearInverter")
            .field("matrix", &self.matrix)
            .field("inverse", &self.inverse)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShaProbeError;

    #[test]
    fn test_sigma1_known_target() {
        let inv = LinearInverter::sigma1().unwrap();
        let x = inv.invert(0x6A3F_1FED);
        assert_eq!(sigma1(x), 0x6A3F_1FED);
        assert!(inv.verify(x, 0x6A3F_1FED));
        assert!(!inv.verify(x ^ 1, 0x6A3F_1FED));
    }

    #[test]
    fn test_all_mixers_invert() {
        for inv in [
            LinearInverter::sigma0().unwrap(),
            LinearInverter::sigma1().unwrap(),
            LinearInverter::gamma0().unwrap(),
            LinearInverter::gamma1().unwrap(),
        ] {
            for x in [0, 1, 0x8000_0000, 0xCAFE_BABE] {
                assert!(inv.round_trip(x).is_perfect());
            }
        }
    }

    #[test]
    fn test_closures_are_accepted() {
        let inv = LinearInverter::new(|x: u32| x.rotate_left(3) ^ x.rotate_left(9) ^ x).unwrap();
        assert_eq!(inv.forward(inv.invert(0x1234_5678)), 0x1234_5678);
    }

    #[test]
    fn test_non_bijective_function_is_singular() {
        // Drops bit 31, so row 31 of the matrix is zero
        let err = LinearInverter::new(|x: u32| x & 0x7FFF_FFFF).unwrap_err();
        assert_eq!(err, ShaProbeError::SingularMatrix { column: 31 });
        // rotr(x,1) ^ x has x = 0xFFFFFFFF in its kernel
        assert!(LinearInverter::new(|x: u32| x.rotate_right(1) ^ x).is_err());
    }
}
