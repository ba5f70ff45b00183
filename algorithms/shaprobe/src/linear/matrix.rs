//! GF(2) Linear Algebra on 32-bit Words
//!
//! Bit convention, used everywhere in this module: bit `i` of a vector is
//! `(word >> i) & 1`, i.e. index 0 is the least significant bit. Matrix
//! entry `(row j, column i)` is bit `i` of row `j`, so `M · x` sets output
//! bit `j` to the parity of `row_j & x`.

use core::fmt;

use crate::types::{Result, ShaProbeError};

/// Dimension of every vector and matrix here.
pub const DIM: usize = 32;

// =============================================================================
// BIT VECTOR
// =============================================================================

/// 32 binary digits, index 0 = least significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitVector32(u32);

impl BitVector32 {
    /// All zeros.
    pub const ZERO: Self = Self(0);

    /// Reinterpret a word.
    #[must_use]
    pub const fn from_word(word: u32) -> Self {
        Self(word)
    }

    /// The word with these bits.
    #[must_use]
    pub const fn to_word(self) -> u32 {
        self.0
    }

    /// Unit vector `e_i`.
    #[must_use]
    pub const fn unit(i: usize) -> Self {
        Self(1 << i)
    }

    /// Bit `i`.
    #[must_use]
    pub const fn bit(self, i: usize) -> bool {
        (self.0 >> i) & 1 == 1
    }

    /// Copy with bit `i` set to `value`.
    #[must_use]
    pub const fn with_bit(self, i: usize, value: bool) -> Self {
        if value {
            Self(self.0 | (1 << i))
        } else {
            Self(self.0 & !(1 << i))
        }
    }

    /// Build from explicit digits, `bits[0]` being the least significant.
    #[must_use]
    pub fn from_bits(bits: [bool; DIM]) -> Self {
        bits.iter()
            .enumerate()
            .fold(Self::ZERO, |v, (i, &b)| v.with_bit(i, b))
    }

    /// Digits in index order.
    #[must_use]
    pub fn to_bits(self) -> [bool; DIM] {
        core::array::from_fn(|i| self.bit(i))
    }

    /// Inner product over GF(2).
    #[must_use]
    pub const fn dot(self, other: Self) -> bool {
        (self.0 & other.0).count_ones() & 1 == 1
    }

    /// Vector addition over GF(2).
    #[must_use]
    pub const fn xor(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }

    /// Hamming weight.
    #[must_use]
    pub const fn weight(self) -> u32 {
        self.0.count_ones()
    }
}

impl From<u32> for BitVector32 {
    fn from(word: u32) -> Self {
        Self(word)
    }
}

impl From<BitVector32> for u32 {
    fn from(v: BitVector32) -> Self {
        v.0
    }
}

// =============================================================================
// MATRIX
// =============================================================================

/// 32×32 binary matrix, one [`BitVector32`] per row.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix32 {
    rows: [BitVector32; DIM],
}

impl Matrix32 {
    /// All zeros.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            rows: [BitVector32::ZERO; DIM],
        }
    }

    /// `I(32)`.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            rows: core::array::from_fn(BitVector32::unit),
        }
    }

    /// Wrap explicit rows.
    #[must_use]
    pub const fn from_rows(rows: [BitVector32; DIM]) -> Self {
        Self { rows }
    }

    /// Matrix of a GF(2)-linear map, found by probing it with each unit
    /// vector: column `i` is `f(e_i)`.
    ///
    /// Linearity is assumed, not checked. For a map built with modular
    /// addition the result only agrees with `f` on the basis vectors.
    #[must_use]
    pub fn from_linear_fn<F: Fn(u32) -> u32>(f: F) -> Self {
        let mut m = Self::zero();
        for i in 0..DIM {
            let column = BitVector32::from_word(f(BitVector32::unit(i).to_word()));
            for j in 0..DIM {
                if column.bit(j) {
                    m.rows[j] = m.rows[j].with_bit(i, true);
                }
            }
        }
        m
    }

    /// Row `j`.
    #[must_use]
    pub const fn row(&self, j: usize) -> BitVector32 {
        self.rows[j]
    }

    /// All rows.
    #[must_use]
    pub const fn rows(&self) -> &[BitVector32; DIM] {
        &self.rows
    }

    /// Entry `(row, col)`.
    #[must_use]
    pub const fn get(&self, row: usize, col: usize) -> bool {
        self.rows[row].bit(col)
    }

    /// `M · x`.
    #[must_use]
    pub fn apply(&self, x: BitVector32) -> BitVector32 {
        self.rows
            .iter()
            .enumerate()
            .fold(BitVector32::ZERO, |out, (j, row)| out.with_bit(j, row.dot(x)))
    }

    /// `M · x` on plain words.
    #[must_use]
    pub fn apply_word(&self, x: u32) -> u32 {
        self.apply(BitVector32::from_word(x)).to_word()
    }

    /// `self · rhs`: row `j` is the XOR of the rows of `rhs` selected by
    /// row `j` of `self`.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut out = Self::zero();
        for (dst, row) in out.rows.iter_mut().zip(self.rows.iter()) {
            *dst = (0..DIM)
                .filter(|&i| row.bit(i))
                .fold(BitVector32::ZERO, |acc, i| acc.xor(rhs.rows[i]));
        }
        out
    }

    /// Inverse by Gauss-Jordan elimination on `[M | I]`.
    ///
    /// For each column, the first row at or below the diagonal with a 1 is
    /// swapped into place and XORed into every other row holding a 1 there.
    ///
    /// # Errors
    /// [`ShaProbeError::SingularMatrix`] naming the first column without a pivot.
    pub fn invert(&self) -> Result<Self> {
        let mut left = self.rows;
        let mut right = Self::identity().rows;

        for col in 0..DIM {
            let pivot = (col..DIM)
                .find(|&r| left[r].bit(col))
                .ok_or(ShaProbeError::SingularMatrix { column: col })?;
            if pivot != col {
                left.swap(pivot, col);
                right.swap(pivot, col);
            }
            let (pivot_left, pivot_right) = (left[col], right[col]);
            for row in 0..DIM {
                if row != col && left[row].bit(col) {
                    left[row] = left[row].xor(pivot_left);
                    right[row] = right[row].xor(pivot_right);
                }
            }
        }
        debug_assert_eq!(Self::from_rows(left), Self::identity());
        Ok(Self::from_rows(right))
    }

    /// Rank over GF(2).
    #[must_use]
    pub fn rank(&self) -> usize {
        let mut rows = self.rows;
        let mut rank = 0;
        for col in 0..DIM {
            let Some(pivot) = (rank..DIM).find(|&r| rows[r].bit(col)) else {
                continue;
            };
            rows.swap(pivot, rank);
            let p = rows[rank];
            for (r, row) in rows.iter_mut().enumerate() {
                if r != rank && row.bit(col) {
                    *row = row.xor(p);
                }
            }
            rank += 1;
        }
        rank
    }

    /// True for `I(32)`.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl Default for Matrix32 {
    fn default() -> Self {
        Self::zero()
    }
}

/// One line per row, column 0 leftmost.
impl fmt::Display for Matrix32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (j, row) in self.rows.iter().enumerate() {
            if j > 0 {
                f.write_str("\n")?;
            }
            for i in 0..DIM {
                f.write_str(if row.bit(i) { "1" } else { "0" })?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Matrix32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Matrix32[")?;
        for (j, row) in self.rows.iter().enumerate() {
            if j > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:#010x}", row.to_word())?;
        }
        f.write_str("]")
    }
}
