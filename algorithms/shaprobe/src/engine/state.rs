//! Register State
//!
//! The eight working registers a..h and the forward round transition.

use core::fmt;

use crate::kernels::constants::{DIGEST_SIZE, H_INIT};
use crate::kernels::primitives::{ch, maj, sigma0, sigma1};

// =============================================================================
// REGISTERS
// =============================================================================

/// Names of the eight state registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Register {
    /// Receives `T1 + T2` each round.
    A,
    /// Previous `a`.
    B,
    /// Previous `b`.
    C,
    /// Previous `c`.
    D,
    /// Receives `d + T1` each round.
    E,
    /// Previous `e`.
    F,
    /// Previous `f`.
    G,
    /// Previous `g`.
    H,
}

impl Register {
    /// All registers in state order.
    pub const ALL: [Self; 8] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
    ];

    /// Position in the state tuple (a = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase register letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
            Self::D => 'd',
            Self::E => 'e',
            Self::F => 'f',
            Self::G => 'g',
            Self::H => 'h',
        }
    }

    /// Parse a register letter (case-insensitive).
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'a' => Some(Self::A),
            'b' => Some(Self::B),
            'c' => Some(Self::C),
            'd' => Some(Self::D),
            'e' => Some(Self::E),
            'f' => Some(Self::F),
            'g' => Some(Self::G),
            'h' => Some(Self::H),
            _ => None,
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Intermediate terms of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTerms {
    /// `h + Σ1(e) + ch(e, f, g) + K[t] + W[t]`
    pub t1: u32,
    /// `Σ0(a) + maj(a, b, c)`
    pub t2: u32,
}

/// Eight 32-bit registers, either a chaining value or a working state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct State8 {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
    pub f: u32,
    pub g: u32,
    pub h: u32,
}

impl Default for State8 {
    fn default() -> Self {
        Self::initial()
    }
}

impl State8 {
    /// The standard initial chaining value.
    #[must_use]
    pub const fn initial() -> Self {
        Self::from_words(H_INIT)
    }

    /// Build from `[a, b, c, d, e, f, g, h]`.
    #[must_use]
    pub const fn from_words(w: [u32; 8]) -> Self {
        Self {
            a: w[0],
            b: w[1],
            c: w[2],
            d: w[3],
            e: w[4],
            f: w[5],
            g: w[6],
            h: w[7],
        }
    }

    /// Registers as `[a, b, c, d, e, f, g, h]`.
    #[must_use]
    pub const fn to_words(self) -> [u32; 8] {
        [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h,
        ]
    }

    /// Read a register by name.
    #[must_use]
    pub const fn get(&self, register: Register) -> u32 {
        self.to_words()[register.index()]
    }

    /// The `T1`/`T2` terms this state produces under round constant `k`
    /// and schedule word `w`.
    #[must_use]
    pub const fn terms(&self, k: u32, w: u32) -> RoundTerms {
        let t1 = self
            .h
            .wrapping_add(sigma1(self.e))
            .wrapping_add(ch(self.e, self.f, self.g))
            .wrapping_add(k)
            .wrapping_add(w);
        let t2 = sigma0(self.a).wrapping_add(maj(self.a, self.b, self.c));
        RoundTerms { t1, t2 }
    }

    /// Apply precomputed round terms: `a' = T1 + T2`, `e' = d + T1`, the
    /// rest shift down one position.
    #[must_use]
    pub const fn shift(self, terms: RoundTerms) -> Self {
        Self {
            a: terms.t1.wrapping_add(terms.t2),
            b: self.a,
            c: self.b,
            d: self.c,
            e: self.d.wrapping_add(terms.t1),
            f: self.e,
            g: self.f,
            h: self.g,
        }
    }

    /// One full forward round.
    #[must_use]
    pub const fn round(self, k: u32, w: u32) -> Self {
        self.shift(self.terms(k, w))
    }

    /// Register-wise modular addition (the Davies-Meyer feed-forward).
    #[must_use]
    pub const fn feed_forward(self, working: Self) -> Self {
        Self {
            a: self.a.wrapping_add(working.a),
            b: self.b.wrapping_add(working.b),
            c: self.c.wrapping_add(working.c),
            d: self.d.wrapping_add(working.d),
            e: self.e.wrapping_add(working.e),
            f: self.f.wrapping_add(working.f),
            g: self.g.wrapping_add(working.g),
            h: self.h.wrapping_add(working.h),
        }
    }

    /// Big-endian concatenation of the eight registers.
    #[must_use]
    pub fn to_digest(self) -> [u8; DIGEST_SIZE] {
        let mut out = [0u8; DIGEST_SIZE];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.to_words()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl fmt::Display for State8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (reg, value)) in Register::ALL.iter().zip(self.to_words()).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{reg}={value:#010x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::constants::K;

    #[cfg(not(feature = "std"))]
    use alloc::string::ToString;

    #[test]
    fn test_round_shifts_untouched_registers() {
        let s = State8::from_words([1, 2, 3, 4, 5, 6, 7, 8]);
        let next = s.round(K[0], 0xDEAD_BEEF);
        assert_eq!((next.b, next.c, next.d), (1, 2, 3));
        assert_eq!((next.f, next.g, next.h), (5, 6, 7));
    }

    #[test]
    fn test_round_new_a_and_e_share_t1() {
        let s = State8::initial();
        let terms = s.terms(K[5], 0x1234_5678);
        let next = s.shift(terms);
        assert_eq!(next.a, terms.t1.wrapping_add(terms.t2));
        assert_eq!(next.e, s.d.wrapping_add(terms.t1));
        assert_eq!(next.a.wrapping_sub(next.e), terms.t2.wrapping_sub(s.d));
    }

    #[test]
    fn test_register_lookup_matches_fields() {
        let s = State8::from_words([10, 11, 12, 13, 14, 15, 16, 17]);
        for (i, reg) in Register::ALL.iter().enumerate() {
            assert_eq!(s.get(*reg), 10 + i as u32);
            assert_eq!(Register::from_letter(reg.letter()), Some(*reg));
        }
        assert_eq!(Register::from_letter('X'), None);
        assert_eq!(Register::from_letter('D'), Some(Register::D));
    }

    #[test]
    fn test_digest_is_big_endian_registers() {
        let digest = State8::from_words([0x0102_0304, 0, 0, 0, 0, 0, 0, 0xA0B0_C0D0]).to_digest();
        assert_eq!(&digest[..4], &[1, 2, 3, 4]);
        assert_eq!(&digest[28..], &[0xA0, 0xB0, 0xC0, 0xD0]);
    }

    #[test]
    fn test_display_lists_all_registers() {
        let text = State8::from_words([0, 1, 2, 3, 4, 5, 6, 0xFFFF_FFFF]).to_string();
        assert!(text.starts_with("a=0x00000000 b=0x00000001"));
        assert!(text.ends_with("h=0xffffffff"));
    }
}
