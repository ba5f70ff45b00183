//! Shared types used across the shaprobe library.

use core::fmt;
use thiserror::Error;

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, ShaProbeError>;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Every failure the core can raise.
///
/// All of them are local and deterministic: retrying with the same input
/// reproduces the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShaProbeError {
    /// Malformed hex or byte input at a boundary.
    #[error("invalid input `{input}`: {reason}")]
    Validation {
        /// The rejected input, verbatim.
        input: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// The message bit-length does not fit the 64-bit length field.
    #[error("message of {len_bytes} bytes overflows the 64-bit length field")]
    Overflow {
        /// Byte length of the offending message.
        len_bytes: usize,
    },

    /// A backward-solve target cannot be met without breaking a constraint.
    #[error("target at round {round} conflicts: {reason}")]
    Conflict {
        /// Round index of the offending target.
        round: usize,
        /// Which constraint would be violated.
        reason: ConflictReason,
    },

    /// Gaussian elimination found no pivot; the matrix is singular.
    #[error("matrix is singular: no pivot in column {column}")]
    SingularMatrix {
        /// First column without a pivot.
        column: usize,
    },
}

impl ShaProbeError {
    pub(crate) const fn conflict(round: usize, reason: ConflictReason) -> Self {
        Self::Conflict { round, reason }
    }
}

/// Why a backward-solve target is unsatisfiable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictReason {
    /// The schedule word that would carry the target is already pinned
    /// (e.g. by the padding tail `W[14]`/`W[15]`).
    PinnedWord {
        /// Index of the pinned word.
        word: usize,
        /// Its fixed value.
        value: u32,
    },
    /// The word lies past the 16 free block words and is an expansion output.
    DerivedWord {
        /// Index of the derived word.
        word: usize,
    },
    /// Target rounds must be strictly increasing.
    OutOfOrder {
        /// Round of the target preceding this one.
        previous: usize,
    },
    /// Two targets demand different values for the same register.
    Contradiction {
        /// Value demanded first.
        first: u32,
        /// Value demanded second.
        second: u32,
    },
    /// The target reaches back before round 0 and disagrees with the
    /// initial state.
    InitialState {
        /// Value held by the initial state.
        actual: u32,
        /// Value the target asks for.
        wanted: u32,
    },
    /// Round index past the last compression round.
    RoundOutOfRange,
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PinnedWord { word, value } => {
                write!(f, "schedule word W[{word}] is pinned to {value:#010x}")
            }
            Self::DerivedWord { word } => {
                write!(f, "schedule word W[{word}] is derived by expansion, not free")
            }
            Self::OutOfOrder { previous } => {
                write!(f, "rounds must strictly increase (previous target at round {previous})")
            }
            Self::Contradiction { first, second } => {
                write!(f, "register required to be both {first:#010x} and {second:#010x}")
            }
            Self::InitialState { actual, wanted } => write!(
                f,
                "register precedes round 0 and holds {actual:#010x}, not {wanted:#010x}"
            ),
            Self::RoundOutOfRange => f.write_str("round index exceeds the 64 compression rounds"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::string::ToString;

    #[test]
    fn test_conflict_message_names_the_word() {
        let err = ShaProbeError::conflict(
            14,
            ConflictReason::PinnedWord {
                word: 14,
                value: 0x8000_0000,
            },
        );
        assert_eq!(
            err.to_string(),
            "target at round 14 conflicts: schedule word W[14] is pinned to 0x80000000"
        );
    }

    #[test]
    fn test_singular_message() {
        let err = ShaProbeError::SingularMatrix { column: 3 };
        assert_eq!(err.to_string(), "matrix is singular: no pivot in column 3");
    }
}
