//! Public Digest API
//!
//! One-shot entry points: pad, fold every block from the standard initial
//! value, serialise.

use crate::engine::compress::CompressionEngine;
use crate::engine::padding::{blocks, pad};
use crate::engine::state::State8;
use crate::engine::trace::{NoTrace, TraceSink};
use crate::kernels::constants::DIGEST_SIZE;
use crate::types::Result;
use subtle::ConstantTimeEq;

// =============================================================================
// DIGEST
// =============================================================================

/// Compute the SHA-256 digest of `message`.
///
/// # Errors
/// [`crate::ShaProbeError::Overflow`] if the bit length does not fit in 64 bits.
///
/// # Example
/// ```rust
/// let digest = shaprobe::compress_all(b"abc")?;
/// assert_eq!(digest[0], 0xba);
/// # Ok::<(), shaprobe::ShaProbeError>(())
/// ```
#[inline]
pub fn compress_all(message: &[u8]) -> Result<[u8; DIGEST_SIZE]> {
    compress_all_traced(message, &mut NoTrace)
}

/// Compute the digest while reporting every round of every block to `sink`.
///
/// # Errors
/// Same as [`compress_all`].
///
/// # Example
/// ```rust
/// use shaprobe::RoundFilter;
///
/// let mut probe = RoundFilter::new(0, 13);
/// shaprobe::compress_all_traced(b"abc", &mut probe)?;
/// assert!(probe.captured().is_some());
/// # Ok::<(), shaprobe::ShaProbeError>(())
/// ```
pub fn compress_all_traced<S: TraceSink>(
    message: &[u8],
    sink: &mut S,
) -> Result<[u8; DIGEST_SIZE]> {
    Ok(chain_all(State8::initial(), message, sink)?.to_digest())
}

/// Pad `message` and fold all its blocks starting from `chaining`.
///
/// Returns the final chaining value rather than its serialisation.
///
/// # Errors
/// Same as [`compress_all`].
pub fn chain_all<S: TraceSink>(chaining: State8, message: &[u8], sink: &mut S) -> Result<State8> {
    let padded = pad(message)?;
    let mut engine = CompressionEngine::with_chaining(chaining);
    for block in blocks(&padded) {
        engine.compress(&block, sink);
    }
    Ok(engine.chaining())
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Check a digest in constant time.
///
/// # Errors
/// Same as [`compress_all`].
///
/// # Example
/// ```rust
/// let digest = shaprobe::compress_all(b"data")?;
/// assert!(shaprobe::verify_digest(b"data", &digest)?);
/// # Ok::<(), shaprobe::ShaProbeError>(())
/// ```
pub fn verify_digest(message: &[u8], expected: &[u8; DIGEST_SIZE]) -> Result<bool> {
    let computed = compress_all(message)?;
    Ok(computed.ct_eq(expected).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_rejects_flipped_bit() {
        let mut digest = compress_all(b"payload").unwrap();
        assert!(verify_digest(b"payload", &digest).unwrap());
        digest[31] ^= 1;
        assert!(!verify_digest(b"payload", &digest).unwrap());
    }

    #[test]
    fn test_traced_and_plain_digest_agree() {
        let mut rounds = 0usize;
        let traced = compress_all_traced(&[0x5Au8; 130], &mut |_: &crate::RoundEvent| {
            rounds += 1;
        })
        .unwrap();
        assert_eq!(traced, compress_all(&[0x5Au8; 130]).unwrap());
        // 130 bytes pad to three blocks
        assert_eq!(rounds, 3 * 64);
    }
}
