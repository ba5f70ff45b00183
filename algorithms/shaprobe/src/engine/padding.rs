//! Message Padding
//!
//! `message || 0x80 || 0x00* || bitlen_be64`, zero run chosen so the length
//! field ends on a block boundary.

use crate::kernels::constants::{BLOCK_SIZE, BLOCK_WORDS, LENGTH_OFFSET, PADDING_MARKER};
use crate::types::{Result, ShaProbeError};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Sixteen big-endian words, the unit one compression call consumes.
pub type MessageBlock = [u32; BLOCK_WORDS];

/// Number of zero bytes between the marker and the length field.
#[inline]
#[must_use]
pub const fn zero_pad_len(message_len: usize) -> usize {
    (BLOCK_SIZE + LENGTH_OFFSET - (message_len + 1) % BLOCK_SIZE) % BLOCK_SIZE
}

/// Total padded length for a message of `message_len` bytes.
#[inline]
#[must_use]
pub const fn padded_len(message_len: usize) -> usize {
    message_len + 1 + zero_pad_len(message_len) + 8
}

/// Message length in bits as written into the length field, or `None`
/// when it does not fit in 64 bits.
#[inline]
#[must_use]
pub const fn bit_len(message_len: usize) -> Option<u64> {
    (message_len as u64).checked_mul(8)
}

/// Pad `message` to a whole number of blocks.
///
/// # Errors
/// [`ShaProbeError::Overflow`] when `8 * message.len()` does not fit in 64 bits.
pub fn pad(message: &[u8]) -> Result<Vec<u8>> {
    let bits = bit_len(message.len()).ok_or(ShaProbeError::Overflow {
        len_bytes: message.len(),
    })?;

    let mut padded = Vec::with_capacity(padded_len(message.len()));
    padded.extend_from_slice(message);
    padded.push(PADDING_MARKER);
    padded.resize(padded.len() + zero_pad_len(message.len()), 0);
    padded.extend_from_slice(&bits.to_be_bytes());

    debug_assert!(padded.len().is_multiple_of(BLOCK_SIZE));
    Ok(padded)
}

/// Split padded bytes into big-endian message blocks.
///
/// A trailing partial block is ignored; feed this the output of [`pad`].
pub fn blocks(padded: &[u8]) -> impl Iterator<Item = MessageBlock> + '_ {
    padded.chunks_exact(BLOCK_SIZE).map(block_from_bytes)
}

/// Read one 64-byte chunk as sixteen big-endian words.
#[must_use]
pub fn block_from_bytes(chunk: &[u8]) -> MessageBlock {
    let mut block = [0u32; BLOCK_WORDS];
    for (word, bytes) in block.iter_mut().zip(chunk.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    block
}

/// Serialise words back into big-endian bytes.
#[must_use]
pub fn words_to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}
