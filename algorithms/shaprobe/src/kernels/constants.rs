//! SHA-256 Constants
//!
//! The round constants are the first 32 bits of the fractional parts of the
//! cube roots of the first 64 primes; the initial chaining value uses the
//! square roots of the first 8 primes (FIPS 180-4, §4.2.2 and §5.3.3).

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Block size for the compression function (in bytes).
pub const BLOCK_SIZE: usize = 64;

/// Number of 32-bit words in one message block.
pub const BLOCK_WORDS: usize = 16;

/// Length of the expanded message schedule.
pub const SCHEDULE_LEN: usize = 64;

/// Compression rounds per block.
pub const ROUNDS: usize = 64;

/// Output digest size (in bytes).
pub const DIGEST_SIZE: usize = 32;

/// Offset inside a block where the 64-bit length field starts once padding
/// has left exactly one length slot.
pub const LENGTH_OFFSET: usize = 56;

/// Padding marker byte (a single `1` bit followed by seven `0` bits).
pub const PADDING_MARKER: u8 = 0x80;

/// `W[14]` of the first block when the message fills words 0..=13 exactly.
pub const PADDING_MARKER_WORD: u32 = 0x8000_0000;

/// `W[15]` of the same block: the marker block carries no length yet.
pub const PADDING_TAIL_WORD: u32 = 0x0000_0000;

// =============================================================================
// ROUND CONSTANTS
// =============================================================================

/// Round constant table `K[0..64]`.
#[rustfmt::skip]
pub const K: [u32; ROUNDS] = [
    0x428a_2f98, 0x7137_4491, 0xb5c0_fbcf, 0xe9b5_dba5, 0x3956_c25b, 0x59f1_11f1, 0x923f_82a4, 0xab1c_5ed5,
    0xd807_aa98, 0x1283_5b01, 0x2431_85be, 0x550c_7dc3, 0x72be_5d74, 0x80de_b1fe, 0x9bdc_06a7, 0xc19b_f174,
    0xe49b_69c1, 0xefbe_4786, 0x0fc1_9dc6, 0x240c_a1cc, 0x2de9_2c6f, 0x4a74_84aa, 0x5cb0_a9dc, 0x76f9_88da,
    0x983e_5152, 0xa831_c66d, 0xb003_27c8, 0xbf59_7fc7, 0xc6e0_0bf3, 0xd5a7_9147, 0x06ca_6351, 0x1429_2967,
    0x27b7_0a85, 0x2e1b_2138, 0x4d2c_6dfc, 0x5338_0d13, 0x650a_7354, 0x766a_0abb, 0x81c2_c92e, 0x9272_2c85,
    0xa2bf_e8a1, 0xa81a_664b, 0xc24b_8b70, 0xc76c_51a3, 0xd192_e819, 0xd699_0624, 0xf40e_3585, 0x106a_a070,
    0x19a4_c116, 0x1e37_6c08, 0x2748_774c, 0x34b0_bcb5, 0x391c_0cb3, 0x4ed8_aa4a, 0x5b9c_ca4f, 0x682e_6ff3,
    0x748f_82ee, 0x78a5_636f, 0x84c8_7814, 0x8cc7_0208, 0x90be_fffa, 0xa450_6ceb, 0xbef9_a3f7, 0xc671_78f2,
];

// =============================================================================
// INITIAL CHAINING VALUE
// =============================================================================

/// Standard initial chaining value `H(0)`, registers a..h.
pub const H_INIT: [u32; 8] = [
    0x6a09_e667,
    0xbb67_ae85,
    0x3c6e_f372,
    0xa54f_f53a,
    0x510e_527f,
    0x9b05_688c,
    0x1f83_d9ab,
    0x5be0_cd19,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last_round_constants() {
        // cbrt(2) and cbrt(311), fractional parts
        assert_eq!(K[0], 0x428a_2f98);
        assert_eq!(K[63], 0xc671_78f2);
    }

    #[test]
    fn test_block_geometry() {
        assert_eq!(BLOCK_WORDS * 4, BLOCK_SIZE);
        assert_eq!(LENGTH_OFFSET + 8, BLOCK_SIZE);
        assert_eq!(PADDING_MARKER_WORD >> 24, u32::from(PADDING_MARKER));
    }
}
