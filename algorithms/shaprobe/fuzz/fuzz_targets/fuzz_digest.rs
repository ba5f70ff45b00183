#![no_main]

use libfuzzer_sys::fuzz_target;
use sha2::{Digest, Sha256};
use shaprobe::{compress_all, compress_all_traced, pad, verify_digest, RoundFilter};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // 1. PADDING LAWS
    // =============================================================================

    let padded = pad(data).expect("fuzz inputs are far below the length limit");
    assert_eq!(padded.len() % 64, 0, "Padded length not block aligned");

    let mut len_field = [0u8; 8];
    len_field.copy_from_slice(&padded[padded.len() - 8..]);
    assert_eq!(
        u64::from_be_bytes(len_field),
        data.len() as u64 * 8,
        "Length field does not encode the bit length"
    );

    // =============================================================================
    // 2. DIGEST VS REFERENCE
    // =============================================================================

    let expected: [u8; 32] = Sha256::digest(data).into();
    let digest = compress_all(data).expect("padding succeeded above");
    assert_eq!(digest, expected, "Digest mismatch against sha2");

    // =============================================================================
    // 3. OBSERVATION IS SIDE-EFFECT FREE
    // =============================================================================

    let mut filter = RoundFilter::new(0, 13);
    let traced = compress_all_traced(data, &mut filter).expect("padding succeeded above");
    assert_eq!(traced, digest, "Trace sink altered the digest");
    assert!(filter.captured().is_some(), "Block 0 always exists");

    assert_eq!(verify_digest(data, &digest).ok(), Some(true));
});
