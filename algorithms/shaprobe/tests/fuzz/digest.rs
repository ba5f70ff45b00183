use bolero::check;
use sha2::{Digest, Sha256};
use shaprobe::{compress_all, compress_all_traced, verify_digest, TraceRecorder};

#[test]
fn fuzz_digest_against_reference() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // REFERENCE
        // =============================================================================

        let expected: [u8; 32] = Sha256::digest(data).into();

        if let Ok(digest) = compress_all(data) {
            assert_eq!(digest, expected, "Digest mismatch against sha2");

            // =============================================================================
            // TRACED RUN
            // =============================================================================

            // A recording sink must not perturb the result
            let mut recorder = TraceRecorder::new();
            if let Ok(traced) = compress_all_traced(data, &mut recorder) {
                assert_eq!(traced, expected, "Tracing altered the digest");
                assert_eq!(recorder.events().len() % 64, 0);
            }

            // =============================================================================
            // VERIFICATION
            // =============================================================================

            assert_eq!(verify_digest(data, &expected).ok(), Some(true));
            let mut bad = expected;
            bad[31] ^= 0x01;
            assert_eq!(verify_digest(data, &bad).ok(), Some(false));
        }
    });
}
