use bolero::check;
use shaprobe::engine::padding::blocks;
use shaprobe::pad;

#[test]
fn fuzz_padding_layout() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let Ok(padded) = pad(data) else {
            return;
        };

        // Whole blocks, message untouched, marker right after it
        assert_eq!(padded.len() % 64, 0);
        assert_eq!(&padded[..data.len()], &data[..]);
        assert_eq!(padded[data.len()], 0x80);

        // Zeros up to the length field, then the bit length big-endian
        let tail = padded.len() - 8;
        assert!(padded[data.len() + 1..tail].iter().all(|&b| b == 0));
        let mut len_bytes = [0u8; 8];
        len_bytes.copy_from_slice(&padded[tail..]);
        assert_eq!(u64::from_be_bytes(len_bytes), data.len() as u64 * 8);

        assert_eq!(blocks(&padded).count(), padded.len() / 64);
    });
}
