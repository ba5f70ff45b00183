//! Digest Command
//!
//! Hex-in/hex-out digest, optionally cross-checked against `sha2`.

use super::MessageArgs;
use anyhow::Result;
use sha2::{Digest, Sha256};
use shaprobe::engine::padding::padded_len;
use shaprobe::kernels::constants::BLOCK_SIZE;

/// Print the digest of a message.
pub fn digest_message(message: &MessageArgs, check: bool) -> Result<()> {
    let bytes = message.bytes()?;
    let digest = shaprobe::compress_all(&bytes)?;
    let blocks = padded_len(bytes.len()) / BLOCK_SIZE;
    tracing::info!(len = bytes.len(), blocks, "digest computed");

    println!("{}", hex::encode(digest));

    if check {
        let reference: [u8; 32] = Sha256::digest(&bytes).into();
        println!("{}  (sha2)", hex::encode(reference));
        if digest != reference {
            anyhow::bail!("Digest does NOT match the reference implementation");
        }
        println!("match: OK");
    }

    Ok(())
}
