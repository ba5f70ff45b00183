//! Trace Command
//!
//! Capture the working registers at a single (block, round) point.

use super::MessageArgs;
use anyhow::Result;
use shaprobe::codec::format_word;
use shaprobe::engine::padding::padded_len;
use shaprobe::kernels::constants::{BLOCK_SIZE, ROUNDS};
use shaprobe::{Register, RoundFilter};

/// Print the registers after `round` of `block`.
pub fn trace_message(message: &MessageArgs, block: usize, round: usize, all: bool) -> Result<()> {
    if round >= ROUNDS {
        anyhow::bail!("Round {round} out of range (0..{ROUNDS})");
    }

    let bytes = message.bytes()?;
    let mut filter = RoundFilter::new(block, round);
    let digest = shaprobe::compress_all_traced(&bytes, &mut filter)?;

    let Some(state) = filter.captured() else {
        let blocks = padded_len(bytes.len()) / BLOCK_SIZE;
        anyhow::bail!("Block {block} out of range: message pads to {blocks} block(s)");
    };

    println!("block {block}, round {round}");
    let shown = if all { &Register::ALL[..] } else { &Register::ALL[..4] };
    for &register in shown {
        println!("  {register}{round} = {}", format_word(state.get(register)));
    }
    println!("digest {}", hex::encode(digest));

    Ok(())
}
