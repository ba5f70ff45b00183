//! Invert Command
//!
//! Exact preimages under a linear mixing function, one-shot or interactive.

use super::LinearFunction;
use anyhow::{Context, Result};
use shaprobe::codec::{format_word, parse_hex_word};
use shaprobe::linear::WordFn;
use shaprobe::LinearInverter;
use std::io::{self, BufRead, Write};

// =============================================================================
// ONE-SHOT
// =============================================================================

/// Invert each target word, or read targets from stdin when `interactive`.
pub fn invert_words(words: &[String], function: LinearFunction, interactive: bool) -> Result<()> {
    if words.is_empty() && !interactive {
        anyhow::bail!("No target words given (pass WORD... or --interactive)");
    }

    let inverter = function.inverter()?;

    for word in words {
        let target = parse_hex_word(word).with_context(|| format!("Invalid target: {word}"))?;
        report(&inverter, function, target)?;
    }

    if interactive {
        interactive_loop(&inverter, function)?;
    }

    Ok(())
}

fn report(inverter: &LinearInverter<WordFn>, function: LinearFunction, target: u32) -> Result<()> {
    let input = inverter.invert(target);
    let trip = inverter.round_trip(input);
    let name = function.name();

    println!("target          {}", format_word(target));
    println!("{name}^-1(target) {}", format_word(input));
    println!("{name}(input)    {}", format_word(trip.output));
    if inverter.verify(input, target) && trip.is_perfect() {
        println!("verified: OK");
        return Ok(());
    }

    println!(
        "verified: FAILED (output diff {} / {} bits, input diff {} / {} bits)",
        format_word(trip.output_diff()),
        trip.output_bit_errors(),
        format_word(trip.input_diff()),
        trip.input_bit_errors(),
    );
    anyhow::bail!("{name} inversion did not verify for {}", format_word(target))
}

// =============================================================================
// INTERACTIVE
// =============================================================================

fn interactive_loop(inverter: &LinearInverter<WordFn>, function: LinearFunction) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("target> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let line = line.trim();

        match line {
            "" => {}
            "quit" | "exit" | "q" => break,
            _ => match parse_hex_word(line) {
                Ok(target) => {
                    // A failed verification is reported, not fatal, here
                    if let Err(e) = report(inverter, function, target) {
                        tracing::warn!("{e}");
                    }
                }
                Err(e) => eprintln!("Error: {e}"),
            },
        }
        println!();
    }

    Ok(())
}
