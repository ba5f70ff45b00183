//! Hex Boundary
//!
//! Parsing and formatting for the text-facing tools. Words are rendered as
//! lowercase `0x`-prefixed, eight digits.

use crate::types::{Result, ShaProbeError};

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, string::ToString, vec::Vec};

/// Decode a hex message (whitespace around it ignored, optional `0x`).
///
/// # Errors
/// [`ShaProbeError::Validation`] on odd length or non-hex characters.
pub fn parse_hex_message(text: &str) -> Result<Vec<u8>> {
    let trimmed = strip_prefix(text.trim());
    hex::decode(trimmed).map_err(|e| ShaProbeError::Validation {
        input: text.to_string(),
        reason: match e {
            hex::FromHexError::OddLength => "odd number of hex digits",
            hex::FromHexError::InvalidHexCharacter { .. } => "non-hex character",
            hex::FromHexError::InvalidStringLength => "invalid length",
        },
    })
}

/// Parse a 32-bit word written in hex (optional `0x`, optional `_` separators).
///
/// # Errors
/// [`ShaProbeError::Validation`] if empty, non-hex, or wider than 32 bits.
pub fn parse_hex_word(text: &str) -> Result<u32> {
    let digits: String = strip_prefix(text.trim())
        .chars()
        .filter(|&c| c != '_')
        .collect();
    let reject = |reason| ShaProbeError::Validation {
        input: text.to_string(),
        reason,
    };
    if digits.is_empty() {
        return Err(reject("empty word"));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(reject("non-hex character"));
    }
    u32::from_str_radix(&digits, 16).map_err(|_| reject("wider than 32 bits"))
}

/// `0x` + eight lowercase hex digits.
#[must_use]
pub fn format_word(word: u32) -> String {
    format!("{word:#010x}")
}

/// Lowercase hex of a digest or any byte string.
#[must_use]
pub fn format_bytes(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

fn strip_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_accepts_prefix_and_whitespace() {
        assert_eq!(parse_hex_message("  616263\n").unwrap(), b"abc");
        assert_eq!(parse_hex_message("0x6162").unwrap(), b"ab");
        assert_eq!(parse_hex_message("").unwrap(), b"");
    }

    #[test]
    fn test_message_rejections() {
        assert!(matches!(
            parse_hex_message("abc"),
            Err(ShaProbeError::Validation {
                reason: "odd number of hex digits",
                ..
            })
        ));
        assert!(matches!(
            parse_hex_message("zz"),
            Err(ShaProbeError::Validation {
                reason: "non-hex character",
                ..
            })
        ));
    }

    #[test]
    fn test_word_forms() {
        assert_eq!(parse_hex_word("0x6A3F1FED").unwrap(), 0x6A3F_1FED);
        assert_eq!(parse_hex_word("dead_beef").unwrap(), 0xDEAD_BEEF);
        assert_eq!(parse_hex_word("0X1").unwrap(), 1);
        assert!(parse_hex_word("0x").is_err());
        assert!(parse_hex_word("-1").is_err());
        assert!(parse_hex_word("1_0000_0000").is_err());
    }

    #[test]
    fn test_formatting_is_lowercase_padded() {
        assert_eq!(format_word(0xAB), "0x000000ab");
        assert_eq!(format_bytes(&[0xBA, 0x78]), "ba78");
    }
}
