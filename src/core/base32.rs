//! Lenient Base32 decoding for shared secrets.
//!
//! Secrets are typed or pasted by humans, so the decoder tolerates the
//! grouping separators issuers like to add: spaces and hyphens are
//! stripped, input is case-insensitive, and characters outside the
//! RFC 4648 alphabet are skipped instead of rejected. Trailing bits that
//! do not fill a whole byte are discarded, which makes the decoder
//! agnostic to `=` padding.

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Decode a Base32 secret into raw key bytes.
///
/// An empty or entirely-invalid input yields an empty vector, which is
/// the designated "no usable key" signal for code generation.
pub fn decode(input: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() * 5 / 8);
    let mut buffer: u64 = 0;
    let mut bits: u32 = 0;

    for c in input.chars() {
        if c == ' ' || c == '-' {
            continue;
        }
        let c = c.to_ascii_uppercase();
        let Some(val) = ALPHABET.iter().position(|&a| a as char == c) else {
            continue;
        };

        buffer = (buffer << 5) | val as u64;
        bits += 5;

        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
    }

    out
}
