//! # Hex String Helpers
//!
//! Small string operations shared by the WWN decoders.
//!
//! All inputs are expected to be ASCII (hex digits and colons), which the
//! WWN validation guarantees. Slicing clamps to the string bounds instead of
//! panicking, so a short address simply yields a shorter (or empty) field.

/// Returns `s[start..end]`, clamped to the length of `s`.
pub fn slice(s: &str, start: usize, end: usize) -> &str {
    let len: usize = s.len();
    let end: usize = end.min(len);
    let start: usize = start.min(end);
    s.get(start..end).unwrap_or("")
}

/// Returns the last `n` characters of `s`, or all of `s` if it is shorter.
pub fn tail(s: &str, n: usize) -> &str {
    let start: usize = s.len().saturating_sub(n);
    s.get(start..).unwrap_or("")
}

/// Splits `s` into consecutive two-character chunks.
///
/// A trailing odd character is dropped.
pub fn pairs(s: &str) -> Vec<&str> {
    (0..s.len() / 2)
        .filter_map(|i| s.get(i * 2..i * 2 + 2))
        .collect()
}

/// Renders a hex string as base-2 digits without leading zeros.
///
/// Works nibble by nibble, so the input length is not bounded by any
/// integer width. Returns `None` if `s` contains a non-hex character.
/// An all-zero (or empty) input renders as `"0"`.
pub fn hex_to_binary(s: &str) -> Option<String> {
    let mut bits = String::with_capacity(s.len() * 4);
    for c in s.chars() {
        let nibble: u32 = c.to_digit(16)?;
        bits.push_str(&format!("{nibble:04b}"));
    }

    let trimmed: &str = bits.trim_start_matches('0');
    if trimmed.is_empty() {
        Some(String::from("0"))
    } else {
        Some(trimmed.to_string())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
