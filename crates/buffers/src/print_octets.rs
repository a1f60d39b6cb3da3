//! Debug utility for printing octets as hex strings.

/// Formats a byte slice as a space separated hex string.
///
/// At most `max` bytes are shown; the rest is summarized as a count.
///
/// # Example
///
/// ```
/// use mpack_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0xa3, 0x61, 0x62, 0x63], 16), "a3 61 62 63");
/// assert_eq!(print_octets(&[0xc0, 0xc2, 0xc3], 2), "c0 c2... (1 more)");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let shown: Vec<String> = octets
        .iter()
        .take(max)
        .map(|byte| format!("{:02x}", byte))
        .collect();
    let mut result = shown.join(" ");

    if octets.len() > max {
        result.push_str(&format!("... ({} more)", octets.len() - max));
    }

    result
}

/// Formats a byte slice as a hex string showing at most 32 bytes.
pub fn print_octets_default(octets: &[u8]) -> String {
    print_octets(octets, 32)
}
