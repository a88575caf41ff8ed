//! Hex formatting for failure diagnostics.

use std::fmt::Write;

/// Formats octets as a space-separated lowercase hex string.
///
/// At most `max` octets are shown; longer input gets an elision tail with
/// the count of hidden octets.
///
/// # Example
///
/// ```
/// use dirtext_octets::hex;
///
/// assert_eq!(hex(&[0x01, 0x02, 0x0a, 0xff], 16), "01 02 0a ff");
/// assert_eq!(hex(&[], 16), "");
/// ```
pub fn hex(octets: &[u8], max: usize) -> String {
    let shown = octets.len().min(max);
    let mut out = String::with_capacity(shown * 3 + 16);
    for (i, octet) in octets.iter().take(shown).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{octet:02x}");
    }
    if octets.len() > shown {
        let _ = write!(out, " .. ({} more)", octets.len() - shown);
    }
    out
}

/// Formats the octets around `position` as hex, bracketing the octet at
/// `position` itself.
///
/// `radius` octets are shown on each side; elided neighbours are marked
/// with `..`. Failure reports embed this so an operator can see the
/// offending octet in context without dumping the whole value.
///
/// # Example
///
/// ```
/// use dirtext_octets::hex_window;
///
/// assert_eq!(hex_window(&[0x74, 0x65, 0xe2, 0x73, 0x74], 2, 1), ".. 65 [e2] 73 ..");
/// ```
pub fn hex_window(octets: &[u8], position: usize, radius: usize) -> String {
    if octets.is_empty() {
        return String::new();
    }
    let start = position.saturating_sub(radius).min(octets.len());
    let end = position.saturating_add(radius + 1).min(octets.len());
    let mut parts = Vec::with_capacity(end - start + 2);
    if start > 0 {
        parts.push("..".to_string());
    }
    for (i, octet) in octets[start..end].iter().enumerate() {
        if start + i == position {
            parts.push(format!("[{octet:02x}]"));
        } else {
            parts.push(format!("{octet:02x}"));
        }
    }
    if end < octets.len() {
        parts.push("..".to_string());
    }
    parts.join(" ")
}
