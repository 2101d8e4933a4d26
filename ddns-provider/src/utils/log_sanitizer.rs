//! Log sanitization utilities
//!
//! Provider responses can be large (record listings) and occasionally echo
//! request parameters back. Bodies are cut before they reach debug/error logs.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Largest char boundary not after `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    s.char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= index)
        .last()
        .unwrap_or(0)
}

/// Truncate a string for safe logging.
///
/// Strings within [`TRUNCATE_LIMIT`] bytes are returned unchanged; longer ones keep
/// their prefix plus a note with the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let end = floor_char_boundary(s, TRUNCATE_LIMIT);
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}
