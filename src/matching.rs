//! Hex pattern matching predicates
//!
//! Stateless helpers for matching device command/response frames against
//! hex-encoded references. Two flavors:
//! - bit-flags: every bit set in the mask must be set in the value
//! - bit-pattern: positional hex-digit equality with wildcard positions
//!
//! Whitespace in either argument is ignored, so patterns may be written
//! in readable groups ("DE AD BE EF").

use tracing::trace;

/// Check that every bit set in `bitflags` is also set in `value`
///
/// Both arguments are hex strings. Returns false when either fails to
/// decode or the decoded byte lengths differ.
pub fn hex_matches_bitflags(value: &str, bitflags: &str) -> bool {
    let value = strip_whitespace(value);
    let bitflags = strip_whitespace(bitflags);

    let value_bytes = match hex::decode(&value) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };
    let flag_bytes = match hex::decode(&bitflags) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };

    if value_bytes.len() != flag_bytes.len() {
        trace!(
            "bitflags length mismatch: {} vs {} bytes",
            value_bytes.len(),
            flag_bytes.len()
        );
        return false;
    }

    value_bytes
        .iter()
        .zip(&flag_bytes)
        .all(|(byte, flags)| byte & flags == *flags)
}

/// Compare a hex string against a pattern with wildcard positions
///
/// Comparison is character-wise (one hex digit, i.e. one nibble, per
/// position), case-insensitive. Pattern characters `x` and `_` match any
/// digit. Lengths must match exactly after whitespace removal.
pub fn hex_matches_bitpattern(value: &str, bitpattern: &str) -> bool {
    let value = strip_whitespace(value);
    let bitpattern = strip_whitespace(bitpattern);

    if value.len() != bitpattern.len() {
        return false;
    }

    value
        .chars()
        .zip(bitpattern.chars())
        .all(|(digit, pattern)| matches!(pattern, 'x' | '_') || digit.eq_ignore_ascii_case(&pattern))
}

fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}
