//! Number and literal token scanning.

use super::{Reject, Scan};

/// Scans a number token per the RFC 8259 grammar. `pos` sits on the leading
/// `-` or first digit; on success the returned cursor sits just past the
/// maximal valid number prefix.
///
/// No trailing delimiter is required; the enclosing scan decides whether
/// what follows is acceptable. The integer part must contain at least one
/// digit: a lone `0`, or a nonzero digit followed by a digit run.
pub(crate) fn number(input: &[u8], mut pos: usize) -> Scan {
    if input.get(pos) == Some(&b'-') {
        pos += 1;
    }
    match input.get(pos).copied() {
        Some(b'0') => pos += 1,
        Some(b'1'..=b'9') => {
            pos += 1;
            while input.get(pos).is_some_and(u8::is_ascii_digit) {
                pos += 1;
            }
        }
        _ => return Err(Reject::Grammar),
    }
    if input.get(pos) == Some(&b'.') {
        pos += 1;
        if !input.get(pos).is_some_and(u8::is_ascii_digit) {
            return Err(Reject::Grammar);
        }
        while input.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
    }
    if matches!(input.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(input.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        if !input.get(pos).is_some_and(u8::is_ascii_digit) {
            return Err(Reject::Grammar);
        }
        while input.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
    }
    Ok(pos)
}

/// Matches the fixed tail of a literal (`rue`, `alse`, `ull`) whose first
/// byte the dispatcher already consumed. Running past the end of input is a
/// mismatch like any other.
pub(crate) fn literal(input: &[u8], pos: usize, tail: &'static [u8]) -> Scan {
    match input.get(pos..pos + tail.len()) {
        Some(rest) if rest == tail => Ok(pos + tail.len()),
        _ => Err(Reject::Grammar),
    }
}
