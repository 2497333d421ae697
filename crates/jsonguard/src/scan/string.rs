//! String token scanning and the shared length guard.

use bstr::ByteSlice;

use super::{Reject, Scan};
use crate::{error::ThreatError, options::Limit};

/// Scans a string token body. `pos` sits just past the opening quote; on
/// success the returned cursor sits just past the closing quote.
///
/// Lexical rules only; no length limit is enforced here. Raw control bytes
/// (below 0x20) are invalid, a backslash must introduce one of the eight
/// single-character escapes or `u` followed by exactly four hex digits, and
/// end of input before the closing quote is a failure.
pub(crate) fn scan(input: &[u8], mut pos: usize) -> Scan {
    while let Some(byte) = input.get(pos).copied() {
        match byte {
            0x00..=0x1F => return Err(Reject::Grammar),
            b'"' => return Ok(pos + 1),
            b'\\' => {
                pos += 1;
                match input.get(pos).copied() {
                    Some(b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't') => pos += 1,
                    Some(b'u') => {
                        pos += 1;
                        for _ in 0..4 {
                            if !input.get(pos).is_some_and(u8::is_ascii_hexdigit) {
                                return Err(Reject::Grammar);
                            }
                            pos += 1;
                        }
                    }
                    _ => return Err(Reject::Grammar),
                }
            }
            _ => pos += 1,
        }
    }
    Err(Reject::Grammar)
}

/// What a quoted span is being measured as; selects the error label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Subject {
    /// An object property name, measured against the key-length limit.
    Key,
    /// A string value, measured against the string-value-length limit.
    Value,
}

/// Applies a length limit to a quoted span.
///
/// `span` covers the whole token *including* both quote bytes. The content
/// length is its UTF-8 character count minus 2. That is valid only because the
/// quote characters are single-byte ASCII in UTF-8, which is the documented
/// contract of this guard, not an incidental detail. Multi-byte characters
/// count as one unit each.
pub(crate) fn guard(span: &[u8], limit: Limit, subject: Subject) -> Result<(), Reject> {
    if !limit.enabled {
        return Ok(());
    }
    let found = span.chars().count().saturating_sub(2);
    if found > limit.max {
        let err = match subject {
            Subject::Key => ThreatError::ObjectKeyLength {
                max: limit.max,
                found,
            },
            Subject::Value => ThreatError::StringValueLength {
                max: limit.max,
                found,
            },
        };
        return Err(err.into());
    }
    Ok(())
}
