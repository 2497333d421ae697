//! The single-pass grammar scan and its embedded limit checks.
//!
//! Overview
//! - Validation is a recursive descent over the raw bytes: a dispatcher picks
//!   the value kind from the first significant byte, container scans drive
//!   the `{...}` / `[...]` productions and recurse back into the dispatcher
//!   for member and element values, and the leaf scanners
//!   ([`string`], [`scalar`]) consume one token each.
//! - Every function takes the input slice plus a cursor and returns the
//!   cursor just past what it consumed. The cursor is monotonically
//!   non-decreasing; nothing is ever rewound.
//! - Nesting depth is threaded by value: a container scan receives the depth
//!   it occupies and passes `depth` unchanged to its children's values, which
//!   pass `depth + 1` when they open a container of their own. There is no
//!   shared counter to unwind on failure.
//!
//! Failure signalling
//! - Grammar mismatches carry no detail ([`Reject::Grammar`]); they become
//!   [`ThreatError::MalformedJson`] only in [`Verifier::verify_bytes`], the
//!   single place that classification is invented.
//! - Limit violations are fully formed where they are detected and abort the
//!   scan immediately. Whichever violation occurs first in left-to-right
//!   scan order wins; nothing is aggregated.

mod scalar;
mod string;

#[cfg(test)]
mod tests;

use crate::{
    error::ThreatError,
    options::{Limits, VerifierBuilder},
    scan::string::Subject,
};

/// Why a scan stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reject {
    /// The input does not match the grammar. No specific cause is recorded;
    /// the top level substitutes the malformed-JSON classification.
    Grammar,
    /// A structural limit was violated. Carries the finished error.
    Threat(ThreatError),
}

impl From<ThreatError> for Reject {
    fn from(err: ThreatError) -> Self {
        Reject::Threat(err)
    }
}

/// Cursor position just past a successfully consumed region, or the reason
/// the scan stopped.
pub(crate) type Scan = Result<usize, Reject>;

/// A configured JSON validator.
///
/// Immutable after construction, so a single value may be shared freely
/// across threads; every call carries its own cursor and depth state. Build
/// one with [`Verifier::builder`], or use [`Verifier::default`] for plain
/// syntax validation with every limit disabled.
#[derive(Debug, Clone, Default)]
pub struct Verifier {
    limits: Limits,
}

impl Verifier {
    /// Starts building a verifier. All limits start disabled.
    #[must_use]
    pub fn builder() -> VerifierBuilder {
        VerifierBuilder::default()
    }

    pub(crate) fn with_limits(limits: Limits) -> Self {
        Verifier { limits }
    }

    /// Validates that `input` is one well-formed JSON value within the
    /// configured limits.
    ///
    /// # Errors
    ///
    /// [`ThreatError::MalformedJson`] if the input does not match the JSON
    /// grammar, or the specific limit variant for the first violation
    /// encountered in scan order.
    pub fn verify_bytes(&self, input: &[u8]) -> Result<(), ThreatError> {
        match self.document(input) {
            Ok(()) => Ok(()),
            Err(Reject::Grammar) => Err(ThreatError::MalformedJson),
            Err(Reject::Threat(err)) => Err(err),
        }
    }

    /// Validates `input` as its UTF-8 byte encoding; see
    /// [`verify_bytes`](Self::verify_bytes).
    ///
    /// # Errors
    ///
    /// Same contract as [`verify_bytes`](Self::verify_bytes).
    pub fn verify_str(&self, input: &str) -> Result<(), ThreatError> {
        self.verify_bytes(input.as_bytes())
    }

    /// Top-level driver: exactly one value, surrounded only by insignificant
    /// whitespace.
    fn document(&self, input: &[u8]) -> Result<(), Reject> {
        let pos = skip_ws(input, 0);
        let pos = self.value(input, pos, 0)?;
        let pos = skip_ws(input, pos);
        if pos == input.len() {
            Ok(())
        } else {
            Err(Reject::Grammar)
        }
    }

    /// Consumes exactly one value starting at the first significant byte at
    /// or after `pos`. `depth` is the number of containers currently open.
    fn value(&self, input: &[u8], pos: usize, depth: usize) -> Scan {
        let pos = skip_ws(input, pos);
        match input.get(pos).copied() {
            Some(b'{') => {
                self.enter_container(depth)?;
                self.object(input, pos + 1, depth + 1)
            }
            Some(b'[') => {
                self.enter_container(depth)?;
                self.array(input, pos + 1, depth + 1)
            }
            Some(b'"') => {
                let end = string::scan(input, pos + 1)?;
                string::guard(
                    &input[pos..end],
                    self.limits.string_value_length,
                    Subject::Value,
                )?;
                Ok(end)
            }
            Some(b'-' | b'0'..=b'9') => scalar::number(input, pos),
            Some(b't') => scalar::literal(input, pos + 1, b"rue"),
            Some(b'f') => scalar::literal(input, pos + 1, b"alse"),
            Some(b'n') => scalar::literal(input, pos + 1, b"ull"),
            _ => Err(Reject::Grammar),
        }
    }

    /// The depth check fires before the counter moves: a container that
    /// would sit at `depth + 1` is rejected once the current depth has
    /// reached the configured maximum, so a container at exactly the maximum
    /// depth is still allowed.
    fn enter_container(&self, depth: usize) -> Result<(), Reject> {
        let limit = self.limits.container_depth;
        if limit.exceeded_by(depth + 1) {
            return Err(ThreatError::ContainerDepth {
                max: limit.max,
                found: depth + 1,
            }
            .into());
        }
        Ok(())
    }

    /// Scans an object body. `pos` sits just past the opening `{`; `depth`
    /// counts this object.
    fn object(&self, input: &[u8], mut pos: usize, depth: usize) -> Scan {
        let mut entries = 0usize;
        pos = skip_ws(input, pos);
        if input.get(pos) == Some(&b'}') {
            return Ok(pos + 1);
        }
        loop {
            if input.get(pos) != Some(&b'"') {
                return Err(Reject::Grammar);
            }
            let key_end = string::scan(input, pos + 1)?;

            // The entry count is checked as soon as the key has scanned,
            // before the key-length guard. On a violation no further object
            // content is inspected.
            entries += 1;
            let entry_limit = self.limits.object_entry_count;
            if entry_limit.exceeded_by(entries) {
                return Err(ThreatError::ObjectEntryCount {
                    max: entry_limit.max,
                    found: entries,
                }
                .into());
            }
            string::guard(
                &input[pos..key_end],
                self.limits.object_key_length,
                Subject::Key,
            )?;

            pos = skip_ws(input, key_end);
            if input.get(pos) != Some(&b':') {
                return Err(Reject::Grammar);
            }
            pos = self.value(input, pos + 1, depth)?;
            pos = skip_ws(input, pos);
            match input.get(pos).copied() {
                Some(b',') => pos = skip_ws(input, pos + 1),
                Some(b'}') => return Ok(pos + 1),
                _ => return Err(Reject::Grammar),
            }
        }
    }

    /// Scans an array body. `pos` sits just past the opening `[`; `depth`
    /// counts this array.
    fn array(&self, input: &[u8], mut pos: usize, depth: usize) -> Scan {
        let mut elements = 0usize;
        pos = skip_ws(input, pos);
        if input.get(pos) == Some(&b']') {
            return Ok(pos + 1);
        }
        loop {
            pos = self.value(input, pos, depth)?;
            pos = skip_ws(input, pos);
            elements += 1;
            match input.get(pos).copied() {
                // The delimiter lookahead comes first: a truncated array is
                // malformed JSON even when the element count is already over
                // the line.
                Some(delim @ (b',' | b']')) => {
                    let limit = self.limits.array_element_count;
                    if limit.exceeded_by(elements) {
                        return Err(ThreatError::ArrayElementCount {
                            max: limit.max,
                            found: elements,
                        }
                        .into());
                    }
                    if delim == b']' {
                        return Ok(pos + 1);
                    }
                    pos = skip_ws(input, pos + 1);
                }
                _ => return Err(Reject::Grammar),
            }
        }
    }
}

/// Advances past insignificant whitespace: space, tab, line feed, carriage
/// return (RFC 8259 §2).
fn skip_ws(input: &[u8], mut pos: usize) -> usize {
    while matches!(input.get(pos), Some(b' ' | b'\t' | b'\n' | b'\r')) {
        pos += 1;
    }
    pos
}
