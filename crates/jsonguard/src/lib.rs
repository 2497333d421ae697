//! Single-pass JSON validation with configurable structural limits.
//!
//! `jsonguard` checks that a byte buffer is syntactically correct JSON *and*
//! that it stays inside a set of structural limits intended to block
//! resource-exhaustion ("JSON threat") attacks: array element count, object
//! entry count, object key length, string value length, and container nesting
//! depth. The whole check is one left-to-right pass over the input; no value
//! tree is built and nothing is allocated.
//!
//! # Examples
//!
//! ```rust
//! use jsonguard::Verifier;
//!
//! let verifier = Verifier::builder()
//!     .max_container_depth(8)
//!     .max_string_value_length(64)
//!     .build()?;
//!
//! assert!(verifier.verify_str(r#"{"greeting": "hello"}"#).is_ok());
//! # Ok::<(), jsonguard::ConfigError>(())
//! ```
//!
//! A limit left unset (or set to zero) is disabled; [`Verifier::default`]
//! performs plain syntax validation only. Limit violations surface as
//! [`ThreatError`] values with a stable, pattern-matchable display form:
//!
//! ```rust
//! use jsonguard::Verifier;
//!
//! let verifier = Verifier::builder().max_array_element_count(2).build()?;
//! let err = verifier.verify_str(r#"["a", "b", "c"]"#).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "threat.maxArrayElementCountReached.Max-[2]-Allowed.Found-[3]"
//! );
//! # Ok::<(), jsonguard::ConfigError>(())
//! ```
//!
//! # Untrusted input and recursion
//!
//! Validation recurses once per level of container nesting. With the depth
//! limit disabled (or set very high) an adversarial input can exhaust the
//! call stack before any configured check fires. When validating untrusted
//! payloads, always enable [`max_container_depth`] with a modest maximum.
//!
//! [`max_container_depth`]: VerifierBuilder::max_container_depth

#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod scan;

pub use error::{ConfigError, ThreatError};
pub use options::VerifierBuilder;
pub use scan::Verifier;
