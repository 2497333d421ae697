use thiserror::Error;

/// A rejected input: either malformed JSON or a violated structural limit.
///
/// The display form of every variant is a stable contract. Consumers are
/// expected to pattern-match on these strings (the `threat.` messages predate
/// this crate), so they must be reproduced byte for byte.
///
/// `found` always reports the measurement that tripped the check: the depth
/// the offending container would have occupied, the entry or element count
/// including the one over the line, or the measured character count.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatError {
    /// The input does not match the JSON grammar. Carries no position or
    /// cause detail; the display form is a sentinel, not a formatted message.
    #[error("threat.MalformedJSON")]
    MalformedJson,

    /// A string value longer (in UTF-8 characters) than the configured
    /// maximum.
    #[error("threat.maxStringValueLengthReached.Max-[{max}]-Allowed.Found-[{found}]")]
    StringValueLength {
        /// The configured maximum.
        max: usize,
        /// The measured character count.
        found: usize,
    },

    /// An array with more elements than the configured maximum.
    #[error("threat.maxArrayElementCountReached.Max-[{max}]-Allowed.Found-[{found}]")]
    ArrayElementCount {
        /// The configured maximum.
        max: usize,
        /// The element count at the point the scan stopped.
        found: usize,
    },

    /// An object key longer (in UTF-8 characters) than the configured
    /// maximum.
    #[error("threat.maxKeyLengthReached.Max-[{max}]-Allowed.Found-[{found}]")]
    ObjectKeyLength {
        /// The configured maximum.
        max: usize,
        /// The measured character count.
        found: usize,
    },

    /// A container nested deeper than the configured maximum.
    #[error("threat.maxContainerDepthReached.Max-[{max}]-Allowed.Found-[{found}]")]
    ContainerDepth {
        /// The configured maximum.
        max: usize,
        /// The depth the rejected container would have occupied.
        found: usize,
    },

    /// An object with more entries than the configured maximum.
    #[error("threat.maxObjectEntryCountReached.Max-[{max}]-Allowed.Found-[{found}]")]
    ObjectEntryCount {
        /// The configured maximum.
        max: usize,
        /// The entry count at the point the scan stopped.
        found: usize,
    },
}

/// A limit rejected at build time, before any validation runs.
///
/// Zero is not an error: a zero maximum leaves the corresponding check
/// disabled. Only negative values are rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_array_element_count` was given a negative value.
    #[error("max array element count cannot be negative ({0})")]
    NegativeArrayElementCount(i64),

    /// `max_container_depth` was given a negative value.
    #[error("max container depth cannot be negative ({0})")]
    NegativeContainerDepth(i64),

    /// `max_object_key_length` was given a negative value.
    #[error("max object key length cannot be negative ({0})")]
    NegativeObjectKeyLength(i64),

    /// `max_string_value_length` was given a negative value.
    #[error("max string value length cannot be negative ({0})")]
    NegativeStringValueLength(i64),

    /// `max_object_entry_count` was given a negative value.
    #[error("max object entry count cannot be negative ({0})")]
    NegativeObjectEntryCount(i64),
}
