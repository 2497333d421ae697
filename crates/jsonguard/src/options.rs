use crate::{error::ConfigError, scan::Verifier};

/// One structural limit: a maximum paired with an enabled flag.
///
/// A disabled limit never fires regardless of its `max`. Comparisons are
/// strictly greater-than: a measurement equal to the maximum passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Limit {
    pub(crate) max: usize,
    pub(crate) enabled: bool,
}

impl Limit {
    pub(crate) fn exceeded_by(self, found: usize) -> bool {
        self.enabled && found > self.max
    }
}

/// The five limits a [`Verifier`] enforces. Immutable once built.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Limits {
    pub(crate) array_element_count: Limit,
    pub(crate) container_depth: Limit,
    pub(crate) object_key_length: Limit,
    pub(crate) string_value_length: Limit,
    pub(crate) object_entry_count: Limit,
}

/// Builder for a [`Verifier`].
///
/// Each limit accepts a raw `i64` with the contract inherited from the
/// original configuration surface: zero (the default) leaves the check
/// disabled, a positive value enables it with that maximum, and a negative
/// value is rejected by [`build`](Self::build) before any validation runs.
///
/// # Examples
///
/// ```rust
/// use jsonguard::Verifier;
///
/// let verifier = Verifier::builder()
///     .max_array_element_count(6)
///     .max_container_depth(7)
///     .max_object_key_length(20)
///     .max_string_value_length(50)
///     .max_object_entry_count(5)
///     .build()?;
/// # let _ = verifier;
/// # Ok::<(), jsonguard::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[must_use]
pub struct VerifierBuilder {
    array_element_count: i64,
    container_depth: i64,
    object_key_length: i64,
    string_value_length: i64,
    object_entry_count: i64,
}

impl VerifierBuilder {
    /// Maximum number of elements allowed in a single array.
    pub fn max_array_element_count(mut self, max: i64) -> Self {
        self.array_element_count = max;
        self
    }

    /// Maximum allowed container nesting depth, where the containers are
    /// objects and arrays.
    pub fn max_container_depth(mut self, max: i64) -> Self {
        self.container_depth = max;
        self
    }

    /// Maximum number of UTF-8 characters allowed for a property name within
    /// an object.
    pub fn max_object_key_length(mut self, max: i64) -> Self {
        self.object_key_length = max;
        self
    }

    /// Maximum number of UTF-8 characters allowed for a string value.
    pub fn max_string_value_length(mut self, max: i64) -> Self {
        self.string_value_length = max;
        self
    }

    /// Maximum number of `key: value` entries allowed in a single object.
    pub fn max_object_entry_count(mut self, max: i64) -> Self {
        self.object_entry_count = max;
        self
    }

    /// Validates the configured limits and builds the [`Verifier`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending limit if any configured
    /// value is negative.
    pub fn build(self) -> Result<Verifier, ConfigError> {
        Ok(Verifier::with_limits(Limits {
            array_element_count: limit(
                self.array_element_count,
                ConfigError::NegativeArrayElementCount,
            )?,
            container_depth: limit(self.container_depth, ConfigError::NegativeContainerDepth)?,
            object_key_length: limit(self.object_key_length, ConfigError::NegativeObjectKeyLength)?,
            string_value_length: limit(
                self.string_value_length,
                ConfigError::NegativeStringValueLength,
            )?,
            object_entry_count: limit(
                self.object_entry_count,
                ConfigError::NegativeObjectEntryCount,
            )?,
        }))
    }
}

fn limit(raw: i64, reject: fn(i64) -> ConfigError) -> Result<Limit, ConfigError> {
    match raw {
        0 => Ok(Limit::default()),
        max if max < 0 => Err(reject(max)),
        max => Ok(Limit {
            // `max` is positive; saturate rather than wrap on 32-bit hosts.
            max: usize::try_from(max).unwrap_or(usize::MAX),
            enabled: true,
        }),
    }
}
