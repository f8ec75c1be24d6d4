//! Configuration for the handoff buffer.
//!
//! - [`HandoffConfig`] - Queue capacity reservation and retention
//!
//! # Example
//!
//! ```
//! use handoffrs::HandoffConfig;
//!
//! // Custom capacities
//! let config = HandoffConfig::new(1024, 16 * 1024)?;
//!
//! // Builder pattern
//! let config = HandoffConfig::default().with_initial_capacity(512);
//! # Ok::<(), handoffrs::HandoffError>(())
//! ```

use crate::error::HandoffError;

/// Default queue capacity reserved at construction (4 KiB).
pub const DEFAULT_INITIAL_CAPACITY: usize = 4 * 1024;

/// Default largest queue capacity kept after a full drain (64 KiB).
pub const DEFAULT_MAX_RETAINED_CAPACITY: usize = 64 * 1024;

/// Configuration for a [`HandoffBuffer`](crate::HandoffBuffer).
///
/// The queue grows as large as a single write requires. Once a read empties
/// it, a queue whose capacity grew beyond `max_retained_capacity` is released
/// and re-reserved at `initial_capacity`, so one oversized write does not pin
/// memory for the lifetime of the buffer.
///
/// Constraints: `max_retained_capacity > 0` and
/// `initial_capacity <= max_retained_capacity`.
///
/// # Example
///
/// ```
/// use handoffrs::HandoffConfig;
///
/// let config = HandoffConfig::default()
///     .with_initial_capacity(8 * 1024)
///     .with_max_retained_capacity(128 * 1024);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandoffConfig {
    /// Capacity reserved for the queue up front.
    initial_capacity: usize,

    /// Largest capacity the queue keeps once drained.
    max_retained_capacity: usize,
}

impl HandoffConfig {
    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HandoffError::InvalidConfig`] if:
    /// - `max_retained_capacity` is zero
    /// - `initial_capacity > max_retained_capacity`
    pub fn new(
        initial_capacity: usize,
        max_retained_capacity: usize,
    ) -> Result<Self, HandoffError> {
        if max_retained_capacity == 0 {
            return Err(HandoffError::InvalidConfig {
                message: "max_retained_capacity must be non-zero",
            });
        }

        if initial_capacity > max_retained_capacity {
            return Err(HandoffError::InvalidConfig {
                message: "initial_capacity cannot be greater than max_retained_capacity",
            });
        }

        Ok(Self {
            initial_capacity,
            max_retained_capacity,
        })
    }

    /// Sets the initial queue capacity.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`HandoffConfig::validate`] to check it.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the largest capacity retained after a full drain.
    ///
    /// Note: This does not validate the configuration.
    pub fn with_max_retained_capacity(mut self, capacity: usize) -> Self {
        self.max_retained_capacity = capacity;
        self
    }

    /// Returns the initial queue capacity.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Returns the largest capacity retained after a full drain.
    pub fn max_retained_capacity(&self) -> usize {
        self.max_retained_capacity
    }

    /// Validates the current configuration.
    ///
    /// ```
    /// use handoffrs::HandoffConfig;
    ///
    /// let config = HandoffConfig::default().with_max_retained_capacity(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), HandoffError> {
        Self::new(self.initial_capacity, self.max_retained_capacity).map(|_| ())
    }
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_retained_capacity: DEFAULT_MAX_RETAINED_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HandoffConfig::default();
        assert_eq!(config.initial_capacity(), DEFAULT_INITIAL_CAPACITY);
        assert_eq!(config.max_retained_capacity(), DEFAULT_MAX_RETAINED_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = HandoffConfig::default()
            .with_initial_capacity(256)
            .with_max_retained_capacity(1024);

        assert_eq!(config.initial_capacity(), 256);
        assert_eq!(config.max_retained_capacity(), 1024);
    }

    #[test]
    fn test_zero_initial_capacity_is_valid() {
        let config = HandoffConfig::new(0, 1024).unwrap();
        assert_eq!(config.initial_capacity(), 0);
    }

    #[test]
    fn test_invalid_config_zero_retained() {
        assert!(HandoffConfig::new(0, 0).is_err());
    }

    #[test]
    fn test_invalid_config_initial_gt_retained() {
        let result = HandoffConfig::new(2048, 1024);
        assert!(matches!(
            result,
            Err(HandoffError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_validate_after_builder() {
        let config = HandoffConfig::default().with_initial_capacity(1 << 20);
        assert!(config.validate().is_err());
    }
}
