//! Error types for cascade-grid core.

use crate::size_class::SizeClass;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building breakpoint tables or parsing size classes.
///
/// All of these are configuration mistakes. They are reported when the
/// offending value is constructed, never later during resolution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A breakpoint table needs at least one threshold.
    #[error("Breakpoint table needs at least one threshold")]
    NoThresholds,

    /// The number of thresholds does not match the number of size classes.
    #[error("Expected {expected} thresholds for {classes} size classes, got {actual}")]
    CountMismatch {
        classes: usize,
        expected: usize,
        actual: usize,
    },

    /// A threshold is negative, infinite or NaN.
    #[error("Threshold {index} ({value}) must be finite and non-negative")]
    InvalidThreshold { index: usize, value: f64 },

    /// Thresholds are not strictly increasing.
    #[error("Threshold {index} ({value}) is not greater than the previous threshold ({previous})")]
    NotIncreasing {
        index: usize,
        previous: f64,
        value: f64,
    },

    /// Size classes of a breakpoint table are not strictly increasing.
    #[error("Size class '{class}' at position {index} is out of order")]
    ClassesNotIncreasing { index: usize, class: SizeClass },

    /// A size class name could not be parsed.
    #[error("Unknown size class '{0}'")]
    UnknownSizeClass(String),
}
