//! Measured container dimensions.

use std::fmt;

/// A measured `(width, height)` pair in logical pixels.
///
/// Components are never negative; [`Measurement::new`] clamps negative and
/// NaN inputs to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    /// Measured width.
    pub width: f64,
    /// Measured height.
    pub height: f64,
}

impl Measurement {
    /// A zero-sized measurement.
    pub const ZERO: Measurement = Measurement {
        width: 0.0,
        height: 0.0,
    };

    /// Create a measurement, clamping each component to be non-negative.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: non_negative(width),
            height: non_negative(height),
        }
    }

    /// The extent along the axis that drives size-class resolution.
    ///
    /// Horizontal content is classified by height, vertical content by width.
    #[inline]
    pub fn extent(&self, horizontal: bool) -> f64 {
        if horizontal { self.height } else { self.width }
    }
}

impl From<(f64, f64)> for Measurement {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}
