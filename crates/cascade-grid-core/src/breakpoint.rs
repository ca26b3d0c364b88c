//! Breakpoint tables and size-class resolution.
//!
//! A [`Breakpoints`] table partitions the non-negative number line into
//! contiguous half-open intervals, one per size class:
//!
//! ```text
//!   classes:     xs     |   sm    |   md     |   lg
//!   thresholds:        480       768       1024
//! ```
//!
//! An extent exactly on a threshold belongs to the higher class, so `768`
//! resolves to `md` in the table above.
//!
//! # Example
//!
//! ```
//! use cascade_grid_core::{Breakpoints, SizeClass};
//!
//! let breakpoints = Breakpoints::from_thresholds([480.0, 768.0, 1024.0]).unwrap();
//! assert_eq!(breakpoints.resolve(800.0), SizeClass::Md);
//! assert_eq!(breakpoints.resolve(768.0), SizeClass::Md);
//! assert_eq!(breakpoints.resolve(0.0), SizeClass::Xs);
//! ```

use crate::error::{Error, Result};
use crate::logging::targets;
use crate::size_class::SizeClass;

/// Thresholds used when a grid does not configure its own.
pub const DEFAULT_THRESHOLDS: [f64; 4] = [480.0, 768.0, 1024.0, 1280.0];

/// An immutable, validated breakpoint table.
///
/// Holds `n` strictly increasing size classes and `n - 1` strictly
/// increasing, finite, non-negative thresholds. Invalid tables cannot be
/// constructed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BreakpointsRepr", into = "BreakpointsRepr")
)]
pub struct Breakpoints {
    classes: Vec<SizeClass>,
    thresholds: Vec<f64>,
}

impl Breakpoints {
    /// Create a table from an explicit class list and its thresholds.
    ///
    /// `thresholds.len()` must be `classes.len() - 1`.
    pub fn new(
        classes: impl IntoIterator<Item = SizeClass>,
        thresholds: impl IntoIterator<Item = f64>,
    ) -> Result<Self> {
        let classes: Vec<SizeClass> = classes.into_iter().collect();
        let thresholds: Vec<f64> = thresholds.into_iter().collect();

        if thresholds.is_empty() {
            return Err(Error::NoThresholds);
        }
        if classes.len() != thresholds.len() + 1 {
            return Err(Error::CountMismatch {
                classes: classes.len(),
                expected: classes.len().saturating_sub(1),
                actual: thresholds.len(),
            });
        }
        for (index, pair) in classes.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(Error::ClassesNotIncreasing {
                    index: index + 1,
                    class: pair[1],
                });
            }
        }
        validate_thresholds(&thresholds)?;

        Ok(Self {
            classes,
            thresholds,
        })
    }

    /// Create a table over the first `thresholds.len() + 1` size classes.
    ///
    /// Three thresholds select `xs, sm, md, lg`; four select all classes.
    pub fn from_thresholds(thresholds: impl IntoIterator<Item = f64>) -> Result<Self> {
        let thresholds: Vec<f64> = thresholds.into_iter().collect();
        if thresholds.len() >= SizeClass::COUNT {
            return Err(Error::CountMismatch {
                classes: SizeClass::COUNT,
                expected: SizeClass::COUNT - 1,
                actual: thresholds.len(),
            });
        }
        let classes = SizeClass::ALL[..=thresholds.len()].to_vec();
        Self::new(classes, thresholds)
    }

    /// The size classes this table resolves to, smallest first.
    pub fn classes(&self) -> &[SizeClass] {
        &self.classes
    }

    /// The thresholds separating adjacent classes.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// The smallest class of this table.
    pub fn smallest(&self) -> SizeClass {
        self.classes[0]
    }

    /// Resolve an extent to its size class.
    ///
    /// Picks the greatest `i` with `extent >= thresholds[i]` and returns
    /// class `i + 1`, or the first class when the extent is below every
    /// threshold. Negative and NaN extents are treated as zero.
    pub fn resolve(&self, extent: f64) -> SizeClass {
        debug_assert!(
            extent.is_nan() || extent >= 0.0,
            "extent must be non-negative, got {extent}"
        );
        let extent = if extent.is_nan() { 0.0 } else { extent.max(0.0) };

        // Thresholds are strictly increasing, so this counts every
        // threshold at or below the extent.
        let passed = self.thresholds.partition_point(|&threshold| extent >= threshold);
        let class = self.classes[passed];

        tracing::trace!(target: targets::BREAKPOINT, extent, %class, "resolved size class");
        class
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            classes: SizeClass::ALL.to_vec(),
            thresholds: DEFAULT_THRESHOLDS.to_vec(),
        }
    }
}

/// Resolve `extent` against `breakpoints`.
///
/// Free-function form of [`Breakpoints::resolve`].
pub fn resolve(breakpoints: &Breakpoints, extent: f64) -> SizeClass {
    breakpoints.resolve(extent)
}

fn validate_thresholds(thresholds: &[f64]) -> Result<()> {
    for (index, &value) in thresholds.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidThreshold { index, value });
        }
        if index > 0 {
            let previous = thresholds[index - 1];
            if value <= previous {
                return Err(Error::NotIncreasing {
                    index,
                    previous,
                    value,
                });
            }
        }
    }
    Ok(())
}

/// Serialized form: either a bare threshold list or an explicit table.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum BreakpointsRepr {
    Thresholds(Vec<f64>),
    Explicit {
        classes: Vec<SizeClass>,
        thresholds: Vec<f64>,
    },
}

#[cfg(feature = "serde")]
impl TryFrom<BreakpointsRepr> for Breakpoints {
    type Error = Error;

    fn try_from(repr: BreakpointsRepr) -> Result<Self> {
        match repr {
            BreakpointsRepr::Thresholds(thresholds) => Self::from_thresholds(thresholds),
            BreakpointsRepr::Explicit {
                classes,
                thresholds,
            } => Self::new(classes, thresholds),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Breakpoints> for BreakpointsRepr {
    fn from(breakpoints: Breakpoints) -> Self {
        Self::Explicit {
            classes: breakpoints.classes,
            thresholds: breakpoints.thresholds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_classes() -> Breakpoints {
        Breakpoints::from_thresholds([480.0, 768.0, 1024.0]).unwrap()
    }

    #[test]
    fn resolves_inside_intervals() {
        let bp = four_classes();
        assert_eq!(bp.resolve(0.0), SizeClass::Xs);
        assert_eq!(bp.resolve(479.9), SizeClass::Xs);
        assert_eq!(bp.resolve(600.0), SizeClass::Sm);
        assert_eq!(bp.resolve(800.0), SizeClass::Md);
        assert_eq!(bp.resolve(5000.0), SizeClass::Lg);
    }

    #[test]
    fn threshold_belongs_to_higher_class() {
        let bp = four_classes();
        for (i, &threshold) in bp.thresholds().iter().enumerate() {
            assert_eq!(bp.resolve(threshold), bp.classes()[i + 1]);
        }
    }

    #[test]
    fn resolution_is_monotonic() {
        let bp = Breakpoints::default();
        let mut previous = bp.resolve(0.0);
        for step in 0..2000 {
            let class = bp.resolve(step as f64 * 0.75);
            assert!(class >= previous, "{class} < {previous} at step {step}");
            previous = class;
        }
        assert_eq!(previous, SizeClass::Xl);
    }

    #[test]
    fn default_table_covers_every_class() {
        let bp = Breakpoints::default();
        assert_eq!(bp.classes(), &SizeClass::ALL);
        assert_eq!(bp.thresholds(), &DEFAULT_THRESHOLDS);
        assert_eq!(bp.smallest(), SizeClass::Xs);
    }

    #[test]
    fn explicit_class_subset() {
        let bp = Breakpoints::new([SizeClass::Sm, SizeClass::Lg], [600.0]).unwrap();
        assert_eq!(bp.resolve(10.0), SizeClass::Sm);
        assert_eq!(bp.resolve(600.0), SizeClass::Lg);
    }

    #[test]
    fn rejects_decreasing_thresholds() {
        let err = Breakpoints::from_thresholds([480.0, 400.0]).unwrap_err();
        assert_eq!(
            err,
            Error::NotIncreasing {
                index: 1,
                previous: 480.0,
                value: 400.0
            }
        );
        assert!(matches!(
            Breakpoints::from_thresholds([480.0, 480.0]),
            Err(Error::NotIncreasing { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_count_mismatch() {
        assert!(matches!(
            Breakpoints::new([SizeClass::Xs, SizeClass::Sm], [1.0, 2.0]),
            Err(Error::CountMismatch {
                classes: 2,
                expected: 1,
                actual: 2
            })
        ));
        assert!(matches!(
            Breakpoints::from_thresholds([1.0, 2.0, 3.0, 4.0, 5.0]),
            Err(Error::CountMismatch { .. })
        ));
        assert_eq!(
            Breakpoints::from_thresholds(Vec::new()),
            Err(Error::NoThresholds)
        );
    }

    #[test]
    fn rejects_bad_values_and_class_order() {
        assert!(matches!(
            Breakpoints::from_thresholds([-1.0]),
            Err(Error::InvalidThreshold { index: 0, .. })
        ));
        assert!(matches!(
            Breakpoints::from_thresholds([10.0, f64::INFINITY]),
            Err(Error::InvalidThreshold { index: 1, .. })
        ));
        assert!(matches!(
            Breakpoints::new([SizeClass::Md, SizeClass::Sm], [100.0]),
            Err(Error::ClassesNotIncreasing {
                index: 1,
                class: SizeClass::Sm
            })
        ));
    }

    #[test]
    fn free_function_matches_method() {
        let bp = four_classes();
        assert_eq!(resolve(&bp, 1024.0), SizeClass::Lg);
    }
}
