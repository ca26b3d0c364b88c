//! Discrete size classes.
//!
//! A [`SizeClass`] is the bucket a measured extent falls into once it has
//! been run through a [`Breakpoints`](crate::Breakpoints) table. The set is
//! fixed and totally ordered, smallest first.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A named size bucket.
///
/// The derived ordering matches breakpoint order: `Xs < Sm < Md < Lg < Xl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum SizeClass {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Medium.
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
}

impl SizeClass {
    /// Every size class, smallest first.
    pub const ALL: [SizeClass; 5] = [
        SizeClass::Xs,
        SizeClass::Sm,
        SizeClass::Md,
        SizeClass::Lg,
        SizeClass::Xl,
    ];

    /// Number of size classes.
    pub const COUNT: usize = Self::ALL.len();

    /// Short lowercase name (`"xs"`, `"sm"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            SizeClass::Xs => "xs",
            SizeClass::Sm => "sm",
            SizeClass::Md => "md",
            SizeClass::Lg => "lg",
            SizeClass::Xl => "xl",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SizeClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownSizeClass(s.to_string()))
    }
}

impl TryFrom<String> for SizeClass {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SizeClass> for &'static str {
    fn from(class: SizeClass) -> Self {
        class.name()
    }
}
