//! Grid cells.
//!
//! A [`Block`] is a single cell of a grid. Given the grid's
//! [`GridContext`] it decides whether it renders at all and how large it is
//! along the content axis.
//!
//! # Fallback
//!
//! Size and visibility are looked up independently. Each walks from the
//! active size class down through smaller classes to the nearest defined
//! entry, then to the unkeyed value, then to the default (stretch and
//! visible). A keyed value therefore carries upward until the next keyed
//! class: a cell sized `{sm: 50, lg: 100}` is `50` at `md`, `100` at `xl`
//! and stretched at `xs`.
//!
//! ```
//! use cascade_grid::{Block, CellSize, SizeClass};
//!
//! let block = Block::new()
//!     .size_at(SizeClass::Sm, CellSize::Points(50.0))
//!     .size_at(SizeClass::Lg, CellSize::Points(100.0))
//!     .hidden_at(SizeClass::Xs)
//!     .visible_at(SizeClass::Sm);
//!
//! assert_eq!(block.size_for(SizeClass::Md), CellSize::Points(50.0));
//! assert_eq!(block.size_for(SizeClass::Xs), CellSize::Stretch);
//! assert!(block.is_hidden(SizeClass::Xs));
//! assert!(!block.is_hidden(SizeClass::Sm));
//! assert!(!block.is_hidden(SizeClass::Xl));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use cascade_grid_core::SizeClass;
use cascade_grid_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::context::{ContentDirection, Flow, GridContext};
use crate::error::GridError;

/// Columns in the grid unit system.
pub const GRID_UNITS: u32 = 12;

/// Smallest share of the row a stretched cell keeps, in percent.
///
/// One grid unit, rounded to two decimals (8.33 for twelve units).
pub fn stretch_min_basis() -> f64 {
    round_for_percentage(100.0 / f64::from(GRID_UNITS))
}

fn round_for_percentage(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// How large a cell is along the content axis.
///
/// Configured as `"stretch"`, a number of points, or a `"NN%"` string.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "CellSizeRepr", into = "CellSizeRepr")]
pub enum CellSize {
    /// Fill remaining space evenly with siblings.
    #[default]
    Stretch,
    /// Fixed size in logical points.
    Points(f64),
    /// Percentage of the parent along the axis.
    Percent(f64),
}

impl fmt::Display for CellSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stretch => f.write_str("stretch"),
            Self::Points(points) => write!(f, "{points}"),
            Self::Percent(percent) => write!(f, "{percent}%"),
        }
    }
}

impl FromStr for CellSize {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || GridError::InvalidCellSize(s.to_string());

        if trimmed.eq_ignore_ascii_case("stretch") {
            return Ok(Self::Stretch);
        }
        let (number, percent) = match trimmed.strip_suffix('%') {
            Some(number) => (number.trim_end(), true),
            None => (trimmed, false),
        };
        let value: f64 = number.parse().map_err(|_| invalid())?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid());
        }
        Ok(if percent {
            Self::Percent(value)
        } else {
            Self::Points(value)
        })
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum CellSizeRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<CellSizeRepr> for CellSize {
    type Error = GridError;

    fn try_from(repr: CellSizeRepr) -> Result<Self, Self::Error> {
        match repr {
            CellSizeRepr::Number(points) if points.is_finite() && points >= 0.0 => {
                Ok(Self::Points(points))
            }
            CellSizeRepr::Number(points) => Err(GridError::InvalidCellSize(points.to_string())),
            CellSizeRepr::Text(text) => text.parse(),
        }
    }
}

impl From<CellSize> for CellSizeRepr {
    fn from(size: CellSize) -> Self {
        match size {
            CellSize::Points(points) => Self::Number(points),
            other => Self::Text(other.to_string()),
        }
    }
}

/// Per-class visibility override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Render the cell.
    Visible,
    /// Skip the cell.
    Hidden,
}

/// Axis a cell's size applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Width; used when content flows vertically.
    Width,
    /// Height; used when content flows horizontally.
    Height,
}

impl Axis {
    /// The sizing axis for a content direction.
    pub fn for_direction(direction: ContentDirection) -> Self {
        match direction {
            ContentDirection::Vertical => Self::Width,
            ContentDirection::Horizontal => Self::Height,
        }
    }
}

/// Resolved sizing directive of a rendered cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellSizing {
    /// Grow to fill remaining space, never below `min_basis_percent`.
    Stretch {
        /// Minimum share of the row, in percent.
        min_basis_percent: f64,
    },
    /// Fixed size in points along the axis.
    Points(f64),
    /// Percentage of the parent along the axis.
    Percent(f64),
}

/// Layout of a cell under a particular context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    /// Axis the sizing applies to.
    pub axis: Axis,
    /// Sizing along that axis.
    pub sizing: CellSizing,
    /// Flow of the cell's own children.
    pub flow: Flow,
}

/// A single grid cell.
///
/// ```toml
/// size = "stretch"
/// hidden = false
///
/// [sizes]
/// sm = 120
/// lg = "25%"
///
/// [visibility]
/// xs = "hidden"
/// md = "visible"
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Block {
    /// Size below every keyed entry.
    size: Option<CellSize>,
    /// Sizes keyed by size class.
    sizes: BTreeMap<SizeClass, CellSize>,
    /// Hidden below every keyed entry.
    hidden: bool,
    /// Visibility overrides keyed by size class.
    visibility: BTreeMap<SizeClass, Visibility>,
}

impl Block {
    /// A stretched, always visible cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a cell from TOML.
    pub fn from_toml_str(source: &str) -> crate::Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Set the unkeyed size.
    pub fn size(mut self, size: CellSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the size from `class` upward, until the next keyed class.
    pub fn size_at(mut self, class: SizeClass, size: CellSize) -> Self {
        self.sizes.insert(class, size);
        self
    }

    /// Set the unkeyed hidden flag.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Hide the cell from `class` upward, until the next keyed class.
    pub fn hidden_at(mut self, class: SizeClass) -> Self {
        self.visibility.insert(class, Visibility::Hidden);
        self
    }

    /// Show the cell from `class` upward, until the next keyed class.
    pub fn visible_at(mut self, class: SizeClass) -> Self {
        self.visibility.insert(class, Visibility::Visible);
        self
    }

    /// Size in effect at `class`.
    pub fn size_for(&self, class: SizeClass) -> CellSize {
        at_or_below(&self.sizes, class)
            .copied()
            .or(self.size)
            .unwrap_or_default()
    }

    /// Whether the cell is hidden at `class`.
    pub fn is_hidden(&self, class: SizeClass) -> bool {
        match at_or_below(&self.visibility, class) {
            Some(Visibility::Hidden) => true,
            Some(Visibility::Visible) => false,
            None => self.hidden,
        }
    }

    /// Lay the cell out under `ctx`; `None` means it is not rendered.
    pub fn layout(&self, ctx: &GridContext) -> Option<CellLayout> {
        if self.is_hidden(ctx.size_class) {
            tracing::trace!(target: targets::CELL, size_class = %ctx.size_class, "cell hidden");
            return None;
        }

        let sizing = match self.size_for(ctx.size_class) {
            CellSize::Stretch => CellSizing::Stretch {
                min_basis_percent: stretch_min_basis(),
            },
            CellSize::Points(points) => CellSizing::Points(points),
            CellSize::Percent(percent) => CellSizing::Percent(percent),
        };

        Some(CellLayout {
            axis: Axis::for_direction(ctx.direction),
            sizing,
            flow: ctx.direction.flow(),
        })
    }
}

/// Entry for `class` or the nearest smaller keyed class.
fn at_or_below<T>(entries: &BTreeMap<SizeClass, T>, class: SizeClass) -> Option<&T> {
    entries.range(..=class).next_back().map(|(_, value)| value)
}
