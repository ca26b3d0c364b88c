//! Sections: wrapping rows of cells.

use cascade_grid_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::context::{Flow, GridContext};

/// A run of cells laid out across the grid's content direction.
///
/// In a vertical grid a section is a row; in a horizontal grid it is a
/// column. Cells wrap when they overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Section {
    /// Fill remaining space in the grid. Only honored inside a
    /// stretchable grid.
    pub stretch: bool,
}

/// Layout of a section under a particular context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    /// Direction cells are placed in.
    pub flow: Flow,
    /// Cells wrap onto a new line when they overflow.
    pub wrap: bool,
    /// Grow to fill the grid.
    pub stretch: bool,
}

impl Section {
    /// A section that keeps its natural size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the section grows to fill the grid.
    pub fn stretch(mut self, stretch: bool) -> Self {
        self.stretch = stretch;
        self
    }

    /// Lay the section out under `ctx`.
    pub fn layout(&self, ctx: &GridContext) -> SectionLayout {
        if self.stretch && !ctx.stretch {
            tracing::warn!(
                target: targets::CELL,
                "section stretch has no effect inside a grid that is not stretchable"
            );
        }

        SectionLayout {
            flow: ctx.direction.flow().cross(),
            wrap: true,
            stretch: self.stretch,
        }
    }
}
