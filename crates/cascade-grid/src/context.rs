//! The ambient payload a grid hands to its descendants.
//!
//! Descendants never look their grid up implicitly. Whoever builds a child
//! component passes it the parent's [`GridContext`], which is the only
//! channel for direction, stretch and size-class state.

use cascade_grid_core::{SizeClass, SizeSubscriberHandle};

/// The axis along which a grid lays out its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentDirection {
    /// Cells flow in a row; sized and classified by height.
    Horizontal,
    /// Cells flow in a column; sized and classified by width.
    #[default]
    Vertical,
}

impl ContentDirection {
    /// Direction for a grid's `horizontal` flag.
    pub fn from_horizontal(horizontal: bool) -> Self {
        if horizontal {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// Whether content flows horizontally.
    pub fn is_horizontal(self) -> bool {
        self == Self::Horizontal
    }

    /// Main-axis flow of the grid container itself.
    pub fn flow(self) -> Flow {
        match self {
            Self::Horizontal => Flow::Row,
            Self::Vertical => Flow::Column,
        }
    }
}

/// Main-axis direction of a rendered container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    /// Children placed left to right.
    Row,
    /// Children placed top to bottom.
    Column,
}

impl Flow {
    /// The perpendicular flow.
    pub fn cross(self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::Column => Self::Row,
        }
    }
}

/// Snapshot of a grid's state as seen by its subtree.
///
/// Obtained from [`GridNode::context`](crate::GridNode::context). Handles
/// inside grant subscribe access only; no descendant can publish into an
/// ancestor's subscriber.
#[derive(Debug, Clone, PartialEq)]
pub struct GridContext {
    /// Direction cells flow in.
    pub direction: ContentDirection,
    /// Whether the grid stretches to fill its parent.
    pub stretch: bool,
    /// The grid's active size class.
    pub size_class: SizeClass,
    /// The grid's own measurement hub.
    pub size_provider: SizeSubscriberHandle,
    /// The hub `parent`-mode child grids follow, if the chain has one.
    pub reference_provider: Option<SizeSubscriberHandle>,
}
