//! Cascade Grid - responsive grid layout with size-class propagation.
//!
//! This is the main crate. It re-exports the framework-independent core
//! (size classes, breakpoints, signals, size subscribers) and adds the
//! grid containers built on it:
//!
//! - **Grid nodes**: Resolve a size class from the window, their own
//!   measurements, or an ancestor's, and pass it down
//! - **Blocks**: Cells with per-class sizes and visibility
//! - **Sections**: Wrapping rows of cells
//! - **Window metrics**: Window size tracking from winit events
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use cascade_grid::{Block, CellSize, GridConfig, GridNode, SizeClass, WindowSize};
//!
//! let window = Arc::new(WindowSize::new(900.0, 600.0));
//! let grid = GridNode::new(GridConfig::default(), None, window.clone());
//! grid.on_mount()?;
//!
//! let sidebar = Block::new()
//!     .hidden_at(SizeClass::Xs)
//!     .visible_at(SizeClass::Md)
//!     .size_at(SizeClass::Md, CellSize::Points(240.0));
//!
//! assert!(sidebar.layout(&grid.context()).is_some());
//!
//! window.resize(400.0, 600.0);
//! assert!(sidebar.layout(&grid.context()).is_none());
//! # Ok::<(), cascade_grid::GridError>(())
//! ```

mod block;
mod context;
mod error;
mod grid;
mod section;
mod window;

pub use cascade_grid_core::*;

pub use block::{
    Axis, Block, CellLayout, CellSize, CellSizing, GRID_UNITS, Visibility, stretch_min_basis,
};
pub use context::{ContentDirection, Flow, GridContext};
pub use error::{GridError, Result};
pub use grid::{GridConfig, GridLayout, GridNode, InheritanceMode, LifecycleState};
pub use section::{Section, SectionLayout};
pub use window::{WindowMetrics, WindowSize};
