//! Error types for cascade-grid.

use crate::grid::LifecycleState;

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur while configuring or driving a grid.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Invalid breakpoint table or size class name.
    #[error(transparent)]
    Core(#[from] cascade_grid_core::Error),

    /// `relative_to` named something other than `window`, `self` or `parent`.
    #[error("Unknown inheritance mode '{0}', expected 'window', 'self' or 'parent'")]
    UnknownInheritanceMode(String),

    /// A cell size could not be parsed.
    #[error("Invalid cell size '{0}', expected 'stretch', a number or a percentage")]
    InvalidCellSize(String),

    /// Configuration file could not be parsed.
    #[error("Invalid grid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A lifecycle method was called in the wrong state.
    #[error("Cannot move grid from {from} to {to}")]
    InvalidTransition {
        from: LifecycleState,
        to: LifecycleState,
    },
}
