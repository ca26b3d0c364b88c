//! Logging facilities for cascade-grid.
//!
//! cascade-grid uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("cascade_grid=debug"))
//!         .init();
//!
//!     // Build and mount grids...
//! }
//! ```
//!
//! Size-class transitions and lifecycle changes are logged at `debug`,
//! individual notifications at `trace`, and configuration mistakes that
//! still produce a usable layout at `warn`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=cascade_grid::grid=debug`.
pub mod targets {
    /// Breakpoint resolution target.
    pub const BREAKPOINT: &str = "cascade_grid_core::breakpoint";
    /// Signal emission target.
    pub const SIGNAL: &str = "cascade_grid_core::signal";
    /// Size subscriber target.
    pub const SUBSCRIBER: &str = "cascade_grid_core::subscriber";
    /// Grid node lifecycle and size-class target.
    pub const GRID: &str = "cascade_grid::grid";
    /// Window measurement source target.
    pub const WINDOW: &str = "cascade_grid::window";
    /// Cell and section layout target.
    pub const CELL: &str = "cascade_grid::cell";
}
