//! Core systems for cascade-grid.
//!
//! This crate holds the framework-independent pieces of the responsive grid:
//!
//! - **Size Classes**: The fixed, ordered set of size buckets
//! - **Breakpoints**: Validated threshold tables and size-class resolution
//! - **Signals**: Synchronous, identity-keyed publish/subscribe
//! - **Size Subscribers**: Per-container measurement hubs with owner/handle split
//! - **Properties**: Value cells with change detection
//!
//! # Resolution Example
//!
//! ```
//! use cascade_grid_core::{Breakpoints, SizeClass};
//!
//! let breakpoints = Breakpoints::from_thresholds([480.0, 768.0, 1024.0])?;
//! assert_eq!(breakpoints.resolve(800.0), SizeClass::Md);
//! # Ok::<(), cascade_grid_core::Error>(())
//! ```
//!
//! # Subscriber Example
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use cascade_grid_core::{Breakpoints, Measurement, SizeClass, SizeSubscriber};
//!
//! let breakpoints = Breakpoints::default();
//! let container = SizeSubscriber::new();
//! let observed = Arc::new(Mutex::new(None));
//!
//! let observed_clone = observed.clone();
//! container.handle().connect(move |m: &Measurement| {
//!     *observed_clone.lock() = Some(breakpoints.resolve(m.width));
//! });
//!
//! container.update(900.0, 300.0);
//! assert_eq!(*observed.lock(), Some(SizeClass::Md));
//! ```

mod breakpoint;
mod error;
pub mod logging;
mod measurement;
pub mod property;
pub mod signal;
mod size_class;
pub mod subscriber;

pub use breakpoint::{Breakpoints, DEFAULT_THRESHOLDS, resolve};
pub use error::{Error, Result};
pub use measurement::Measurement;
pub use property::Property;
pub use signal::{ConnectionId, Signal, Slot};
pub use size_class::SizeClass;
pub use subscriber::{SizeListener, SizeSubscriber, SizeSubscriberHandle};
