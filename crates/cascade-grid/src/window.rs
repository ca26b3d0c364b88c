//! Window measurement sources.
//!
//! Grids that size themselves against the window read it through the
//! narrow [`WindowMetrics`] trait: a synchronous size query plus resize
//! listener registration. [`WindowSize`] is the stock implementation; feed
//! it winit [`WindowEvent`]s from the application's event loop, or call
//! [`WindowSize::resize`] directly from tests and other hosts.
//!
//! # Example
//!
//! ```
//! use cascade_grid::{WindowMetrics, WindowSize};
//! use winit::dpi::PhysicalSize;
//! use winit::event::WindowEvent;
//!
//! let window = WindowSize::new(1024.0, 768.0);
//! window.set_scale_factor(2.0);
//!
//! let changed = window.handle_window_event(&WindowEvent::Resized(PhysicalSize::new(1600, 1200)));
//! assert!(changed);
//! assert_eq!(window.window_size().width, 800.0);
//! ```

use std::fmt;

use cascade_grid_core::logging::targets;
use cascade_grid_core::{ConnectionId, Measurement, Property, Signal, SizeListener};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::window::Window;

/// Source of window dimensions and resize notifications.
///
/// Implementations must notify listeners synchronously, in registration
/// order, with the new logical size.
pub trait WindowMetrics: Send + Sync {
    /// Current logical window size.
    fn window_size(&self) -> Measurement;

    /// Register a resize listener, keyed by its `Arc` identity.
    fn add_resize_listener(&self, listener: &SizeListener) -> ConnectionId;

    /// Unregister a resize listener. Unknown listeners are ignored.
    fn remove_resize_listener(&self, listener: &SizeListener) -> bool;
}

/// Window size tracker driven by winit events.
pub struct WindowSize {
    logical: Property<Measurement>,
    scale_factor: Property<f64>,
    resized: Signal<Measurement>,
}

impl WindowSize {
    /// Create a tracker with a known logical size and a scale factor of 1.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            logical: Property::new(Measurement::new(width, height)),
            scale_factor: Property::new(1.0),
            resized: Signal::new(),
        }
    }

    /// Create a tracker seeded from a live winit window.
    pub fn from_window(window: &Window) -> Self {
        let tracker = Self::new(0.0, 0.0);
        tracker.scale_factor.set_silent(window.scale_factor());
        tracker.apply_physical(window.inner_size());
        tracker
    }

    /// Set the logical size, notifying listeners if it changed.
    ///
    /// Returns `true` if listeners were notified.
    pub fn resize(&self, width: f64, height: f64) -> bool {
        let size = Measurement::new(width, height);
        if !self.logical.set(size) {
            return false;
        }
        tracing::debug!(target: targets::WINDOW, %size, "window resized");
        self.resized.emit(size);
        true
    }

    /// Current scale factor used to convert physical sizes.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor.get()
    }

    /// Record a new scale factor for converting later physical sizes.
    ///
    /// Listeners are not notified. The current physical size predates the
    /// DPI change, so the logical size only moves on the next resize.
    /// Returns `true` if the factor changed.
    pub fn set_scale_factor(&self, scale_factor: f64) -> bool {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            tracing::warn!(target: targets::WINDOW, scale_factor, "ignoring invalid scale factor");
            return false;
        }
        let changed = self.scale_factor.set(scale_factor);
        if changed {
            tracing::debug!(target: targets::WINDOW, scale_factor, "scale factor changed");
        }
        changed
    }

    /// Update from a winit window event.
    ///
    /// `Resized` updates the logical size. `ScaleFactorChanged` only records
    /// the factor; winit follows it with a `Resized` carrying the new
    /// physical size. Other events are ignored. Returns `true` if the
    /// logical size changed.
    pub fn handle_window_event(&self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::Resized(physical) => self.apply_physical(*physical),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
                false
            }
            _ => false,
        }
    }

    /// Number of registered resize listeners.
    pub fn listener_count(&self) -> usize {
        self.resized.connection_count()
    }

    fn apply_physical(&self, physical: PhysicalSize<u32>) -> bool {
        let logical: LogicalSize<f64> = physical.to_logical(self.scale_factor.get());
        self.resize(logical.width, logical.height)
    }
}

impl WindowMetrics for WindowSize {
    fn window_size(&self) -> Measurement {
        self.logical.get()
    }

    fn add_resize_listener(&self, listener: &SizeListener) -> ConnectionId {
        self.resized.subscribe(listener)
    }

    fn remove_resize_listener(&self, listener: &SizeListener) -> bool {
        self.resized.unsubscribe(listener)
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl fmt::Debug for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowSize")
            .field("logical", &self.logical.get())
            .field("scale_factor", &self.scale_factor.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(WindowSize: Send, Sync);
