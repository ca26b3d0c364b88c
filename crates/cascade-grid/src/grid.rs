//! Grid nodes: size-class resolution and propagation.
//!
//! A [`GridNode`] is a container that turns measurements into a
//! [`SizeClass`] and publishes it, with its content direction, to its
//! subtree through a [`GridContext`].
//!
//! # Reference size
//!
//! Where the measurement comes from is set by the node's
//! [`InheritanceMode`]:
//!
//! - **`window`**: the window size. Children get no reference subscriber.
//! - **`self`**: the node's own layout measurements. Its own subscriber
//!   becomes the reference subscriber of its children.
//! - **`parent`**: whatever reference subscriber the parent context carries,
//!   passed on unchanged. If the chain ended at a `window` node there is
//!   none, and the node follows the window directly instead.
//!
//! ```text
//!   this node's mode | passes down to its children
//!   -----------------|------------------------------------------
//!   window           | nothing
//!   self             | its own size subscriber
//!   parent           | the reference subscriber it received
//! ```
//!
//! # Lifecycle
//!
//! ```text
//!   GridNode::new ──> Constructing ──on_mount──> Mounted ──on_unmount──> Unmounted
//! ```
//!
//! Construction picks the reference subscriber, takes an initial
//! measurement and resolves the first size class, so a node always has
//! one. Mounting registers the window or parent listener; unmounting
//! removes both and closes the node's own subscriber.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use cascade_grid::{GridConfig, GridNode, InheritanceMode, SizeClass, WindowSize};
//!
//! let window = Arc::new(WindowSize::new(1100.0, 700.0));
//! let root = GridNode::new(GridConfig::default(), None, window.clone());
//! root.on_mount()?;
//! assert_eq!(root.size_class(), SizeClass::Lg);
//!
//! let panel = root.child(GridConfig::new().relative_to(InheritanceMode::SelfMeasured));
//! panel.on_mount()?;
//! panel.on_measured(500.0, 300.0);
//! assert_eq!(panel.size_class(), SizeClass::Sm);
//!
//! window.resize(400.0, 700.0);
//! assert_eq!(root.size_class(), SizeClass::Xs);
//! # Ok::<(), cascade_grid::GridError>(())
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Weak};

use cascade_grid_core::logging::targets;
use cascade_grid_core::{
    Breakpoints, Measurement, Property, Signal, SizeClass, SizeListener, SizeSubscriber,
    SizeSubscriberHandle,
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::context::{ContentDirection, Flow, GridContext};
use crate::error::{GridError, Result};
use crate::window::WindowMetrics;

/// What a grid measures to pick its size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum InheritanceMode {
    /// Follow the window size (`"window"`).
    #[default]
    Window,
    /// Follow this grid's own layout measurements (`"self"`).
    SelfMeasured,
    /// Follow the nearest ancestor's reference subscriber (`"parent"`).
    Parent,
}

impl InheritanceMode {
    /// Configuration name of the mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::SelfMeasured => "self",
            Self::Parent => "parent",
        }
    }
}

impl fmt::Display for InheritanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InheritanceMode {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "window" => Ok(Self::Window),
            "self" => Ok(Self::SelfMeasured),
            "parent" => Ok(Self::Parent),
            other => Err(GridError::UnknownInheritanceMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for InheritanceMode {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<InheritanceMode> for &'static str {
    fn from(mode: InheritanceMode) -> Self {
        mode.as_str()
    }
}

/// Construction-time configuration of a grid.
///
/// Fixed for the lifetime of the node it builds.
///
/// ```
/// use cascade_grid::{GridConfig, InheritanceMode};
///
/// let config = GridConfig::from_toml_str(r#"
///     breakpoints = [480, 768, 1024]
///     horizontal = true
///     relative_to = "parent"
/// "#)?;
/// assert!(config.horizontal);
/// assert_eq!(config.relative_to, InheritanceMode::Parent);
/// # Ok::<(), cascade_grid::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Breakpoint table used for resolution.
    pub breakpoints: Breakpoints,
    /// Lay cells out in a row and classify by height.
    pub horizontal: bool,
    /// Where the reference size comes from.
    pub relative_to: InheritanceMode,
    /// Stretch to fill the parent.
    pub stretchable: bool,
    /// Wrap content in a scroll container. Presentation only.
    pub scrollable: bool,
}

impl GridConfig {
    /// Default configuration: default breakpoints, vertical, window-relative.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Use a custom breakpoint table.
    pub fn breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Set the content direction.
    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Set the inheritance mode.
    pub fn relative_to(mut self, mode: InheritanceMode) -> Self {
        self.relative_to = mode;
        self
    }

    /// Set the stretch flag.
    pub fn stretchable(mut self, stretchable: bool) -> Self {
        self.stretchable = stretchable;
        self
    }

    /// Set the scroll flag.
    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }
}

/// Lifecycle states of a [`GridNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// Built, size class resolved, no listeners registered yet.
    Constructing,
    /// Receiving window, parent and layout measurements.
    Mounted,
    /// Torn down; all registrations removed.
    Unmounted,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Constructing => "constructing",
            Self::Mounted => "mounted",
            Self::Unmounted => "unmounted",
        })
    }
}

/// Presentation directive for the grid container itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Main-axis flow of the container.
    pub flow: Flow,
    /// Fill the parent.
    pub stretch: bool,
    /// Wrap in a scroll container.
    pub scrollable: bool,
}

struct Lifecycle {
    state: LifecycleState,
    window_listener: Option<SizeListener>,
    parent_listener: Option<SizeListener>,
}

struct GridInner {
    config: GridConfig,
    direction: ContentDirection,
    size_class: Property<SizeClass>,
    size_class_changed: Signal<SizeClass>,
    size_provider: SizeSubscriber,
    /// Parent's reference subscriber; only set in `parent` mode.
    inherited: Option<SizeSubscriberHandle>,
    /// Reference subscriber handed to children.
    reference: Option<SizeSubscriberHandle>,
    window: Arc<dyn WindowMetrics>,
    lifecycle: Mutex<Lifecycle>,
}

impl GridInner {
    /// `window` mode, or `parent` mode with nothing to inherit.
    fn follows_window(&self) -> bool {
        match self.config.relative_to {
            InheritanceMode::Window => true,
            InheritanceMode::Parent => self.inherited.is_none(),
            InheritanceMode::SelfMeasured => false,
        }
    }

    fn is_mounted(&self) -> bool {
        self.lifecycle.lock().state == LifecycleState::Mounted
    }

    fn resolve(&self, measurement: Measurement) -> SizeClass {
        self.config
            .breakpoints
            .resolve(measurement.extent(self.direction.is_horizontal()))
    }

    /// Recompute the size class; publish only on an actual transition.
    fn update_size_class(&self, measurement: Measurement) -> bool {
        if !self.is_mounted() {
            tracing::trace!(
                target: targets::GRID,
                %measurement,
                "grid not mounted, skipping size class update"
            );
            return false;
        }

        let class = self.resolve(measurement);
        match self.size_class.replace(class) {
            Some(previous) => {
                tracing::debug!(
                    target: targets::GRID,
                    mode = %self.config.relative_to,
                    %measurement,
                    from = %previous,
                    to = %class,
                    "size class changed"
                );
                self.size_class_changed.emit(class);
                true
            }
            None => false,
        }
    }
}

/// A responsive grid container.
///
/// See the [module documentation](self) for inheritance modes and the
/// lifecycle. Dropping a node unmounts it.
pub struct GridNode {
    inner: Arc<GridInner>,
}

impl GridNode {
    /// Construct a grid.
    ///
    /// `parent` is the context of the enclosing grid, if any; it is only
    /// consulted in `parent` mode. `window` is the window measurement
    /// source used by `window` mode and by `parent` mode when the
    /// inheritance chain is broken.
    pub fn new(
        config: GridConfig,
        parent: Option<&GridContext>,
        window: Arc<dyn WindowMetrics>,
    ) -> Self {
        let size_provider = SizeSubscriber::new();
        let direction = ContentDirection::from_horizontal(config.horizontal);

        let inherited = match config.relative_to {
            InheritanceMode::Parent => parent.and_then(|ctx| ctx.reference_provider.clone()),
            InheritanceMode::Window | InheritanceMode::SelfMeasured => None,
        };
        let reference = match config.relative_to {
            InheritanceMode::Window => None,
            InheritanceMode::SelfMeasured => Some(size_provider.handle()),
            InheritanceMode::Parent => inherited.clone(),
        };

        // Window-rooted chains are measured up front; nothing else will
        // deliver a size until the window changes.
        let initial = match (config.relative_to, &inherited) {
            (InheritanceMode::Window, _) | (InheritanceMode::Parent, None) => window.window_size(),
            (InheritanceMode::Parent, Some(handle)) => handle.measurement(),
            (InheritanceMode::SelfMeasured, _) => Measurement::ZERO,
        };
        let initial_class = config
            .breakpoints
            .resolve(initial.extent(direction.is_horizontal()));

        tracing::debug!(
            target: targets::GRID,
            mode = %config.relative_to,
            horizontal = config.horizontal,
            inherits = inherited.is_some(),
            %initial,
            size_class = %initial_class,
            "grid constructed"
        );

        Self {
            inner: Arc::new(GridInner {
                direction,
                size_class: Property::new(initial_class),
                size_class_changed: Signal::new(),
                size_provider,
                inherited,
                reference,
                window,
                lifecycle: Mutex::new(Lifecycle {
                    state: LifecycleState::Constructing,
                    window_listener: None,
                    parent_listener: None,
                }),
                config,
            }),
        }
    }

    /// Construct a nested grid that receives this grid's context and
    /// window source.
    pub fn child(&self, config: GridConfig) -> GridNode {
        GridNode::new(config, Some(&self.context()), self.inner.window.clone())
    }

    /// Transition `Constructing -> Mounted`.
    ///
    /// Registers for window resizes when following the window, or
    /// subscribes to the inherited reference subscriber in `parent` mode.
    pub fn on_mount(&self) -> Result<()> {
        let mut lifecycle = self.inner.lifecycle.lock();
        if lifecycle.state != LifecycleState::Constructing {
            return Err(GridError::InvalidTransition {
                from: lifecycle.state,
                to: LifecycleState::Mounted,
            });
        }

        if self.inner.follows_window() {
            let listener = self.size_class_listener();
            self.inner.window.add_resize_listener(&listener);
            lifecycle.window_listener = Some(listener);
        }

        if let Some(reference) = &self.inner.inherited {
            let listener = self.size_class_listener();
            reference.subscribe(&listener);
            lifecycle.parent_listener = Some(listener);
        }

        lifecycle.state = LifecycleState::Mounted;
        tracing::debug!(
            target: targets::GRID,
            mode = %self.inner.config.relative_to,
            window = lifecycle.window_listener.is_some(),
            parent = lifecycle.parent_listener.is_some(),
            "grid mounted"
        );
        Ok(())
    }

    /// Handle a layout measurement of this grid's container.
    ///
    /// In `self` mode the size class is recomputed first. The measurement
    /// is then forwarded to this grid's own subscriber in every mode.
    /// Measurements arriving while not mounted are dropped.
    pub fn on_measured(&self, width: f64, height: f64) {
        if !self.inner.is_mounted() {
            tracing::trace!(
                target: targets::GRID,
                width,
                height,
                state = %self.lifecycle_state(),
                "dropping layout measurement"
            );
            return;
        }

        let measurement = Measurement::new(width, height);
        if self.inner.config.relative_to == InheritanceMode::SelfMeasured {
            self.inner.update_size_class(measurement);
        }
        self.inner.size_provider.publish(measurement);
    }

    /// Handle a window resize.
    ///
    /// Only grids following the window react; for the rest this is a no-op.
    pub fn on_window_resized(&self, width: f64, height: f64) {
        if self.inner.follows_window() {
            self.inner.update_size_class(Measurement::new(width, height));
        }
    }

    /// Transition to `Unmounted`.
    ///
    /// Removes the window and parent registrations, closes this grid's
    /// subscriber and drops size-class listeners. Idempotent.
    pub fn on_unmount(&self) {
        let mut lifecycle = self.inner.lifecycle.lock();
        if lifecycle.state == LifecycleState::Unmounted {
            return;
        }

        if let Some(listener) = lifecycle.window_listener.take() {
            self.inner.window.remove_resize_listener(&listener);
        }
        if let (Some(listener), Some(reference)) =
            (lifecycle.parent_listener.take(), &self.inner.inherited)
        {
            reference.unsubscribe(&listener);
        }
        let previous = std::mem::replace(&mut lifecycle.state, LifecycleState::Unmounted);
        drop(lifecycle);

        self.inner.size_provider.close();
        self.inner.size_class_changed.disconnect_all();
        tracing::debug!(target: targets::GRID, from = %previous, "grid unmounted");
    }

    /// Current lifecycle state.
    pub fn lifecycle_state(&self) -> LifecycleState {
        self.inner.lifecycle.lock().state
    }

    /// The active size class.
    pub fn size_class(&self) -> SizeClass {
        self.inner.size_class.get()
    }

    /// Fired with the new class whenever the active size class changes.
    ///
    /// Repeated measurements within the same class never fire it.
    pub fn size_class_changed(&self) -> &Signal<SizeClass> {
        &self.inner.size_class_changed
    }

    /// The configuration this grid was built with.
    pub fn config(&self) -> &GridConfig {
        &self.inner.config
    }

    /// Content direction.
    pub fn direction(&self) -> ContentDirection {
        self.inner.direction
    }

    /// Last measurement forwarded to this grid's own subscriber.
    pub fn measurement(&self) -> Measurement {
        self.inner.size_provider.measurement()
    }

    /// Whether this grid currently takes its size from the window.
    pub fn follows_window(&self) -> bool {
        self.inner.follows_window()
    }

    /// Snapshot of the context handed to descendants.
    pub fn context(&self) -> GridContext {
        GridContext {
            direction: self.inner.direction,
            stretch: self.inner.config.stretchable,
            size_class: self.size_class(),
            size_provider: self.inner.size_provider.handle(),
            reference_provider: self.inner.reference.clone(),
        }
    }

    /// Presentation directive for the container.
    pub fn layout(&self) -> GridLayout {
        GridLayout {
            flow: self.inner.direction.flow(),
            stretch: self.inner.config.stretchable,
            scrollable: self.inner.config.scrollable,
        }
    }

    /// A fresh listener that recomputes this grid's size class. Holds the
    /// grid weakly so a late notification after drop is a no-op.
    fn size_class_listener(&self) -> SizeListener {
        let inner: Weak<GridInner> = Arc::downgrade(&self.inner);
        Arc::new(move |size: &Measurement| {
            if let Some(inner) = inner.upgrade() {
                inner.update_size_class(*size);
            }
        })
    }
}

impl Drop for GridNode {
    fn drop(&mut self) {
        self.on_unmount();
    }
}

impl fmt::Debug for GridNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridNode")
            .field("state", &self.lifecycle_state())
            .field("relative_to", &self.inner.config.relative_to)
            .field("direction", &self.inner.direction)
            .field("size_class", &self.size_class())
            .field("inherits", &self.inner.inherited.is_some())
            .finish()
    }
}

static_assertions::assert_impl_all!(GridNode: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowSize;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn four_class_config() -> GridConfig {
        let breakpoints = Breakpoints::from_thresholds([480.0, 768.0, 1024.0]).unwrap();
        GridConfig::new().breakpoints(breakpoints)
    }

    fn window(width: f64, height: f64) -> Arc<WindowSize> {
        Arc::new(WindowSize::new(width, height))
    }

    fn count_changes(node: &GridNode) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        node.size_class_changed().connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn parse_inheritance_modes() {
        assert_eq!("window".parse::<InheritanceMode>().unwrap(), InheritanceMode::Window);
        assert_eq!("self".parse::<InheritanceMode>().unwrap(), InheritanceMode::SelfMeasured);
        assert_eq!("parent".parse::<InheritanceMode>().unwrap(), InheritanceMode::Parent);
        assert!(matches!(
            "screen".parse::<InheritanceMode>(),
            Err(GridError::UnknownInheritanceMode(mode)) if mode == "screen"
        ));
    }

    #[test]
    fn window_grid_resolves_initial_class_from_window() {
        let node = GridNode::new(four_class_config(), None, window(800.0, 300.0));
        assert_eq!(node.lifecycle_state(), LifecycleState::Constructing);
        assert_eq!(node.size_class(), SizeClass::Md);
        assert!(node.context().reference_provider.is_none());
    }

    #[test]
    fn self_grid_starts_at_smallest_class() {
        let node = GridNode::new(
            four_class_config().relative_to(InheritanceMode::SelfMeasured),
            None,
            window(2000.0, 2000.0),
        );
        assert_eq!(node.size_class(), SizeClass::Xs);
        let ctx = node.context();
        assert_eq!(ctx.reference_provider.as_ref(), Some(&ctx.size_provider));
    }

    #[test]
    fn self_grid_follows_layout_not_window() {
        let win = window(300.0, 300.0);
        let node = GridNode::new(
            four_class_config().relative_to(InheritanceMode::SelfMeasured),
            None,
            win.clone(),
        );
        node.on_mount().unwrap();
        assert!(!node.follows_window());
        assert_eq!(win.listener_count(), 0);

        node.on_measured(1100.0, 10.0);
        assert_eq!(node.size_class(), SizeClass::Lg);
        win.resize(100.0, 100.0);
        assert_eq!(node.size_class(), SizeClass::Lg);
    }

    #[test]
    fn window_grid_ignores_own_layout_for_class_but_forwards_it() {
        let node = GridNode::new(four_class_config(), None, window(500.0, 500.0));
        node.on_mount().unwrap();
        let forwarded = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let forwarded_clone = forwarded.clone();
        node.context()
            .size_provider
            .connect(move |m: &Measurement| forwarded_clone.lock().push(*m));

        node.on_measured(2000.0, 100.0);

        assert_eq!(node.size_class(), SizeClass::Sm);
        assert_eq!(*forwarded.lock(), vec![Measurement::new(2000.0, 100.0)]);
        assert_eq!(node.measurement(), Measurement::new(2000.0, 100.0));
    }

    #[test]
    fn horizontal_grid_classifies_by_height() {
        let win = window(2000.0, 300.0);
        let node = GridNode::new(four_class_config().horizontal(true), None, win.clone());
        node.on_mount().unwrap();
        assert_eq!(node.size_class(), SizeClass::Xs);

        win.resize(10.0, 500.0);
        assert_eq!(node.size_class(), SizeClass::Sm);
        assert_eq!(node.layout().flow, Flow::Row);
    }

    #[test]
    fn same_class_measurements_do_not_publish() {
        let node = GridNode::new(
            four_class_config().relative_to(InheritanceMode::SelfMeasured),
            None,
            window(0.0, 0.0),
        );
        node.on_mount().unwrap();
        let changes = count_changes(&node);

        node.on_measured(800.0, 0.0);
        node.on_measured(900.0, 0.0);
        node.on_measured(1000.0, 0.0);
        assert_eq!(changes.load(Ordering::SeqCst), 1);

        node.on_measured(100.0, 0.0);
        assert_eq!(changes.load(Ordering::SeqCst), 2);
        assert_eq!(node.size_class(), SizeClass::Xs);
    }

    #[test]
    fn window_resize_applies_only_when_following_window() {
        let node = GridNode::new(GridConfig::default(), None, window(1300.0, 800.0));
        assert_eq!(node.size_class(), SizeClass::Xl);

        node.on_window_resized(300.0, 800.0);
        assert_eq!(node.size_class(), SizeClass::Xl);

        node.on_mount().unwrap();
        let changes = count_changes(&node);
        node.on_window_resized(300.0, 800.0);
        assert_eq!(node.size_class(), SizeClass::Xs);
        assert_eq!(changes.load(Ordering::SeqCst), 1);

        let measured = GridNode::new(
            GridConfig::new().relative_to(InheritanceMode::SelfMeasured),
            None,
            window(1300.0, 800.0),
        );
        measured.on_mount().unwrap();
        measured.on_measured(900.0, 400.0);
        measured.on_window_resized(100.0, 100.0);
        assert_eq!(measured.size_class(), SizeClass::Md);

        node.on_unmount();
        node.on_window_resized(1300.0, 800.0);
        assert_eq!(node.size_class(), SizeClass::Xs);
    }

    #[test]
    fn measurements_before_mount_are_dropped() {
        let node = GridNode::new(
            four_class_config().relative_to(InheritanceMode::SelfMeasured),
            None,
            window(0.0, 0.0),
        );
        node.on_measured(900.0, 0.0);
        assert_eq!(node.size_class(), SizeClass::Xs);
        assert_eq!(node.measurement(), Measurement::ZERO);
    }

    #[test]
    fn mount_twice_is_rejected() {
        let node = GridNode::new(GridConfig::default(), None, window(0.0, 0.0));
        node.on_mount().unwrap();
        assert!(matches!(
            node.on_mount(),
            Err(GridError::InvalidTransition {
                from: LifecycleState::Mounted,
                to: LifecycleState::Mounted
            })
        ));
        node.on_unmount();
        assert!(matches!(
            node.on_mount(),
            Err(GridError::InvalidTransition { from: LifecycleState::Unmounted, .. })
        ));
    }

    #[test]
    fn unmount_removes_window_listener() {
        let win = window(100.0, 100.0);
        let node = GridNode::new(GridConfig::default(), None, win.clone());
        node.on_mount().unwrap();
        assert_eq!(win.listener_count(), 1);

        node.on_unmount();
        node.on_unmount();
        assert_eq!(win.listener_count(), 0);
        assert!(node.context().size_provider.is_closed());
    }

    #[test]
    fn drop_unmounts() {
        let win = window(100.0, 100.0);
        {
            let node = GridNode::new(GridConfig::default(), None, win.clone());
            node.on_mount().unwrap();
            assert_eq!(win.listener_count(), 1);
        }
        assert_eq!(win.listener_count(), 0);
    }

    #[test]
    fn parent_mode_passes_inherited_reference_through() {
        let win = window(0.0, 0.0);
        let root = GridNode::new(
            four_class_config().relative_to(InheritanceMode::SelfMeasured),
            None,
            win,
        );
        let mid = root.child(four_class_config().relative_to(InheritanceMode::Parent));
        let leaf = mid.child(four_class_config().relative_to(InheritanceMode::Parent));

        let root_provider = root.context().size_provider;
        assert_eq!(mid.context().reference_provider, Some(root_provider.clone()));
        assert_eq!(leaf.context().reference_provider, Some(root_provider));
    }

    #[test]
    fn parent_mode_starts_from_inherited_measurement() {
        let root = GridNode::new(
            four_class_config().relative_to(InheritanceMode::SelfMeasured),
            None,
            window(0.0, 0.0),
        );
        root.on_mount().unwrap();
        root.on_measured(900.0, 0.0);

        let child = root.child(four_class_config().relative_to(InheritanceMode::Parent));
        assert_eq!(child.size_class(), SizeClass::Md);
    }

    #[test]
    fn config_from_toml() {
        let config = GridConfig::from_toml_str(
            r#"
            relative_to = "self"
            stretchable = true
            scrollable = true

            [breakpoints]
            classes = ["sm", "md", "xl"]
            thresholds = [500, 900]
            "#,
        )
        .unwrap();

        assert_eq!(config.relative_to, InheritanceMode::SelfMeasured);
        assert!(config.stretchable && config.scrollable && !config.horizontal);
        assert_eq!(
            config.breakpoints.classes(),
            &[SizeClass::Sm, SizeClass::Md, SizeClass::Xl]
        );
    }

    #[test]
    fn config_rejects_bad_values() {
        assert!(matches!(
            GridConfig::from_toml_str(r#"relative_to = "screen""#),
            Err(GridError::Config(_))
        ));
        assert!(matches!(
            GridConfig::from_toml_str("breakpoints = [900, 400]"),
            Err(GridError::Config(_))
        ));
        let defaults = GridConfig::from_toml_str("").unwrap();
        assert_eq!(defaults, GridConfig::default());
    }
}
