//! Size subscribers: per-container measurement hubs.
//!
//! A [`SizeSubscriber`] stores the latest [`Measurement`] of one container
//! and notifies registered listeners every time a new one arrives. It is
//! owned by exactly one container; everything else gets a
//! [`SizeSubscriberHandle`], which can read and subscribe but never
//! publish.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use cascade_grid_core::{Measurement, SizeListener, SizeSubscriber};
//!
//! let subscriber = SizeSubscriber::new();
//! let handle = subscriber.handle();
//!
//! let listener: SizeListener = Arc::new(|m: &Measurement| println!("now {m}"));
//! handle.subscribe(&listener);
//!
//! subscriber.update(640.0, 480.0);
//! assert_eq!(handle.measurement(), Measurement::new(640.0, 480.0));
//!
//! subscriber.close();
//! assert!(handle.is_closed());
//! assert_eq!(handle.listener_count(), 0);
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::logging::targets;
use crate::measurement::Measurement;
use crate::property::Property;
use crate::signal::{ConnectionId, Signal, Slot};

/// A listener for measurement updates.
pub type SizeListener = Slot<Measurement>;

struct Shared {
    measurement: Property<Measurement>,
    changed: Signal<Measurement>,
    closed: AtomicBool,
}

impl Shared {
    fn subscribe(&self, listener: &SizeListener) -> ConnectionId {
        if self.closed.load(Ordering::SeqCst) {
            tracing::trace!(target: targets::SUBSCRIBER, "subscribing to a closed size subscriber");
        }
        self.changed.subscribe(listener)
    }
}

/// The owning side of a measurement hub.
///
/// Not `Clone`: only the creating container may publish. Share a
/// [`SizeSubscriberHandle`] instead. Dropping the subscriber closes it.
pub struct SizeSubscriber {
    shared: Arc<Shared>,
}

impl SizeSubscriber {
    /// Create an open subscriber holding a zero measurement.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                measurement: Property::new(Measurement::ZERO),
                changed: Signal::new(),
                closed: AtomicBool::new(false),
            }),
        }
    }

    /// A read/subscribe capability for this subscriber.
    pub fn handle(&self) -> SizeSubscriberHandle {
        SizeSubscriberHandle {
            shared: self.shared.clone(),
        }
    }

    /// Store a new measurement and notify every listener.
    ///
    /// Listeners run synchronously in registration order. Every call
    /// notifies, even when the measurement is unchanged. Does nothing once
    /// the subscriber is closed.
    pub fn update(&self, width: f64, height: f64) {
        self.publish(Measurement::new(width, height));
    }

    /// [`update`](Self::update) taking a [`Measurement`].
    pub fn publish(&self, measurement: Measurement) {
        if self.is_closed() {
            tracing::trace!(
                target: targets::SUBSCRIBER,
                %measurement,
                "ignoring update on closed size subscriber"
            );
            return;
        }
        self.shared.measurement.set_silent(measurement);
        self.shared.changed.emit(measurement);
    }

    /// The latest measurement.
    pub fn measurement(&self) -> Measurement {
        self.shared.measurement.get()
    }

    /// Register a listener, keyed by its `Arc` identity.
    pub fn subscribe(&self, listener: &SizeListener) -> ConnectionId {
        self.shared.subscribe(listener)
    }

    /// Remove a listener. Unknown listeners are ignored.
    pub fn unsubscribe(&self, listener: &SizeListener) -> bool {
        self.shared.changed.unsubscribe(listener)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.shared.changed.connection_count()
    }

    /// Tear the subscriber down: drop every listener and ignore further
    /// updates.
    pub fn close(&self) {
        if !self.shared.closed.swap(true, Ordering::SeqCst) {
            tracing::trace!(
                target: targets::SUBSCRIBER,
                listeners = self.listener_count(),
                "closing size subscriber"
            );
        }
        self.shared.changed.disconnect_all();
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::SeqCst)
    }
}

impl Default for SizeSubscriber {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SizeSubscriber {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for SizeSubscriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizeSubscriber")
            .field("measurement", &self.measurement())
            .field("listeners", &self.listener_count())
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Read and subscribe access to a [`SizeSubscriber`] owned elsewhere.
///
/// Handles compare equal when they refer to the same subscriber.
#[derive(Clone)]
pub struct SizeSubscriberHandle {
    shared: Arc<Shared>,
}

impl SizeSubscriberHandle {
    /// The latest measurement published by the owner.
    pub fn measurement(&self) -> Measurement {
        self.shared.measurement.get()
    }

    /// Register a listener, keyed by its `Arc` identity.
    ///
    /// Subscribing the same listener twice keeps a single registration.
    pub fn subscribe(&self, listener: &SizeListener) -> ConnectionId {
        self.shared.subscribe(listener)
    }

    /// Remove a listener previously passed to [`subscribe`](Self::subscribe).
    ///
    /// Returns `false`, without error, if it was not registered.
    pub fn unsubscribe(&self, listener: &SizeListener) -> bool {
        self.shared.changed.unsubscribe(listener)
    }

    /// Connect a closure; remove it later with [`disconnect`](Self::disconnect).
    pub fn connect<F>(&self, listener: F) -> ConnectionId
    where
        F: Fn(&Measurement) + Send + Sync + 'static,
    {
        self.shared.changed.connect(listener)
    }

    /// Disconnect a listener by connection ID.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.shared.changed.disconnect(id)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.shared.changed.connection_count()
    }

    /// Whether the owner has torn the subscriber down.
    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::SeqCst)
    }

    /// Whether both handles refer to the same subscriber.
    pub fn same_subscriber(&self, other: &SizeSubscriberHandle) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl PartialEq for SizeSubscriberHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_subscriber(other)
    }
}

impl Eq for SizeSubscriberHandle {}

impl fmt::Debug for SizeSubscriberHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizeSubscriberHandle")
            .field("subscriber", &Arc::as_ptr(&self.shared))
            .field("measurement", &self.measurement())
            .field("closed", &self.is_closed())
            .finish()
    }
}

static_assertions::assert_impl_all!(SizeSubscriber: Send, Sync);
static_assertions::assert_impl_all!(SizeSubscriberHandle: Send, Sync);
