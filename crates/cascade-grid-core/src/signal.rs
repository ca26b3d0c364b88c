//! Synchronous publish/subscribe signals.
//!
//! A [`Signal<Args>`] holds a set of slots (callbacks) and invokes all of
//! them, in registration order, every time [`Signal::emit`] is called.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The hub that owns the slot set
//! - [`Slot<Args>`] - A shared callback; its `Arc` identity is its key
//! - [`ConnectionId`] - Returned when a slot is registered
//!
//! # Identity
//!
//! Slots registered through [`Signal::subscribe`] are keyed by the identity
//! of their `Arc`, not by value. Subscribing the same `Arc` twice yields a
//! single registration, and [`Signal::unsubscribe`] removes it by the same
//! reference. Closures registered with [`Signal::connect`] are always
//! distinct and are removed through their [`ConnectionId`].
//!
//! # Re-entrancy
//!
//! `emit` snapshots the slot list and releases the lock before invoking
//! anything. A slot may connect, disconnect or unsubscribe any slot
//! (itself included) while it runs; the change takes effect from the next
//! emission and every slot of the current pass is still delivered.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use cascade_grid_core::{Signal, Slot};
//!
//! let signal = Signal::<u32>::new();
//! let slot: Slot<u32> = Arc::new(|value: &u32| println!("got {value}"));
//!
//! let first = signal.subscribe(&slot);
//! let second = signal.subscribe(&slot);
//! assert_eq!(first, second);
//! assert_eq!(signal.connection_count(), 1);
//!
//! signal.emit(7);
//! assert!(signal.unsubscribe(&slot));
//! assert!(!signal.unsubscribe(&slot));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a registered slot.
    ///
    /// Remains valid until the slot is disconnected or the signal is
    /// cleared.
    pub struct ConnectionId;
}

/// A shared callback that can be registered with a [`Signal`].
pub type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

struct Connection<Args> {
    slot: Slot<Args>,
    /// Registration sequence; slot indices get reused, this does not.
    seq: u64,
}

/// A synchronous signal with an ordered set of slots.
///
/// `Signal<Args>` is `Send + Sync`. Emission is synchronous: every slot
/// has run by the time `emit` returns.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    next_seq: AtomicU64,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no slots.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Connect a closure to this signal.
    ///
    /// Every call registers a new slot.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.insert(Arc::new(slot))
    }

    /// Register a shared slot, keyed by its identity.
    ///
    /// If the same `Arc` is already registered, its existing
    /// [`ConnectionId`] is returned and nothing is added.
    pub fn subscribe(&self, slot: &Slot<Args>) -> ConnectionId {
        let mut connections = self.connections.lock();
        if let Some((id, _)) = connections
            .iter()
            .find(|(_, conn)| same_slot(&conn.slot, slot))
        {
            return id;
        }
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        connections.insert(Connection {
            slot: slot.clone(),
            seq,
        })
    }

    /// Remove a slot previously registered with [`subscribe`](Self::subscribe).
    ///
    /// Returns `true` if the slot was registered. Unknown slots are ignored.
    pub fn unsubscribe(&self, slot: &Slot<Args>) -> bool {
        let mut connections = self.connections.lock();
        let id = connections
            .iter()
            .find(|(_, conn)| same_slot(&conn.slot, slot))
            .map(|(id, _)| id);
        match id {
            Some(id) => connections.remove(id).is_some(),
            None => false,
        }
    }

    /// Disconnect a slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect every slot.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Number of registered slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Invoke every registered slot with `args`, in registration order.
    ///
    /// Safe to call with no slots.
    #[tracing::instrument(skip_all, target = "cascade_grid_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        let slots = self.snapshot();
        tracing::trace!(target: targets::SIGNAL, slot_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }

    fn insert(&self, slot: Slot<Args>) -> ConnectionId {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.connections.lock().insert(Connection { slot, seq })
    }

    /// Clone the slot list in registration order. The lock is released on
    /// return.
    fn snapshot(&self) -> Vec<Slot<Args>> {
        let connections = self.connections.lock();
        let mut ordered: Vec<(u64, Slot<Args>)> = connections
            .values()
            .map(|conn| (conn.seq, conn.slot.clone()))
            .collect();
        ordered.sort_unstable_by_key(|(seq, _)| *seq);
        ordered.into_iter().map(|(_, slot)| slot).collect()
    }
}

/// Compare slots by allocation, ignoring vtable metadata.
fn same_slot<Args>(a: &Slot<Args>, b: &Slot<Args>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

static_assertions::assert_impl_all!(Signal<u32>: Send, Sync);
