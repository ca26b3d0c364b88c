//! Change-detecting value cells.
//!
//! [`Property<T>`] wraps a value and reports whether a write actually
//! changed it. Pairing a property with a [`Signal`](crate::Signal) gives
//! "notify only on change" semantics:
//!
//! ```
//! use cascade_grid_core::{Property, SizeClass, Signal};
//!
//! let class = Property::new(SizeClass::Xs);
//! let changed = Signal::<SizeClass>::new();
//!
//! if let Some(_previous) = class.replace(SizeClass::Md) {
//!     changed.emit(SizeClass::Md);
//! }
//! assert!(class.replace(SizeClass::Md).is_none());
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value cell with change detection.
///
/// Uses interior mutability with `RwLock`; `Property<T>` is `Send + Sync`
/// whenever `T` is.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Overwrite the value without change detection.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if it changed.
    pub fn set(&self, value: T) -> bool {
        self.replace(value).is_some()
    }

    /// Set the value, returning the previous one if it changed.
    ///
    /// The write lock is released before returning, so callers may notify
    /// listeners that read this property again.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        (*current != value).then(|| std::mem::replace(&mut *current, value))
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}
