//! Property system for radio-lattice.
//!
//! Properties hold a typed value together with the value they were created
//! with, so they can be reset. Properties do not notify on their own: the
//! owner checks the return value of [`Property::set`] / [`Property::replace`]
//! and emits its notification signal when the value actually changed.
//!
//! # Example
//!
//! ```
//! use radio_lattice_core::{Property, Signal};
//!
//! struct Counter {
//!     value: Property<i32>,
//!     value_changed: Signal<i32>,
//! }
//!
//! impl Counter {
//!     fn set_value(&self, new_value: i32) {
//!         if self.value.set(new_value) {
//!             self.value_changed.emit(new_value);
//!         }
//!     }
//! }
//!
//! let counter = Counter { value: Property::new(0), value_changed: Signal::new() };
//! counter.set_value(3);
//! assert_eq!(counter.value.get(), 3);
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A reactive property that tracks changes and remembers its initial value.
///
/// # Thread Safety
///
/// `Property<T>` uses interior mutability with `RwLock` and is `Send + Sync`
/// when `T` is.
pub struct Property<T> {
    value: RwLock<T>,
    init: T,
}

impl<T: Clone> Property<T> {
    /// Create a new property. `value` is also the value restored by `reset()`.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value.clone()),
            init: value,
        }
    }

    /// Get the current value.
    ///
    /// This clones the value. For large types, consider using `with()` instead.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// The value this property was created with.
    pub fn init_value(&self) -> &T {
        &self.init
    }

    /// Set the value without change detection.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller should emit the associated notification signal when this
    /// returns `true`.
    pub fn set(&self, value: T) -> bool {
        self.replace(value).is_some()
    }

    /// Set the value, returning the old value if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }

    /// Restore the initial value, returning the old value if it changed.
    pub fn reset(&self) -> Option<T> {
        self.replace(self.init.clone())
    }

    /// Whether the current value equals the initial value.
    pub fn is_init(&self) -> bool {
        *self.value.read() == self.init
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .field("init", &self.init)
            .finish()
    }
}
