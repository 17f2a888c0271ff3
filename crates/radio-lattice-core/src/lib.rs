//! Core systems for radio-lattice.
//!
//! This crate provides the foundational pieces the selection widgets are
//! built on:
//!
//! - **Signal/Slot System**: Type-safe, synchronous inter-object communication
//! - **Property System**: Typed properties with change detection and reset
//! - **Errors**: Error types shared across the workspace
//! - **Logging**: `tracing` targets and deprecation warnings
//!
//! # Signal/Slot Example
//!
//! ```
//! use radio_lattice_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use radio_lattice_core::{Property, Signal};
//!
//! // A toggle that remembers its default
//! struct Toggle {
//!     on: Property<bool>,
//!     on_changed: Signal<bool>,
//! }
//!
//! impl Toggle {
//!     fn flip(&self) {
//!         let next = !self.on.get();
//!         if self.on.set(next) {
//!             self.on_changed.emit(next);
//!         }
//!     }
//!
//!     fn reset(&self) {
//!         if self.on.reset().is_some() {
//!             self.on_changed.emit(self.on.get());
//!         }
//!     }
//! }
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::SelectionError;
pub use property::Property;
pub use signal::{ConnectionId, Signal};
