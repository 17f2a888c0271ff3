//! Exclusive selection for radio items.
//!
//! radio-lattice coordinates a set of checkable items so that at most one of
//! them is checked at a time:
//!
//! - [`RadioGroup`]: the coordinator; owns item membership and the selection
//! - [`RadioItem`] / [`ItemHandle`]: what an item must provide, and how the
//!   group refers to it
//! - [`RadioButton`]: a ready-made item
//! - [`SingleSelectionHandling`]: the selection API shared by single-selection
//!   widgets
//! - [`ItemValue`]: item values with loose equality
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use radio_lattice::prelude::*;
//!
//! let items: Vec<_> = ["red", "green", "blue"]
//!     .into_iter()
//!     .map(|color| Arc::new(RadioButton::new(color).with_value(color)))
//!     .collect();
//!
//! let group = RadioGroup::with_items(items.clone()).with_wrap(false);
//! assert!(items[0].is_checked());
//!
//! group.select_next();
//! assert_eq!(group.value(), Some(ItemValue::from("green")));
//!
//! group.set_selection(&[ItemHandle::from(items[2].clone())]);
//! assert!(items[2].is_checked() && !items[1].is_checked());
//! ```
//!
//! # Features
//!
//! - `deprecated-api` (default): the [`compat::LegacySelection`] adapter.

#[cfg(feature = "deprecated-api")]
pub mod compat;
mod group;
mod item;
pub mod selection;
mod value;

pub use group::{FormEntry, RadioGroup, ValueChange};
pub use item::{GroupId, ItemHandle, RadioButton, RadioItem};
pub use selection::{SelectionChange, SingleSelection, SingleSelectionHandling};
pub use value::ItemValue;

pub use radio_lattice_core::{ConnectionId, Property, SelectionError, Signal};

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        ItemHandle, ItemValue, RadioButton, RadioGroup, RadioItem, SelectionChange,
        SingleSelectionHandling, ValueChange,
    };
}
