//! Deprecated selection API.
//!
//! Older callers select through `select`/`set_selected`/`selected`/
//! `reset_selected` and listen to `selected_changed`. [`LegacySelection`]
//! keeps those entry points working on top of [`SingleSelectionHandling`];
//! every call logs a deprecation warning.
//!
//! Enabled by the `deprecated-api` cargo feature.

use radio_lattice_core::logging::{deprecated_method, deprecated_signal};
use radio_lattice_core::ConnectionId;

use crate::group::RadioGroup;
use crate::item::ItemHandle;
use crate::selection::{SelectionChange, SingleSelectionHandling};

const USE_SET_SELECTION: &str = "Use 'set_selection' instead!";

/// The pre-`selection` API of [`RadioGroup`].
pub trait LegacySelection {
    /// Select `item`.
    #[deprecated(note = "Use `set_selection` instead")]
    fn select(&self, item: &ItemHandle);

    /// Select `item`.
    #[deprecated(note = "Use `set_selection` instead")]
    fn set_selected(&self, item: &ItemHandle);

    /// The selected item.
    #[deprecated(note = "Use `selection` instead")]
    fn selected(&self) -> Option<ItemHandle>;

    /// Clear the selection.
    #[deprecated(note = "Use `reset_selection` instead")]
    fn reset_selected(&self);

    /// Listen to selection changes through the old signal.
    #[deprecated(note = "Connect to `selection_changed` instead")]
    fn connect_selected_changed<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&SelectionChange<ItemHandle>) + Send + Sync + 'static;

    /// Stop listening on the old signal.
    fn disconnect_selected_changed(&self, id: ConnectionId) -> bool;
}

impl LegacySelection for RadioGroup {
    fn select(&self, item: &ItemHandle) {
        deprecated_method("select", USE_SET_SELECTION);
        self.set_selection(std::slice::from_ref(item));
    }

    fn set_selected(&self, item: &ItemHandle) {
        deprecated_method("set_selected", USE_SET_SELECTION);
        self.set_selection(std::slice::from_ref(item));
    }

    fn selected(&self) -> Option<ItemHandle> {
        deprecated_method("selected", "Use 'selection' instead!");
        self.selection().into_iter().next()
    }

    fn reset_selected(&self) {
        deprecated_method("reset_selected", "Use 'reset_selection' instead!");
        self.reset_selection();
    }

    fn connect_selected_changed<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&SelectionChange<ItemHandle>) + Send + Sync + 'static,
    {
        deprecated_signal("selected_changed", "Use 'selection_changed' instead!");
        self.selected_changed().connect(slot)
    }

    fn disconnect_selected_changed(&self, id: ConnectionId) -> bool {
        self.selected_changed().disconnect(id)
    }
}
