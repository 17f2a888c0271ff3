//! Radio group implementation for exclusive item selection.
//!
//! This module provides [`RadioGroup`], a non-visual coordinator that keeps
//! at most one of its items checked.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use radio_lattice::{ItemValue, RadioButton, RadioGroup, RadioItem};
//!
//! let small = Arc::new(RadioButton::new("Small").with_value("s"));
//! let large = Arc::new(RadioButton::new("Large").with_value("l"));
//!
//! let group = RadioGroup::with_items([small.clone(), large.clone()]);
//!
//! group.value_changed().connect(|change| {
//!     println!("{:?} -> {:?}", change.previous, change.current);
//! });
//!
//! // The first item is selected when nothing was checked up front
//! assert_eq!(group.value(), Some(ItemValue::from("s")));
//!
//! group.set_value("l");
//! assert!(large.is_checked());
//! ```
//!
//! # Synchronization
//!
//! The group listens to its own `selection_changed` signal and to each item's
//! `checked_changed` signal:
//!
//! 1. A selection change unchecks the previous item, checks the new one and
//!    emits `value_changed`.
//! 2. Checking an item makes it the selection; unchecking the selected item
//!    clears the selection.
//!
//! All of this runs synchronously inside the call that triggered it. Slots
//! connected to the group or its items may call back into the group; such a
//! nested change completes before the outer notification resumes, so an outer
//! slot can observe a selection newer than the payload it was given.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use radio_lattice_core::logging::targets;
use radio_lattice_core::{ConnectionId, Property, Signal};
use serde::{Deserialize, Serialize};

use crate::item::{GroupId, ItemHandle, RadioItem};
use crate::selection::{SelectionChange, SingleSelection, SingleSelectionHandling};
use crate::value::ItemValue;

/// Payload of the `value_changed` notification.
///
/// Each side is the item's value, or its label when it has no value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChange {
    /// The value of the newly selected item.
    pub current: Option<ItemValue>,
    /// The value of the previously selected item.
    pub previous: Option<ItemValue>,
}

/// Name/value pair a named group contributes to a submitted form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormEntry {
    /// The group name.
    pub name: String,
    /// The selected item's value.
    pub value: ItemValue,
}

/// A managed item and its `checked_changed` subscription.
struct Member {
    item: ItemHandle,
    connection: ConnectionId,
}

#[derive(Clone, Copy)]
enum Step {
    Next,
    Previous,
}

/// Shared state. Subscriptions hold it weakly.
struct GroupInner {
    id: GroupId,
    members: Mutex<Vec<Member>>,
    selection: SingleSelection<ItemHandle>,
    enabled: Property<Option<bool>>,
    name: Property<Option<String>>,
    wrap: Property<bool>,
    value_changed: Signal<ValueChange>,
    enabled_changed: Signal<Option<bool>>,
    name_changed: Signal<Option<String>>,
    selected_changed: Signal<SelectionChange<ItemHandle>>,
}

/// Coordinates exclusive selection among a set of radio items.
///
/// # Properties
///
/// - `enabled` (`Option<bool>`, default unset): setting it to a value enables
///   every item; unsetting it restores each item's own default
/// - `name` (`Option<String>`, default `None`): propagated to every item
/// - `wrap` (`bool`, default `true`): whether [`select_next`] and
///   [`select_previous`] cycle past the ends
///
/// # Signals
///
/// - `selection_changed(SelectionChange<ItemHandle>)`: the selected item changed
/// - `value_changed(ValueChange)`: emitted after every selection change
/// - `enabled_changed(Option<bool>)` / `name_changed(Option<String>)`
///
/// Misuse (unknown items, unmatched values, empty groups) is ignored rather
/// than reported.
///
/// [`select_next`]: RadioGroup::select_next
/// [`select_previous`]: RadioGroup::select_previous
pub struct RadioGroup {
    inner: Arc<GroupInner>,
}

impl RadioGroup {
    /// Create an empty radio group.
    pub fn new() -> Self {
        let inner = Arc::new(GroupInner {
            id: GroupId::next(),
            members: Mutex::new(Vec::new()),
            selection: SingleSelection::new(),
            enabled: Property::new(None),
            name: Property::new(None),
            wrap: Property::new(true),
            value_changed: Signal::new(),
            enabled_changed: Signal::new(),
            name_changed: Signal::new(),
            selected_changed: Signal::new(),
        });

        // Must be connected before any item is added.
        let weak = Arc::downgrade(&inner);
        inner.selection.selection_changed.connect(move |change| {
            if let Some(inner) = weak.upgrade() {
                inner.on_selection_changed(change);
            }
        });

        tracing::debug!(target: targets::GROUP, group = %inner.id, "created radio group");
        Self { inner }
    }

    /// Create a radio group managing `items`.
    pub fn with_items<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ItemHandle>,
    {
        let group = Self::new();
        group.add(items);
        group
    }

    /// Set `wrap` using builder pattern.
    pub fn with_wrap(self, wrap: bool) -> Self {
        self.set_wrap(wrap);
        self
    }

    /// Set `name` using builder pattern.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.set_name(Some(name.into()));
        self
    }

    /// Set `enabled` using builder pattern.
    pub fn with_enabled(self, enabled: bool) -> Self {
        self.set_enabled(Some(enabled));
        self
    }

    /// This group's unique ID, as recorded by its items.
    pub fn id(&self) -> GroupId {
        self.inner.id
    }

    // =========================================================================
    // Item Management
    // =========================================================================

    /// Add items to the group.
    ///
    /// Items already managed by this group are skipped. An item that is
    /// checked when added becomes the selection. Afterwards, if nothing is
    /// selected, the first managed item is selected.
    pub fn add<I>(&self, items: I)
    where
        I: IntoIterator,
        I::Item: Into<ItemHandle>,
    {
        self.inner.add(items.into_iter().map(Into::into));
    }

    /// Remove an item from the group.
    ///
    /// Returns `false` if the item is not managed by this group. Removing the
    /// selected item clears the selection without choosing a replacement.
    pub fn remove(&self, item: impl Into<ItemHandle>) -> bool {
        self.inner.remove(&item.into())
    }

    /// The managed items in insertion order.
    pub fn items(&self) -> Vec<ItemHandle> {
        self.inner.items()
    }

    /// Number of managed items.
    pub fn len(&self) -> usize {
        self.inner.members.lock().len()
    }

    /// Whether the group manages no items.
    pub fn is_empty(&self) -> bool {
        self.inner.members.lock().is_empty()
    }

    /// Whether `item` is managed by this group.
    pub fn contains(&self, item: impl Into<ItemHandle>) -> bool {
        let item = item.into();
        self.inner.members.lock().iter().any(|m| m.item == item)
    }

    // =========================================================================
    // Value
    // =========================================================================

    /// Select the first item whose value loosely equals `value`.
    ///
    /// Does nothing when no item matches.
    pub fn set_value(&self, value: impl Into<ItemValue>) {
        let value = value.into();
        let found = self
            .items()
            .into_iter()
            .find(|item| item.value().is_some_and(|v| v.loose_eq(&value)));

        match found {
            Some(item) => {
                self.inner.selection.select(Some(item));
            }
            None => {
                tracing::debug!(target: targets::GROUP, group = %self.inner.id, %value, "no item with value");
            }
        }
    }

    /// The selected item's value, or `None` when nothing is selected.
    pub fn value(&self) -> Option<ItemValue> {
        self.inner.selection.selected().and_then(|item| item.value())
    }

    /// The entry this group contributes to a form: its name and the selected
    /// value. `None` if the group is unnamed or has no selected value.
    pub fn form_entry(&self) -> Option<FormEntry> {
        let name = self.name()?;
        let value = self.value()?;
        Some(FormEntry { name, value })
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Select the item after the selected one, skipping disabled items.
    ///
    /// Does nothing when nothing is selected.
    pub fn select_next(&self) {
        self.inner.step(Step::Next);
    }

    /// Select the item before the selected one, skipping disabled items.
    ///
    /// Does nothing when nothing is selected.
    pub fn select_previous(&self) {
        self.inner.step(Step::Previous);
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// The group-level enabled state, `None` when unset.
    pub fn enabled(&self) -> Option<bool> {
        self.inner.enabled.get()
    }

    /// Set or unset the group-level enabled state.
    ///
    /// Any value enables every managed item; `None` resets each item to its
    /// own default.
    pub fn set_enabled(&self, enabled: Option<bool>) {
        if self.inner.enabled.set(enabled) {
            self.inner.apply_enabled(enabled);
            self.inner.enabled_changed.emit(enabled);
        }
    }

    /// Unset the group-level enabled state.
    pub fn reset_enabled(&self) {
        self.set_enabled(None);
    }

    /// The group name.
    pub fn name(&self) -> Option<String> {
        self.inner.name.get()
    }

    /// Set the group name and propagate it to every managed item.
    pub fn set_name(&self, name: Option<String>) {
        if self.inner.name.set(name.clone()) {
            self.inner.apply_name(name.as_deref());
            self.inner.name_changed.emit(name);
        }
    }

    /// Clear the group name.
    pub fn reset_name(&self) {
        self.set_name(None);
    }

    /// Whether navigation wraps around the ends.
    pub fn wrap(&self) -> bool {
        self.inner.wrap.get()
    }

    /// Set whether navigation wraps around the ends.
    pub fn set_wrap(&self, wrap: bool) {
        self.inner.wrap.set(wrap);
    }

    /// Restore the default `wrap` (`true`).
    pub fn reset_wrap(&self) {
        self.inner.wrap.reset();
    }

    // =========================================================================
    // Signals
    // =========================================================================

    /// Emitted when the selected item changes.
    pub fn selection_changed(&self) -> &Signal<SelectionChange<ItemHandle>> {
        &self.inner.selection.selection_changed
    }

    /// Emitted after every selection change with the new and old values.
    pub fn value_changed(&self) -> &Signal<ValueChange> {
        &self.inner.value_changed
    }

    /// Emitted when the group-level enabled state changes.
    pub fn enabled_changed(&self) -> &Signal<Option<bool>> {
        &self.inner.enabled_changed
    }

    /// Emitted when the group name changes.
    pub fn name_changed(&self) -> &Signal<Option<String>> {
        &self.inner.name_changed
    }

    #[cfg(feature = "deprecated-api")]
    pub(crate) fn selected_changed(&self) -> &Signal<SelectionChange<ItemHandle>> {
        &self.inner.selected_changed
    }
}

impl GroupInner {
    fn items(&self) -> Vec<ItemHandle> {
        self.members.lock().iter().map(|m| m.item.clone()).collect()
    }

    fn add(self: &Arc<Self>, items: impl Iterator<Item = ItemHandle>) {
        for item in items {
            if item.group() == Some(self.id) {
                continue;
            }

            let group = Arc::downgrade(self);
            let weak_item = item.downgrade();
            let connection = item.checked_changed().connect(move |_| {
                if let (Some(group), Some(item)) = (group.upgrade(), weak_item.upgrade()) {
                    group.on_item_checked_changed(&item);
                }
            });

            self.members.lock().push(Member {
                item: item.clone(),
                connection,
            });
            item.set_group(Some(self.id));
            tracing::debug!(target: targets::GROUP, group = %self.id, item = ?item.label(), "added item");

            if item.is_checked() {
                self.selection.select(Some(item));
            }
        }

        if self.selection.selected().is_none() {
            let first = self.members.lock().first().map(|m| m.item.clone());
            if let Some(first) = first {
                self.selection.select(Some(first));
            }
        }
    }

    fn remove(&self, item: &ItemHandle) -> bool {
        if item.group() != Some(self.id) {
            tracing::debug!(target: targets::GROUP, group = %self.id, "remove: item not in group");
            return false;
        }

        let member = {
            let mut members = self.members.lock();
            members
                .iter()
                .position(|m| m.item == *item)
                .map(|index| members.remove(index))
        };

        item.reset_group();
        if let Some(member) = member {
            item.checked_changed().disconnect(member.connection);
        }
        tracing::debug!(target: targets::GROUP, group = %self.id, item = ?item.label(), "removed item");

        if self.selection.is_selected(item) {
            self.selection.select(None);
        }
        true
    }

    fn step(&self, step: Step) {
        let Some(current) = self.selection.selected() else {
            return;
        };
        let items = self.items();
        let Some(mut index) = items.iter().position(|item| *item == current) else {
            return;
        };

        let len = items.len();
        let forward = |i: usize| (i + 1) % len;
        let backward = |i: usize| (i + len - 1) % len;

        index = match (step, self.wrap.get()) {
            (Step::Next, true) => forward(index),
            (Step::Next, false) => (index + 1).min(len - 1),
            (Step::Previous, true) => backward(index),
            (Step::Previous, false) => index.saturating_sub(1),
        };

        // Bounded to one pass; lands on a disabled item if all are disabled.
        let mut skipped = 0;
        while skipped < len && !items[index].is_enabled() {
            index = match step {
                Step::Next => forward(index),
                Step::Previous => backward(index),
            };
            skipped += 1;
        }

        self.selection.select(Some(items[index].clone()));
    }

    fn apply_enabled(&self, enabled: Option<bool>) {
        for item in self.items() {
            match enabled {
                Some(_) => item.set_enabled(true),
                None => item.reset_enabled(),
            }
        }
    }

    fn apply_name(&self, name: Option<&str>) {
        for item in self.items() {
            match name {
                Some(name) => item.set_name(Some(name.to_owned())),
                None => item.reset_name(),
            }
        }
    }

    fn on_item_checked_changed(&self, item: &ItemHandle) {
        if item.is_checked() {
            self.selection.select(Some(item.clone()));
        } else if self.selection.is_selected(item) {
            self.selection.select(None);
        }
    }

    fn on_selection_changed(&self, change: &SelectionChange<ItemHandle>) {
        if let Some(previous) = &change.previous {
            previous.set_checked(false);
        }
        if let Some(current) = &change.current {
            current.set_checked(true);
        }

        let value_change = ValueChange {
            current: change.current.as_ref().and_then(|item| reported_value(&**item)),
            previous: change.previous.as_ref().and_then(|item| reported_value(&**item)),
        };
        tracing::debug!(
            target: targets::GROUP,
            group = %self.id,
            current = ?value_change.current,
            previous = ?value_change.previous,
            "selection changed"
        );
        self.value_changed.emit(value_change);

        if self.selected_changed.has_connections() {
            self.selected_changed.emit(change.clone());
        }
    }
}

/// The value reported for an item: its value, falling back to its label.
fn reported_value(item: &dyn RadioItem) -> Option<ItemValue> {
    item.value().or_else(|| item.label().map(ItemValue::Text))
}

impl SingleSelectionHandling for RadioGroup {
    type Item = ItemHandle;

    fn single_selection(&self) -> &SingleSelection<ItemHandle> {
        &self.inner.selection
    }

    fn selectables(&self) -> Vec<ItemHandle> {
        self.items()
    }

    fn is_allow_empty_selection(&self) -> bool {
        true
    }
}

impl Default for RadioGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RadioGroup {
    fn drop(&mut self) {
        let members = std::mem::take(&mut *self.inner.members.lock());
        for member in members {
            member.item.checked_changed().disconnect(member.connection);
            if member.item.group() == Some(self.inner.id) {
                member.item.reset_group();
            }
        }
        self.inner.selection.selection_changed.disconnect_all();
        tracing::debug!(target: targets::GROUP, group = %self.inner.id, "disposed radio group");
    }
}

impl fmt::Debug for RadioGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadioGroup")
            .field("id", &self.inner.id)
            .field("items", &self.len())
            .field("value", &self.value())
            .field("enabled", &self.enabled())
            .field("name", &self.name())
            .field("wrap", &self.wrap())
            .finish()
    }
}

// Ensure RadioGroup is Send + Sync
static_assertions::assert_impl_all!(RadioGroup: Send, Sync);
