//! Radio items.
//!
//! This module defines the [`RadioItem`] capability trait that every item
//! managed by a [`RadioGroup`](crate::RadioGroup) implements, the shared
//! [`ItemHandle`] the group stores, and [`RadioButton`], a ready-made item.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use radio_lattice::{RadioButton, RadioItem};
//!
//! let small = Arc::new(RadioButton::new("Small").with_value("s"));
//! small.checked_changed.connect(|&checked| {
//!     println!("small is now {}", if checked { "on" } else { "off" });
//! });
//!
//! small.set_checked(true);
//! assert!(small.is_checked());
//! ```
//!
//! # Group Membership
//!
//! An item records the [`GroupId`] of the group that manages it. The group
//! owns the membership; the item only keeps the ID so it can answer "which
//! group am I in". The group sets and clears it in `add`/`remove`.

use std::fmt;
use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use radio_lattice_core::{Property, Signal};

use crate::value::ItemValue;

/// Unique identifier for a radio group instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(u64);

impl GroupId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric ID.
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "radio-group#{}", self.0)
    }
}

/// Capabilities an object needs to take part in a radio group.
///
/// All methods take `&self`: items are shared between the application and
/// the group, so implementors use interior mutability (typically
/// [`Property`]).
///
/// Implementors must emit [`checked_changed`](Self::checked_changed) from
/// [`set_checked`](Self::set_checked) whenever the checked state actually
/// changes; the group relies on it to follow user interaction.
pub trait RadioItem: Send + Sync {
    /// The item's value, if it has one.
    fn value(&self) -> Option<ItemValue>;

    /// The item's label, used as the reported value when there is no value.
    fn label(&self) -> Option<String>;

    /// Whether the item is checked.
    fn is_checked(&self) -> bool;

    /// Set the checked state, emitting `checked_changed` on change.
    fn set_checked(&self, checked: bool);

    /// Signal emitted with the new checked state.
    fn checked_changed(&self) -> &Signal<bool>;

    /// Whether the item is enabled.
    fn is_enabled(&self) -> bool;

    /// Set the enabled state.
    fn set_enabled(&self, enabled: bool);

    /// Restore the item's default enabled state.
    fn reset_enabled(&self);

    /// The item's form field name.
    fn name(&self) -> Option<String>;

    /// Set the item's form field name. `None` resets it.
    fn set_name(&self, name: Option<String>);

    /// Reset the item's form field name.
    fn reset_name(&self) {
        self.set_name(None);
    }

    /// The group currently managing this item.
    fn group(&self) -> Option<GroupId>;

    /// Record the group managing this item.
    fn set_group(&self, group: Option<GroupId>);

    /// Forget the managing group.
    fn reset_group(&self) {
        self.set_group(None);
    }
}

/// A shared, identity-compared reference to a radio item.
///
/// Two handles are equal when they point at the same item object.
#[derive(Clone)]
pub struct ItemHandle(Arc<dyn RadioItem>);

impl ItemHandle {
    /// Wrap an item in a new handle.
    pub fn new<T: RadioItem + 'static>(item: T) -> Self {
        Self(Arc::new(item))
    }

    /// Wrap an already shared trait object.
    pub fn from_arc(item: Arc<dyn RadioItem>) -> Self {
        Self(item)
    }

    /// The underlying shared item.
    pub fn as_arc(&self) -> &Arc<dyn RadioItem> {
        &self.0
    }

    /// Whether this handle points at the given shared item.
    pub fn is<T: RadioItem + 'static>(&self, item: &Arc<T>) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(item))
    }

    pub(crate) fn downgrade(&self) -> WeakItemHandle {
        WeakItemHandle(Arc::downgrade(&self.0))
    }
}

impl<T: RadioItem + 'static> From<Arc<T>> for ItemHandle {
    fn from(item: Arc<T>) -> Self {
        Self(item)
    }
}

impl From<&ItemHandle> for ItemHandle {
    fn from(item: &ItemHandle) -> Self {
        item.clone()
    }
}

impl Deref for ItemHandle {
    type Target = dyn RadioItem;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for ItemHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl Eq for ItemHandle {}

impl fmt::Debug for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemHandle")
            .field("label", &self.label())
            .field("value", &self.value())
            .field("checked", &self.is_checked())
            .finish()
    }
}

/// Non-owning counterpart of [`ItemHandle`], held by group subscriptions so an
/// item's own signal never keeps the item alive.
#[derive(Clone)]
pub(crate) struct WeakItemHandle(Weak<dyn RadioItem>);

impl WeakItemHandle {
    pub(crate) fn upgrade(&self) -> Option<ItemHandle> {
        self.0.upgrade().map(ItemHandle)
    }
}

/// A radio button: the stock [`RadioItem`].
///
/// # Signals
///
/// - `checked_changed(bool)`: Emitted when the checked state changes
/// - `enabled_changed(bool)`: Emitted when the enabled state changes
/// - `name_changed(Option<String>)`: Emitted when the name changes
pub struct RadioButton {
    label: Property<String>,
    value: Property<Option<ItemValue>>,
    checked: Property<bool>,
    enabled: Property<bool>,
    name: Property<Option<String>>,
    group: Property<Option<GroupId>>,

    /// Signal emitted when the checked state changes.
    pub checked_changed: Signal<bool>,

    /// Signal emitted when the enabled state changes.
    pub enabled_changed: Signal<bool>,

    /// Signal emitted when the name changes.
    pub name_changed: Signal<Option<String>>,
}

impl RadioButton {
    /// Create an unchecked, enabled radio button with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Property::new(label.into()),
            value: Property::new(None),
            checked: Property::new(false),
            enabled: Property::new(true),
            name: Property::new(None),
            group: Property::new(None),
            checked_changed: Signal::new(),
            enabled_changed: Signal::new(),
            name_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Set the value using builder pattern.
    pub fn with_value(self, value: impl Into<ItemValue>) -> Self {
        self.value.set_silent(Some(value.into()));
        self
    }

    /// Set the initial checked state using builder pattern.
    pub fn with_checked(self, checked: bool) -> Self {
        self.checked.set_silent(checked);
        self
    }

    /// Set the initial enabled state using builder pattern.
    ///
    /// `reset_enabled` still restores the default (enabled).
    pub fn with_enabled(self, enabled: bool) -> Self {
        self.enabled.set_silent(enabled);
        self
    }

    /// Set the form field name using builder pattern.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.name.set_silent(Some(name.into()));
        self
    }

    // =========================================================================
    // Label / Value
    // =========================================================================

    /// Get the label text.
    pub fn text(&self) -> String {
        self.label.get()
    }

    /// Set the label text.
    pub fn set_text(&self, text: impl Into<String>) {
        self.label.set(text.into());
    }

    /// Set or clear the value.
    pub fn set_value(&self, value: Option<ItemValue>) {
        self.value.set(value);
    }
}

impl RadioItem for RadioButton {
    fn value(&self) -> Option<ItemValue> {
        self.value.get()
    }

    fn label(&self) -> Option<String> {
        Some(self.label.get())
    }

    fn is_checked(&self) -> bool {
        self.checked.get()
    }

    fn set_checked(&self, checked: bool) {
        if self.checked.set(checked) {
            self.checked_changed.emit(checked);
        }
    }

    fn checked_changed(&self) -> &Signal<bool> {
        &self.checked_changed
    }

    fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    fn set_enabled(&self, enabled: bool) {
        if self.enabled.set(enabled) {
            self.enabled_changed.emit(enabled);
        }
    }

    fn reset_enabled(&self) {
        if self.enabled.reset().is_some() {
            self.enabled_changed.emit(self.enabled.get());
        }
    }

    fn name(&self) -> Option<String> {
        self.name.get()
    }

    fn set_name(&self, name: Option<String>) {
        if self.name.set(name.clone()) {
            self.name_changed.emit(name);
        }
    }

    fn group(&self) -> Option<GroupId> {
        self.group.get()
    }

    fn set_group(&self, group: Option<GroupId>) {
        self.group.set(group);
    }
}

impl fmt::Debug for RadioButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadioButton")
            .field("label", &self.label.get())
            .field("value", &self.value.get())
            .field("checked", &self.checked.get())
            .field("enabled", &self.enabled.get())
            .field("group", &self.group.get())
            .finish()
    }
}

static_assertions::assert_impl_all!(RadioButton: Send, Sync);
static_assertions::assert_impl_all!(ItemHandle: Send, Sync);
