//! Single-selection handling.
//!
//! [`SingleSelection`] is the selection state shared by widgets that allow at
//! most one selected item, together with its `selection_changed` signal.
//! [`SingleSelectionHandling`] layers the public selection API on top of it:
//! a widget supplies its selectables and its empty-selection policy, and gets
//! `selection`, `set_selection`, `reset_selection` and friends for free.

use radio_lattice_core::logging::targets;
use radio_lattice_core::{Property, SelectionError, Signal};

/// Payload of a `selection_changed` notification.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange<T> {
    /// The newly selected item, if any.
    pub current: Option<T>,
    /// The previously selected item, if any.
    pub previous: Option<T>,
}

impl<T: Clone> SelectionChange<T> {
    /// The new selection in list form (empty or one item).
    pub fn current_items(&self) -> Vec<T> {
        self.current.iter().cloned().collect()
    }

    /// The old selection in list form (empty or one item).
    pub fn previous_items(&self) -> Vec<T> {
        self.previous.iter().cloned().collect()
    }
}

/// Selection state for a single-selection widget.
pub struct SingleSelection<T> {
    selected: Property<Option<T>>,

    /// Signal emitted after the selection changed.
    pub selection_changed: Signal<SelectionChange<T>>,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> SingleSelection<T> {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self {
            selected: Property::new(None),
            selection_changed: Signal::new(),
        }
    }

    /// The selected item, if any.
    pub fn selected(&self) -> Option<T> {
        self.selected.get()
    }

    /// Whether `item` is the selected item.
    pub fn is_selected(&self, item: &T) -> bool {
        self.selected.with(|current| current.as_ref() == Some(item))
    }

    /// Replace the selection.
    ///
    /// This is the single mutation entry point. Returns `true` and emits
    /// `selection_changed` when the selection actually changed.
    pub fn select(&self, item: Option<T>) -> bool {
        match self.selected.replace(item.clone()) {
            Some(previous) => {
                self.selection_changed.emit(SelectionChange {
                    current: item,
                    previous,
                });
                true
            }
            None => false,
        }
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Default for SingleSelection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Selection API for widgets with at most one selected item.
pub trait SingleSelectionHandling {
    /// The selectable item type.
    type Item: Clone + PartialEq + Send + Sync + 'static;

    /// The widget's selection state.
    fn single_selection(&self) -> &SingleSelection<Self::Item>;

    /// Items that may be selected, in order.
    fn selectables(&self) -> Vec<Self::Item>;

    /// Whether the selection may be empty.
    fn is_allow_empty_selection(&self) -> bool;

    /// The selection as a list of zero or one items.
    fn selection(&self) -> Vec<Self::Item> {
        self.single_selection().selected().into_iter().collect()
    }

    /// Select the given item, or clear the selection with an empty slice.
    ///
    /// # Errors
    ///
    /// - [`SelectionError::TooManyItems`] for more than one item
    /// - [`SelectionError::NotSelectable`] for an item not in `selectables()`
    fn try_set_selection(&self, items: &[Self::Item]) -> Result<(), SelectionError> {
        match items {
            [] => {
                self.reset_selection();
                Ok(())
            }
            [item] => {
                if !self.selectables().contains(item) {
                    return Err(SelectionError::NotSelectable);
                }
                self.single_selection().select(Some(item.clone()));
                Ok(())
            }
            _ => Err(SelectionError::TooManyItems { count: items.len() }),
        }
    }

    /// Lenient [`try_set_selection`](Self::try_set_selection): invalid input
    /// is logged and ignored.
    fn set_selection(&self, items: &[Self::Item]) {
        if let Err(err) = self.try_set_selection(items) {
            tracing::debug!(target: targets::GROUP, %err, "ignoring selection request");
        }
    }

    /// Clear the selection, or select the first selectable when the
    /// selection may not be empty.
    fn reset_selection(&self) {
        let replacement = if self.is_allow_empty_selection() {
            None
        } else {
            self.selectables().into_iter().next()
        };
        self.single_selection().select(replacement);
    }

    /// Whether `item` is selected.
    fn is_selected(&self, item: &Self::Item) -> bool {
        self.single_selection().is_selected(item)
    }

    /// Whether nothing is selected.
    fn is_selection_empty(&self) -> bool {
        self.single_selection().selected().is_none()
    }
}
