//! Error types for radio-lattice.

/// Errors raised by the strict single-selection entry point.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// A single-selection target was given more than one item.
    #[error("Could not select more than one item, got {count}")]
    TooManyItems {
        /// The number of items passed in.
        count: usize,
    },
    /// The item is not one of the selectables of the target.
    #[error("Item is not selectable by this target")]
    NotSelectable,
}
