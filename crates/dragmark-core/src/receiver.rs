//! Receiver trait for selection mutations.
//!
//! This is the seam between the gesture handler and whatever owns the item
//! data (an adapter, a view model, a plain `Vec`). The handler never stores
//! selection itself; it drives the receiver and trusts it to reflect changes
//! immediately.

/// Receives index-level selection mutations from a drag-select gesture.
///
/// Methods take `&self`: implementations are expected to use interior
/// mutability (`RefCell`, `Cell`) since the handler holds them behind
/// `Rc<dyn DragSelectReceiver>` on a single-threaded event loop.
pub trait DragSelectReceiver {
    /// The total number of items in the underlying collection.
    fn item_count(&self) -> usize;

    /// Selects or deselects the item at `index`.
    ///
    /// Must be idempotent: setting an already-selected item selected again
    /// is a no-op. The change must be observable through [`is_selected`]
    /// immediately, since the handler reads back selection state mid-gesture
    /// (Path mode toggling).
    ///
    /// [`is_selected`]: DragSelectReceiver::is_selected
    fn set_selected(&self, index: usize, selected: bool);

    /// Whether the item at `index` is currently selected.
    fn is_selected(&self, index: usize) -> bool;

    /// Whether a drag is allowed to start or extend onto `index`.
    ///
    /// Returning `false` for the anchor index blocks activation entirely.
    /// Defaults to everything being selectable.
    fn is_index_selectable(&self, index: usize) -> bool {
        let _ = index;
        true
    }
}
