//! Ready-made selection bookkeeping.
//!
//! Hosts that don't already own a selected-set can use [`SelectionTracker`]
//! as their [`DragSelectReceiver`]: it keeps selected indices in insertion
//! order, enforces an optional max-selection cap, and reports count changes
//! to a listener.

use std::cell::{Cell, RefCell};

use indexmap::IndexSet;

use crate::receiver::DragSelectReceiver;

/// Insertion-ordered selection state with change notifications.
///
/// Interior mutability throughout, so it can sit behind the handler's
/// `Rc<dyn DragSelectReceiver>` while the host keeps its own `Rc` for
/// queries and bulk operations.
pub struct SelectionTracker {
    item_count: Cell<usize>,
    selected: RefCell<IndexSet<usize>>,
    max_selection: Cell<Option<usize>>,
    selectable: Option<Box<dyn Fn(usize) -> bool>>,
    /// UI refresh hook, invoked with each index whose state changed.
    item_changed: Option<Box<dyn Fn(usize)>>,
    /// Invoked with the new selected count, only when the count changed.
    selection_listener: Option<Box<dyn Fn(usize)>>,
    last_notified: Cell<Option<usize>>,
}

impl SelectionTracker {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count: Cell::new(item_count),
            selected: RefCell::new(IndexSet::new()),
            max_selection: Cell::new(None),
            selectable: None,
            item_changed: None,
            selection_listener: None,
            last_notified: Cell::new(None),
        }
    }

    /// Caps how many items can be selected at once. Selections past the cap
    /// are silently refused.
    pub fn with_max_selection(self, max: usize) -> Self {
        self.max_selection.set(Some(max));
        self
    }

    /// Restricts which indices can be selected at all.
    pub fn with_selectable(mut self, predicate: impl Fn(usize) -> bool + 'static) -> Self {
        self.selectable = Some(Box::new(predicate));
        self
    }

    /// Hook invoked with every index whose selection state changed, for
    /// driving UI refresh of that item.
    pub fn with_item_changed(mut self, hook: impl Fn(usize) + 'static) -> Self {
        self.item_changed = Some(Box::new(hook));
        self
    }

    /// Registers a listener for the selected count. Fires only when the
    /// count differs from the last reported one (the first mutation always
    /// reports).
    pub fn with_selection_listener(mut self, listener: impl Fn(usize) + 'static) -> Self {
        self.selection_listener = Some(Box::new(listener));
        self
    }

    pub fn set_item_count(&self, count: usize) {
        self.item_count.set(count);
    }

    /// Toggles `index`; returns whether it is selected afterwards.
    pub fn toggle(&self, index: usize) -> bool {
        let mut selected_now = false;
        if self.index_selectable(index) {
            let mut selected = self.selected.borrow_mut();
            if !selected.shift_remove(&index) && self.under_cap(selected.len()) {
                selected.insert(index);
                selected_now = true;
            }
            drop(selected);
            self.notify_item_changed(index);
        }
        self.fire_selection_listener();
        selected_now
    }

    /// Selects every selectable index. The max-selection cap applies only to
    /// incremental selection, not to bulk select-all.
    pub fn select_all(&self) {
        {
            let mut selected = self.selected.borrow_mut();
            selected.clear();
            for i in 0..self.item_count.get() {
                if self.index_selectable(i) {
                    selected.insert(i);
                }
            }
        }
        if let Some(hook) = &self.item_changed {
            for i in 0..self.item_count.get() {
                hook(i);
            }
        }
        self.fire_selection_listener();
    }

    pub fn clear_selected(&self) {
        let cleared: Vec<usize> = self.selected.borrow_mut().drain(..).collect();
        if let Some(hook) = &self.item_changed {
            for i in cleared {
                hook(i);
            }
        }
        self.fire_selection_listener();
    }

    #[inline]
    pub fn selected_count(&self) -> usize {
        self.selected.borrow().len()
    }

    /// Selected indices in the order they were selected.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected.borrow().iter().copied().collect()
    }

    #[inline]
    pub fn is_index_selected(&self, index: usize) -> bool {
        self.selected.borrow().contains(&index)
    }

    fn index_selectable(&self, index: usize) -> bool {
        self.selectable.as_ref().map_or(true, |p| p(index))
    }

    fn under_cap(&self, current: usize) -> bool {
        self.max_selection.get().map_or(true, |max| current < max)
    }

    fn notify_item_changed(&self, index: usize) {
        if let Some(hook) = &self.item_changed {
            hook(index);
        }
    }

    fn fire_selection_listener(&self) {
        let count = self.selected.borrow().len();
        if self.last_notified.get() == Some(count) {
            return;
        }
        self.last_notified.set(Some(count));
        if let Some(listener) = &self.selection_listener {
            listener(count);
        }
    }
}

impl DragSelectReceiver for SelectionTracker {
    fn item_count(&self) -> usize {
        self.item_count.get()
    }

    fn set_selected(&self, index: usize, selected: bool) {
        // Unselectable indices can only ever be deselected.
        let selected = selected && self.index_selectable(index);
        let changed = {
            let mut set = self.selected.borrow_mut();
            if selected {
                if !set.contains(&index) && self.under_cap(set.len()) {
                    set.insert(index);
                    true
                } else {
                    false
                }
            } else {
                set.shift_remove(&index)
            }
        };
        if changed {
            self.notify_item_changed(index);
        }
        self.fire_selection_listener();
    }

    fn is_selected(&self, index: usize) -> bool {
        self.is_index_selected(index)
    }

    fn is_index_selectable(&self, index: usize) -> bool {
        self.index_selectable(index)
    }
}
