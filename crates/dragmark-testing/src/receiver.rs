//! Recording receiver for selection assertions.

use std::cell::{Cell, RefCell};

use dragmark_core::DragSelectReceiver;
use rustc_hash::FxHashSet;

/// A [`DragSelectReceiver`] that keeps a selected set and journals every
/// `set_selected` call, including idempotent ones, so tests can assert on
/// both final state and call patterns.
pub struct RecordingReceiver {
    item_count: Cell<usize>,
    selected: RefCell<FxHashSet<usize>>,
    unselectable: FxHashSet<usize>,
    journal: RefCell<Vec<(usize, bool)>>,
}

impl RecordingReceiver {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count: Cell::new(item_count),
            selected: RefCell::new(FxHashSet::default()),
            unselectable: FxHashSet::default(),
            journal: RefCell::new(Vec::new()),
        }
    }

    /// Marks indices the receiver reports as not selectable.
    pub fn with_unselectable(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.unselectable = indices.into_iter().collect();
        self
    }

    pub fn set_item_count(&self, count: usize) {
        self.item_count.set(count);
    }

    /// Currently selected indices, ascending.
    pub fn selected(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.selected.borrow().iter().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// Every `set_selected(index, selected)` call observed so far.
    pub fn journal(&self) -> Vec<(usize, bool)> {
        self.journal.borrow().clone()
    }

    pub fn clear_journal(&self) {
        self.journal.borrow_mut().clear();
    }
}

impl DragSelectReceiver for RecordingReceiver {
    fn item_count(&self) -> usize {
        self.item_count.get()
    }

    fn set_selected(&self, index: usize, selected: bool) {
        self.journal.borrow_mut().push((index, selected));
        let mut set = self.selected.borrow_mut();
        if selected {
            set.insert(index);
        } else {
            set.remove(&index);
        }
    }

    fn is_selected(&self, index: usize) -> bool {
        self.selected.borrow().contains(&index)
    }

    fn is_index_selectable(&self, index: usize) -> bool {
        !self.unselectable.contains(&index)
    }
}
