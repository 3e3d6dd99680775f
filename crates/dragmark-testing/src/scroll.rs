//! Scroll host double with a bounded offset.

use std::cell::{Cell, RefCell};

use dragmark_core::ScrollHost;

/// A [`ScrollHost`] whose offset is clamped to `[0, max_offset]`, recording
/// every requested delta.
pub struct TestScrollHost {
    offset: Cell<f32>,
    max_offset: f32,
    deltas: RefCell<Vec<f32>>,
}

impl TestScrollHost {
    pub fn new(max_offset: f32) -> Self {
        Self {
            offset: Cell::new(0.0),
            max_offset,
            deltas: RefCell::new(Vec::new()),
        }
    }

    /// Current scroll offset in pixels.
    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    /// Every delta requested so far, in order.
    pub fn deltas(&self) -> Vec<f32> {
        self.deltas.borrow().clone()
    }
}

impl ScrollHost for TestScrollHost {
    fn scroll_by(&self, delta: f32) -> f32 {
        self.deltas.borrow_mut().push(delta);
        let before = self.offset.get();
        let after = (before + delta).clamp(0.0, self.max_offset);
        self.offset.set(after);
        after - before
    }
}
