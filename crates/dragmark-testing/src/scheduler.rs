//! Virtual-time tick scheduler.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use dragmark_core::{TickId, TickScheduler};

struct PendingTick {
    id: TickId,
    due_ms: u64,
    callback: Box<dyn FnOnce()>,
}

/// A [`TickScheduler`] over a manually advanced clock.
///
/// Callbacks fire from [`advance`], in due-time order, with the clock set to
/// each callback's due time while it runs — so a callback that reschedules
/// itself (the auto-scroll tick chain) keeps firing for as long as the
/// advance window covers.
///
/// [`advance`]: ManualTickScheduler::advance
pub struct ManualTickScheduler {
    now_ms: Cell<u64>,
    next_id: Cell<TickId>,
    pending: RefCell<Vec<PendingTick>>,
}

impl ManualTickScheduler {
    pub fn new() -> Self {
        Self {
            now_ms: Cell::new(0),
            next_id: Cell::new(1),
            pending: RefCell::new(Vec::new()),
        }
    }

    /// The current virtual time.
    pub fn now(&self) -> Duration {
        Duration::from_millis(self.now_ms.get())
    }

    /// Number of callbacks currently scheduled.
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Advances the clock by `delta`, firing every callback that comes due.
    pub fn advance(&self, delta: Duration) {
        let target = self.now_ms.get() + delta.as_millis() as u64;
        loop {
            let next = {
                let mut pending = self.pending.borrow_mut();
                let due_index = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, tick)| tick.due_ms <= target)
                    .min_by_key(|(_, tick)| (tick.due_ms, tick.id))
                    .map(|(i, _)| i);
                due_index.map(|i| pending.remove(i))
            };
            let Some(tick) = next else {
                break;
            };
            self.now_ms.set(tick.due_ms);
            (tick.callback)();
        }
        self.now_ms.set(target);
    }
}

impl Default for ManualTickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TickScheduler for ManualTickScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<TickId> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.pending.borrow_mut().push(PendingTick {
            id,
            due_ms: self.now_ms.get() + delay.as_millis() as u64,
            callback,
        });
        Some(id)
    }

    fn cancel(&self, id: TickId) {
        self.pending.borrow_mut().retain(|tick| tick.id != id);
    }
}
