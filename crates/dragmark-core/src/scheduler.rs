//! Cancellable delayed-callback scheduling.
//!
//! The library never owns a thread or a clock. The host provides a
//! [`TickScheduler`] — typically a thin wrapper over its event loop's timer
//! queue — and the auto-scroller holds at most one [`TickRegistration`] at a
//! time. Because both scheduling and cancellation run on the same cooperative
//! thread, cancelling a registration can never race a yet-to-fire callback.

use std::rc::Rc;
use std::time::Duration;

/// Identifies a scheduled callback for cancellation.
pub type TickId = u64;

/// Schedules one-shot delayed callbacks on the host event loop.
pub trait TickScheduler {
    /// Schedules `callback` to run after `delay`.
    ///
    /// Returns `None` if the scheduler cannot accept work (for example the
    /// host loop is shutting down); callers treat that as "no tick pending".
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Option<TickId>;

    /// Cancels a previously scheduled callback. Unknown or already-fired ids
    /// are ignored.
    fn cancel(&self, id: TickId);
}

/// RAII handle for a scheduled callback; dropping it cancels the callback.
pub struct TickRegistration {
    scheduler: Rc<dyn TickScheduler>,
    id: Option<TickId>,
}

impl TickRegistration {
    pub(crate) fn new(scheduler: Rc<dyn TickScheduler>, id: TickId) -> Self {
        Self {
            scheduler,
            id: Some(id),
        }
    }

    /// Cancels the callback explicitly. Equivalent to dropping the handle.
    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl Drop for TickRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel(id);
        }
    }
}
