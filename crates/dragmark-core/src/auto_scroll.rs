//! Repeating auto-scroll tick chain.
//!
//! While the pointer occupies a hotspot band, a tick fires on a fixed delay,
//! scrolls the host by the current velocity and reschedules itself. At most
//! one tick is pending at any time: entering a band supersedes the previous
//! registration, and leaving both bands (or deactivating the gesture) drops
//! it, which cancels through the scheduler synchronously.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::hotspot::HotspotZone;
use crate::scheduler::{TickRegistration, TickScheduler};
use crate::scroll::ScrollHost;

/// Delay between auto-scroll ticks.
pub const AUTO_SCROLL_DELAY: Duration = Duration::from_millis(25);

pub(crate) struct AutoScroller {
    state: Rc<RefCell<AutoScrollState>>,
}

struct AutoScrollState {
    scheduler: Rc<dyn TickScheduler>,
    host: Rc<dyn ScrollHost>,
    listener: Option<Rc<dyn Fn(bool)>>,
    zone: Option<HotspotZone>,
    velocity: f32,
    /// Edge-detection state for the listener: true between a notified
    /// "active" and the matching "inactive".
    scrolling: bool,
    registration: Option<TickRegistration>,
}

impl AutoScroller {
    pub fn new(scheduler: Rc<dyn TickScheduler>, host: Rc<dyn ScrollHost>) -> Self {
        Self {
            state: Rc::new(RefCell::new(AutoScrollState {
                scheduler,
                host,
                listener: None,
                zone: None,
                velocity: 0.0,
                scrolling: false,
                registration: None,
            })),
        }
    }

    pub fn set_listener(&self, listener: Option<Rc<dyn Fn(bool)>>) {
        self.state.borrow_mut().listener = listener;
    }

    /// Called on every move that classifies into a band. Updates velocity;
    /// on a band-entry transition restarts the tick chain and notifies.
    pub fn enter(&self, zone: HotspotZone, velocity: f32) {
        let entered = {
            let mut state = self.state.borrow_mut();
            state.velocity = velocity;
            if state.zone == Some(zone) {
                false
            } else {
                state.zone = Some(zone);
                // Supersede a tick pending from the other band.
                state.registration = None;
                true
            }
        };
        if entered {
            log::debug!("pointer entered {:?} hotspot", zone);
            Self::schedule_tick(&self.state);
            self.notify(true);
        }
    }

    /// Called when the pointer sits in neither band, and on any gesture
    /// exit transition. Idempotent.
    pub fn stop(&self) {
        let left = {
            let mut state = self.state.borrow_mut();
            state.registration = None;
            state.zone.take().is_some()
        };
        if left {
            log::debug!("pointer left the hotspot");
        }
        self.notify(false);
    }

    fn notify(&self, scrolling: bool) {
        let listener = {
            let mut state = self.state.borrow_mut();
            if state.scrolling == scrolling {
                return;
            }
            state.scrolling = scrolling;
            state.listener.clone()
        };
        if let Some(listener) = listener {
            listener(scrolling);
        }
    }

    fn schedule_tick(state: &Rc<RefCell<AutoScrollState>>) {
        let weak = Rc::downgrade(state);
        let scheduler = state.borrow().scheduler.clone();
        let id = scheduler.schedule(AUTO_SCROLL_DELAY, Box::new(move || Self::on_tick(&weak)));
        state.borrow_mut().registration =
            id.map(|id| TickRegistration::new(scheduler.clone(), id));
    }

    fn on_tick(weak: &Weak<RefCell<AutoScrollState>>) {
        let Some(state_rc) = weak.upgrade() else {
            return;
        };
        let scroll = {
            let state = state_rc.borrow();
            state.zone.map(|zone| {
                let delta = match zone {
                    HotspotZone::Top => -state.velocity,
                    HotspotZone::Bottom => state.velocity,
                };
                (state.host.clone(), delta)
            })
        };
        let Some((host, delta)) = scroll else {
            return;
        };
        let consumed = host.scroll_by(delta);
        log::trace!("auto-scroll tick: requested {delta}, consumed {consumed}");
        Self::schedule_tick(&state_rc);
    }
}
