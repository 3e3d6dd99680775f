//! The drag-select gesture state machine.

use std::rc::Rc;

use crate::auto_scroll::AutoScroller;
use crate::events::{TouchEvent, TouchEventKind};
use crate::hotspot::{HotspotBounds, DEFAULT_HOTSPOT_HEIGHT};
use crate::range::select_range;
use crate::receiver::DragSelectReceiver;
use crate::resolver::ItemPositionResolver;
use crate::scheduler::TickScheduler;
use crate::scroll::ScrollHost;

/// How pointer movement translates into selection changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Selection mirrors the contiguous interval between the anchor and the
    /// current pointer position; retreating toward the anchor deselects.
    #[default]
    Range,
    /// Toggles exactly the items the pointer passes over, like a brush.
    Path,
}

/// Tracks one press-and-hold drag gesture and turns it into selection
/// mutations on the receiver, plus auto-scrolling near the viewport edges.
///
/// All methods run synchronously on the host event loop; the handler holds
/// its collaborators behind `Rc<dyn Trait>` and owns no threads.
///
/// Host integration contract:
/// 1. on long-press over an item, call [`activate`] with that index;
/// 2. for every subsequent touch event, ask [`intercept_touch`] whether the
///    handler claims the stream, and if so feed the event to [`on_touch`]
///    instead of running default touch handling.
///
/// [`activate`]: DragSelectTouchHandler::activate
/// [`intercept_touch`]: DragSelectTouchHandler::intercept_touch
/// [`on_touch`]: DragSelectTouchHandler::on_touch
pub struct DragSelectTouchHandler {
    receiver: Rc<dyn DragSelectReceiver>,
    resolver: Rc<dyn ItemPositionResolver>,
    mode: Mode,
    hotspot_height: f32,
    hotspot_offset_top: f32,
    hotspot_offset_bottom: f32,
    /// Band bounds for the gesture in flight; recomputed on each claim.
    bounds: Option<HotspotBounds>,
    active: bool,
    initial_index: Option<usize>,
    last_index: Option<usize>,
    min_reached: Option<usize>,
    max_reached: Option<usize>,
    auto_scroll: AutoScroller,
}

impl DragSelectTouchHandler {
    pub fn new(
        receiver: Rc<dyn DragSelectReceiver>,
        resolver: Rc<dyn ItemPositionResolver>,
        scroll_host: Rc<dyn ScrollHost>,
        scheduler: Rc<dyn TickScheduler>,
    ) -> Self {
        Self {
            receiver,
            resolver,
            mode: Mode::default(),
            hotspot_height: DEFAULT_HOTSPOT_HEIGHT,
            hotspot_offset_top: 0.0,
            hotspot_offset_bottom: 0.0,
            bounds: None,
            active: false,
            initial_index: None,
            last_index: None,
            min_reached: None,
            max_reached: None,
            auto_scroll: AutoScroller::new(scheduler, scroll_host),
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_hotspot_height(mut self, height: f32) -> Self {
        self.hotspot_height = height;
        self
    }

    pub fn with_hotspot_offsets(mut self, top: f32, bottom: f32) -> Self {
        self.hotspot_offset_top = top;
        self.hotspot_offset_bottom = bottom;
        self
    }

    /// Registers a callback fired when auto-scrolling becomes active or
    /// inactive. Fires only on transitions, never per tick.
    pub fn with_auto_scroll_listener(self, listener: impl Fn(bool) + 'static) -> Self {
        self.auto_scroll.set_listener(Some(Rc::new(listener)));
        self
    }

    /// Turns auto-scroll off for all future gestures and stops any scrolling
    /// in flight.
    pub fn disable_auto_scroll(&mut self) {
        self.hotspot_height = -1.0;
        self.bounds = None;
        self.auto_scroll.stop();
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Changes the selection mode. A live session is forcibly deactivated:
    /// the mode is fixed for the duration of any single drag.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.deactivate();
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Starts a drag session anchored at `anchor`.
    ///
    /// Returns `false` — leaving all state untouched — when a session is
    /// already active, or when the receiver reports the anchor as not
    /// selectable. On success the anchor is selected through the receiver.
    pub fn activate(&mut self, anchor: usize) -> bool {
        if self.active {
            log::debug!("drag selection is already active");
            return false;
        }
        self.reset_tracking();
        if !self.receiver.is_index_selectable(anchor) {
            log::debug!("index {anchor} is not selectable");
            return false;
        }
        self.receiver.set_selected(anchor, true);
        self.active = true;
        self.initial_index = Some(anchor);
        self.last_index = Some(anchor);
        log::debug!("drag selection initialized, starting at index {anchor}");
        true
    }

    /// Ends the session: clears tracking state, cancels any pending
    /// auto-scroll tick and reports auto-scroll inactive if it was active.
    /// Idempotent.
    pub fn deactivate(&mut self) {
        if self.active {
            log::debug!("drag selection ended");
        }
        self.reset_tracking();
        self.active = false;
        self.initial_index = None;
    }

    fn reset_tracking(&mut self) {
        self.last_index = None;
        self.min_reached = None;
        self.max_reached = None;
        self.auto_scroll.stop();
    }

    /// Whether the handler claims the touch stream.
    ///
    /// Claims only while a session is active and the collection is non-empty;
    /// otherwise the host's default touch handling applies. On a claim the
    /// hotspot bounds are derived from the live viewport height.
    pub fn intercept_touch(&mut self, viewport_height: f32) -> bool {
        let claim = self.active && self.receiver.item_count() > 0;
        if claim {
            self.bounds = HotspotBounds::from_viewport(
                viewport_height,
                self.hotspot_height,
                self.hotspot_offset_top,
                self.hotspot_offset_bottom,
            );
        }
        claim
    }

    /// Feeds one event of a claimed touch stream into the state machine.
    pub fn on_touch(&mut self, event: TouchEvent) {
        match event.kind {
            TouchEventKind::Up | TouchEventKind::Cancel => self.deactivate(),
            TouchEventKind::Down => {}
            TouchEventKind::Move => self.on_move(event.x, event.y),
        }
    }

    fn on_move(&mut self, x: f32, y: f32) {
        if !self.active {
            return;
        }
        // Hotspot bookkeeping runs before any selection change, even when
        // the pointer is between items.
        if let Some(bounds) = self.bounds {
            match bounds.classify(y) {
                Some(zone) => {
                    let velocity = bounds.velocity(zone, y);
                    log::trace!("auto-scroll velocity = {velocity}");
                    self.auto_scroll.enter(zone, velocity);
                }
                None => self.auto_scroll.stop(),
            }
        }

        let Some(index) = self.resolver.index_at(x, y) else {
            return;
        };
        match self.mode {
            Mode::Path => self.paint_at(index),
            Mode::Range => self.reconcile_to(index),
        }
    }

    /// Path mode: toggle whatever the pointer is over. Re-toggling is
    /// suppressed only for the immediately previous index; leaving an item
    /// and coming back toggles it again.
    fn paint_at(&mut self, index: usize) {
        if self.last_index == Some(index) {
            return;
        }
        self.last_index = Some(index);
        let selected = !self.receiver.is_selected(index);
        self.receiver.set_selected(index, selected);
    }

    /// Range mode: reconcile the selection to the anchor..index interval.
    fn reconcile_to(&mut self, index: usize) {
        if self.last_index == Some(index) {
            return;
        }
        let Some(from) = self.initial_index else {
            return;
        };
        self.last_index = Some(index);
        let min = self.min_reached;
        let max = self.max_reached;
        select_range(&*self.receiver, from, index, min, max);
        if index == from {
            // Back at the anchor: the drag history is spent.
            self.min_reached = Some(from);
            self.max_reached = Some(from);
        } else {
            self.min_reached = Some(min.map_or(index, |m| m.min(index)));
            self.max_reached = Some(max.map_or(index, |m| m.max(index)));
        }
    }
}
