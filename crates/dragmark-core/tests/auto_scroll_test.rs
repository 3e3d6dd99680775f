//! Auto-scroll lifecycle tests: hotspot entry/exit, tick chains driven on a
//! virtual clock, velocity ramp and the active/inactive notification edges.

use std::cell::RefCell;
use std::rc::Rc;

use dragmark_core::{
    DragSelectTouchHandler, ItemPositionResolver, ScrollHost, AUTO_SCROLL_DELAY,
};
use dragmark_testing::{DragRobot, ManualTickScheduler, RecordingReceiver, TestScrollHost};
use std::time::Duration;

const ITEM_HEIGHT: f32 = 40.0;
const VIEWPORT_HEIGHT: f32 = 400.0;
const ITEM_COUNT: usize = 100;

// Default hotspot height is 56, so the bands for a 400px viewport are
// [0, 56) at the top and [344, 400) at the bottom.
const TOP_Y: f32 = 20.0; // velocity (56 - 20) / 2 = 18
const BOTTOM_Y: f32 = 380.0; // velocity (380 - 344) / 2 = 18
const MIDDLE_Y: f32 = 200.0;

/// List layout that accounts for the host's scroll offset, so auto-scroll
/// actually changes which item sits under the stationary-ish pointer.
struct ScrollingListResolver {
    item_count: usize,
    scroll: Rc<TestScrollHost>,
}

impl ItemPositionResolver for ScrollingListResolver {
    fn index_at(&self, _x: f32, y: f32) -> Option<usize> {
        if y < 0.0 {
            return None;
        }
        let index = ((y + self.scroll.offset()) / ITEM_HEIGHT) as usize;
        (index < self.item_count).then_some(index)
    }
}

struct Fixture {
    receiver: Rc<RecordingReceiver>,
    scroll: Rc<TestScrollHost>,
    scheduler: Rc<ManualTickScheduler>,
    notifications: Rc<RefCell<Vec<bool>>>,
    robot: DragRobot,
}

fn fixture() -> Fixture {
    let receiver = Rc::new(RecordingReceiver::new(ITEM_COUNT));
    let max_offset = ITEM_COUNT as f32 * ITEM_HEIGHT - VIEWPORT_HEIGHT;
    let scroll = Rc::new(TestScrollHost::new(max_offset));
    let scheduler = Rc::new(ManualTickScheduler::new());
    let notifications = Rc::new(RefCell::new(Vec::new()));
    let resolver = Rc::new(ScrollingListResolver {
        item_count: ITEM_COUNT,
        scroll: scroll.clone(),
    });
    let handler = DragSelectTouchHandler::new(
        receiver.clone(),
        resolver,
        scroll.clone(),
        scheduler.clone(),
    )
    .with_auto_scroll_listener({
        let notifications = notifications.clone();
        move |scrolling| notifications.borrow_mut().push(scrolling)
    });
    Fixture {
        receiver,
        scroll,
        scheduler,
        notifications,
        robot: DragRobot::new(handler, VIEWPORT_HEIGHT),
    }
}

fn ticks(n: u32) -> Duration {
    AUTO_SCROLL_DELAY * n
}

#[test]
fn test_bottom_hotspot_scrolls_content_down() {
    let mut f = fixture();
    f.robot.long_press(5);
    f.robot.drag_to(0.0, BOTTOM_Y);
    f.scheduler.advance(ticks(4));
    // 4 ticks at velocity 18.
    assert_eq!(f.scroll.offset(), 72.0);
    assert!(f.scroll.deltas().iter().all(|&d| d == 18.0));
}

#[test]
fn test_top_hotspot_scrolls_content_up() {
    let mut f = fixture();
    f.scroll.scroll_by(200.0);
    f.robot.long_press(20);
    f.robot.drag_to(0.0, TOP_Y);
    f.scheduler.advance(ticks(2));
    assert_eq!(f.scroll.offset(), 200.0 - 36.0);
}

#[test]
fn test_scroll_clamped_at_content_start() {
    let mut f = fixture();
    f.robot.long_press(1);
    f.robot.drag_to(0.0, TOP_Y);
    f.scheduler.advance(ticks(10));
    // Already at the top: deltas are requested but nothing is consumed.
    assert_eq!(f.scroll.offset(), 0.0);
    assert_eq!(f.scroll.deltas().len(), 10);
}

#[test]
fn test_velocity_follows_depth_between_ticks() {
    let mut f = fixture();
    f.robot.long_press(5);
    f.robot.drag_to(0.0, BOTTOM_Y);
    f.scheduler.advance(ticks(1));
    // Push deeper into the band: (396 - 344) / 2 = 26 from the next tick on.
    f.robot.drag_to(0.0, 396.0);
    f.scheduler.advance(ticks(1));
    assert_eq!(f.scroll.deltas(), vec![18.0, 26.0]);
}

#[test]
fn test_leaving_band_cancels_ticks() {
    let mut f = fixture();
    f.robot.long_press(5);
    f.robot.drag_to(0.0, BOTTOM_Y);
    f.scheduler.advance(ticks(1));
    f.robot.drag_to(0.0, MIDDLE_Y);
    assert_eq!(f.scheduler.pending_count(), 0);
    f.scheduler.advance(ticks(10));
    assert_eq!(f.scroll.offset(), 18.0);
}

#[test]
fn test_release_cancels_ticks_and_notifies_inactive() {
    let mut f = fixture();
    f.robot.long_press(5);
    f.robot.drag_to(0.0, BOTTOM_Y);
    assert_eq!(f.scheduler.pending_count(), 1);
    f.robot.release();
    assert_eq!(f.scheduler.pending_count(), 0);
    f.scheduler.advance(ticks(10));
    assert_eq!(f.scroll.offset(), 0.0);
    assert_eq!(*f.notifications.borrow(), vec![true, false]);
}

#[test]
fn test_notification_once_per_stay() {
    let mut f = fixture();
    f.robot.long_press(5);
    f.robot.drag_to(0.0, BOTTOM_Y);
    f.scheduler.advance(ticks(3));
    // Still in the band: ticks and further moves must not re-notify.
    f.robot.drag_to(0.0, BOTTOM_Y + 10.0);
    assert_eq!(*f.notifications.borrow(), vec![true]);
    f.robot.drag_to(0.0, MIDDLE_Y);
    assert_eq!(*f.notifications.borrow(), vec![true, false]);
    f.robot.drag_to(0.0, BOTTOM_Y);
    assert_eq!(*f.notifications.borrow(), vec![true, false, true]);
}

#[test]
fn test_switching_bands_does_not_renotify() {
    let mut f = fixture();
    f.scroll.scroll_by(500.0);
    f.robot.long_press(20);
    f.robot.drag_to(0.0, BOTTOM_Y);
    // Jump straight into the top band: the chain restarts, the listener
    // stays silent because scrolling never stopped.
    f.robot.drag_to(0.0, TOP_Y);
    assert_eq!(*f.notifications.borrow(), vec![true]);
    assert_eq!(f.scheduler.pending_count(), 1);
    f.scheduler.advance(ticks(1));
    assert_eq!(f.scroll.offset(), 500.0 - 18.0);
}

#[test]
fn test_disabled_auto_scroll_never_schedules() {
    let mut f = fixture();
    f.robot.handler().disable_auto_scroll();
    f.robot.long_press(5);
    f.robot.drag_to(0.0, BOTTOM_Y);
    assert_eq!(f.scheduler.pending_count(), 0);
    assert_eq!(*f.notifications.borrow(), Vec::<bool>::new());
}

#[test]
fn test_auto_scroll_extends_selection_under_pointer() {
    let mut f = fixture();
    f.robot.long_press(5);
    f.robot.drag_to(0.0, BOTTOM_Y);
    // Row under 380px before scrolling.
    assert_eq!(f.receiver.selected(), (5..=9).collect::<Vec<_>>());
    f.scheduler.advance(ticks(4));
    // Offset is now 72, so a barely-moved pointer resolves two rows later.
    f.robot.drag_to(0.0, BOTTOM_Y + 1.0);
    assert_eq!(f.receiver.selected(), (5..=11).collect::<Vec<_>>());
}

#[test]
fn test_hotspot_membership_recomputed_before_selection() {
    let mut f = fixture();
    f.robot.long_press(5);
    // A single move straight into the band both schedules the tick chain
    // and extends the selection.
    f.robot.drag_to(0.0, BOTTOM_Y);
    assert_eq!(f.scheduler.pending_count(), 1);
    assert_eq!(f.receiver.selected(), (5..=9).collect::<Vec<_>>());
}
