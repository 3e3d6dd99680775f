//! Headless drag-select walkthrough over a 26-item alphabet grid.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run --package headless-app
//! ```

use std::rc::Rc;

use dragmark_core::{
    DragSelectTouchHandler, ItemPositionResolver, Mode, SelectionTracker, AUTO_SCROLL_DELAY,
};
use dragmark_testing::{DragRobot, ManualTickScheduler, TestScrollHost};

const ALPHABET: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];

const COLUMNS: usize = 5;
const CELL_SIZE: f32 = 100.0;
const VIEWPORT_HEIGHT: f32 = 400.0;

/// Fixed-cell grid layout, scroll-aware like a real grid widget.
struct GridResolver {
    item_count: usize,
    scroll: Rc<TestScrollHost>,
}

impl ItemPositionResolver for GridResolver {
    fn index_at(&self, x: f32, y: f32) -> Option<usize> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let column = (x / CELL_SIZE) as usize;
        if column >= COLUMNS {
            return None;
        }
        let row = ((y + self.scroll.offset()) / CELL_SIZE) as usize;
        let index = row * COLUMNS + column;
        (index < self.item_count).then_some(index)
    }
}

struct Demo {
    tracker: Rc<SelectionTracker>,
    scroll: Rc<TestScrollHost>,
    scheduler: Rc<ManualTickScheduler>,
    robot: DragRobot,
}

fn demo(mode: Mode) -> Demo {
    let rows = ALPHABET.len().div_ceil(COLUMNS);
    let max_offset = rows as f32 * CELL_SIZE - VIEWPORT_HEIGHT;
    let scroll = Rc::new(TestScrollHost::new(max_offset));
    let scheduler = Rc::new(ManualTickScheduler::new());
    let tracker = Rc::new(
        SelectionTracker::new(ALPHABET.len())
            .with_selection_listener(|count| log::debug!("selection count: {count}")),
    );
    let handler = DragSelectTouchHandler::new(
        tracker.clone(),
        Rc::new(GridResolver {
            item_count: ALPHABET.len(),
            scroll: scroll.clone(),
        }),
        scroll.clone(),
        scheduler.clone(),
    )
    .with_mode(mode)
    .with_auto_scroll_listener(|scrolling| {
        println!(
            "  • auto-scroll {}",
            if scrolling { "engaged" } else { "stopped" }
        );
    });
    Demo {
        tracker,
        scroll,
        scheduler,
        robot: DragRobot::new(handler, VIEWPORT_HEIGHT),
    }
}

fn selected_letters(tracker: &SelectionTracker) -> String {
    let mut indices = tracker.selected_indices();
    indices.sort_unstable();
    indices
        .into_iter()
        .map(|i| ALPHABET[i])
        .collect::<Vec<_>>()
        .join(" ")
}

fn range_walkthrough() {
    println!("--- Range mode: press H, drag down, ride the bottom hotspot ---");
    let mut demo = demo(Mode::Range);

    assert!(demo.robot.long_press(7));
    println!("✓ long-press on H");

    demo.robot.drag_to(250.0, 250.0);
    demo.robot.drag_to(250.0, 380.0);
    println!("✓ dragged into the bottom hotspot: {}", selected_letters(&demo.tracker));

    // Let the tick chain run for half a second of virtual time; the offset
    // clamps once the last row is on screen.
    demo.scheduler.advance(AUTO_SCROLL_DELAY * 20);
    println!("✓ auto-scrolled to offset {}", demo.scroll.offset());

    // The grid has scrolled underneath the pointer; a nudge now lands on Z.
    demo.robot.drag_to(50.0, 381.0);
    demo.robot.release();
    println!("✓ released: {}\n", selected_letters(&demo.tracker));
}

fn path_walkthrough() {
    println!("--- Path mode: paint a few cells, revisit one to unpaint it ---");
    let mut demo = demo(Mode::Path);
    demo.robot.handler().disable_auto_scroll();

    assert!(demo.robot.long_press(0));
    demo.robot.drag_to(150.0, 50.0); // B
    demo.robot.drag_to(250.0, 50.0); // C
    demo.robot.drag_to(250.0, 150.0); // H
    println!("✓ painted: {}", selected_letters(&demo.tracker));

    demo.robot.drag_to(250.0, 50.0); // back over C: toggles it off
    demo.robot.release();
    println!("✓ unpainted C on revisit: {}\n", selected_letters(&demo.tracker));
}

fn guard_walkthrough() {
    println!("--- Activation guards ---");
    let mut demo = demo(Mode::Range);
    assert!(demo.robot.long_press(3));
    assert!(!demo.robot.long_press(9));
    println!("✓ second long-press rejected while a drag is live");
    demo.robot.release();
    assert!(demo.robot.long_press(9));
    demo.robot.release();
    println!("✓ same index accepted once the gesture ended\n");
}

fn main() {
    env_logger::init();
    log::info!("starting headless walkthroughs");
    println!("=== Dragmark headless demo ===\n");
    range_walkthrough();
    path_walkthrough();
    guard_walkthrough();
    println!("=== done ===");
}
