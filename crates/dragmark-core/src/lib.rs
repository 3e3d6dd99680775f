//! Drag-to-select gesture handling for grid and list widgets.
//!
//! Press-and-hold an item, then drag: dragmark turns the subsequent touch
//! stream into index-level selection mutations, with optional auto-scrolling
//! while the pointer sits in a band near the viewport's top or bottom edge.
//!
//! The library is toolkit-agnostic and owns no threads. The host wires up
//! four small capability traits — [`DragSelectReceiver`] (owns the
//! selection), [`ItemPositionResolver`] (screen point → item index),
//! [`ScrollHost`] (consumes scroll deltas) and [`TickScheduler`] (delayed
//! callbacks on the host loop) — and feeds move/up events into a
//! [`DragSelectTouchHandler`].
//!
//! # Example
//!
//! ```ignore
//! let tracker = Rc::new(SelectionTracker::new(items.len()));
//! let mut handler = DragSelectTouchHandler::new(
//!     tracker.clone(),
//!     layout.clone(),    // ItemPositionResolver
//!     viewport.clone(),  // ScrollHost
//!     timers.clone(),    // TickScheduler
//! )
//! .with_auto_scroll_listener(|scrolling| log::info!("auto-scroll: {scrolling}"));
//!
//! // Host's long-press callback:
//! handler.activate(pressed_index);
//!
//! // Host's touch pipeline, for every event while a gesture may be live:
//! if handler.intercept_touch(viewport_height) {
//!     handler.on_touch(TouchEvent::move_to(x, y));
//! }
//! ```

pub mod auto_scroll;
pub mod events;
pub mod handler;
pub mod hotspot;
pub mod range;
pub mod receiver;
pub mod resolver;
pub mod scheduler;
pub mod scroll;
pub mod tracker;

pub use auto_scroll::AUTO_SCROLL_DELAY;
pub use events::{TouchEvent, TouchEventKind};
pub use handler::{DragSelectTouchHandler, Mode};
pub use hotspot::{HotspotBounds, HotspotZone, DEFAULT_HOTSPOT_HEIGHT};
pub use range::select_range;
pub use receiver::DragSelectReceiver;
pub use resolver::ItemPositionResolver;
pub use scheduler::{TickId, TickRegistration, TickScheduler};
pub use scroll::ScrollHost;
pub use tracker::SelectionTracker;
