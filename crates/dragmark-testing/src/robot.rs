//! Robot-style gesture driver.

use dragmark_core::{DragSelectTouchHandler, TouchEvent};

/// Drives a [`DragSelectTouchHandler`] through complete gestures the way a
/// host widget would: long-press, then an intercept check before every
/// forwarded event.
pub struct DragRobot {
    handler: DragSelectTouchHandler,
    viewport_height: f32,
    last_position: (f32, f32),
}

impl DragRobot {
    pub fn new(handler: DragSelectTouchHandler, viewport_height: f32) -> Self {
        Self {
            handler,
            viewport_height,
            last_position: (0.0, 0.0),
        }
    }

    /// Simulates the host's long-press callback. Returns whether a session
    /// started.
    pub fn long_press(&mut self, index: usize) -> bool {
        log::debug!("robot: long-press on index {index}");
        self.handler.activate(index)
    }

    /// Moves the pointer to `(x, y)`. Returns whether the handler claimed
    /// the event; an unclaimed move falls through to default host handling
    /// and reaches no selection logic.
    pub fn drag_to(&mut self, x: f32, y: f32) -> bool {
        self.last_position = (x, y);
        let claimed = self.handler.intercept_touch(self.viewport_height);
        if claimed {
            log::debug!("robot: drag to ({x}, {y})");
            self.handler.on_touch(TouchEvent::move_to(x, y));
        }
        claimed
    }

    /// Lifts the pointer at its last position.
    pub fn release(&mut self) {
        let (x, y) = self.last_position;
        if self.handler.intercept_touch(self.viewport_height) {
            log::debug!("robot: release at ({x}, {y})");
            self.handler.on_touch(TouchEvent::up(x, y));
        }
    }

    /// Simulates the platform cancelling the touch stream.
    pub fn cancel(&mut self) {
        let (x, y) = self.last_position;
        if self.handler.intercept_touch(self.viewport_height) {
            self.handler.on_touch(TouchEvent::cancel(x, y));
        }
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
    }

    /// Direct access to the handler for configuration mid-test.
    pub fn handler(&mut self) -> &mut DragSelectTouchHandler {
        &mut self.handler
    }
}
