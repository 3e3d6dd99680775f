//! Touch event types consumed by the drag-select handler.

/// The phases of the touch stream the handler cares about.
///
/// Press discovery (long-press on an item) is the host's responsibility —
/// the host calls [`DragSelectTouchHandler::activate`] itself and then feeds
/// the remaining stream here once interception is claimed.
///
/// [`DragSelectTouchHandler::activate`]: crate::DragSelectTouchHandler::activate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchEventKind {
    Down,
    Move,
    Up,
    /// The platform took the stream away (parent scroll, window loss).
    /// Treated exactly like `Up`.
    Cancel,
}

/// A single touch event in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub kind: TouchEventKind,
    pub x: f32,
    pub y: f32,
}

impl TouchEvent {
    pub fn new(kind: TouchEventKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }

    pub fn move_to(x: f32, y: f32) -> Self {
        Self::new(TouchEventKind::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(TouchEventKind::Up, x, y)
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(TouchEventKind::Cancel, x, y)
    }
}
