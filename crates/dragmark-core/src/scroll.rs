//! Scroll delta consumption by the host viewport.

/// Consumes vertical scroll deltas produced by auto-scrolling.
///
/// This is invoked from auto-scroll ticks while the pointer sits in an edge
/// hotspot. Implementers should update their scroll offset and return the
/// amount of delta that was actually consumed (may be less than requested
/// when the content is already at a bound).
pub trait ScrollHost {
    /// Scrolls the viewport by `delta` pixels (positive scrolls content up,
    /// revealing items further down). Returns the amount consumed.
    fn scroll_by(&self, delta: f32) -> f32;
}
