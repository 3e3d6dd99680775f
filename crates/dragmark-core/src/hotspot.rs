//! Edge hotspot geometry for auto-scrolling.
//!
//! A hotspot is a horizontal band at the top or bottom of the viewport.
//! While a drag's pointer sits inside a band, the viewport auto-scrolls so
//! the selection can extend past the visible items. Band bounds are derived
//! once per gesture claim from the live viewport height, so window resizes
//! between gestures are picked up automatically.
//!
//! All values are in logical pixels.

/// Default hotspot band thickness in logical pixels.
///
/// Matches the touch-target height common on Android list widgets (56dp on a
/// baseline-density screen), which is where this gesture originates. Hosts
/// with very short viewports should shrink it so the two bands don't cover
/// the whole widget.
pub const DEFAULT_HOTSPOT_HEIGHT: f32 = 56.0;

/// Which edge band the pointer currently occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HotspotZone {
    Top,
    Bottom,
}

/// Resolved hotspot band bounds for one gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HotspotBounds {
    top_start: f32,
    top_end: f32,
    bottom_start: f32,
    bottom_end: f32,
}

impl HotspotBounds {
    /// Derives band bounds from the viewport height and hotspot config.
    ///
    /// Returns `None` when `height` is negative, which disables auto-scroll
    /// entirely. Top band is `[offset_top, offset_top + height)`; bottom band
    /// is `[viewport_height - height - offset_bottom, viewport_height - offset_bottom)`.
    pub fn from_viewport(
        viewport_height: f32,
        height: f32,
        offset_top: f32,
        offset_bottom: f32,
    ) -> Option<Self> {
        if height < 0.0 {
            return None;
        }
        Some(Self {
            top_start: offset_top,
            top_end: offset_top + height,
            bottom_start: viewport_height - height - offset_bottom,
            bottom_end: viewport_height - offset_bottom,
        })
    }

    /// Classifies a pointer y-coordinate against the bands.
    ///
    /// Bands are half-open, so a band of zero height matches nothing. The
    /// top band is checked first: if a host configures overlapping bands,
    /// top wins and the classification stays unambiguous.
    pub fn classify(&self, y: f32) -> Option<HotspotZone> {
        if y >= self.top_start && y < self.top_end {
            Some(HotspotZone::Top)
        } else if y >= self.bottom_start && y < self.bottom_end {
            Some(HotspotZone::Bottom)
        } else {
            None
        }
    }

    /// Scroll speed for a pointer at `y` inside `zone`, in pixels per tick.
    ///
    /// Grows linearly with penetration depth: the distance from the band's
    /// inner edge, halved. A pointer hugging the screen edge scrolls fastest.
    pub fn velocity(&self, zone: HotspotZone, y: f32) -> f32 {
        match zone {
            HotspotZone::Top => (self.top_end - y) / 2.0,
            HotspotZone::Bottom => (y - self.bottom_start) / 2.0,
        }
    }

    #[inline]
    pub fn top_end(&self) -> f32 {
        self.top_end
    }

    #[inline]
    pub fn bottom_start(&self) -> f32 {
        self.bottom_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_height_disables() {
        assert!(HotspotBounds::from_viewport(600.0, -1.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn test_classification_bands() {
        let bounds = HotspotBounds::from_viewport(600.0, 56.0, 0.0, 0.0).unwrap();
        assert_eq!(bounds.classify(0.0), Some(HotspotZone::Top));
        assert_eq!(bounds.classify(55.9), Some(HotspotZone::Top));
        // Half-open: the inner edge is outside the band.
        assert_eq!(bounds.classify(56.0), None);
        assert_eq!(bounds.classify(300.0), None);
        assert_eq!(bounds.classify(543.9), None);
        assert_eq!(bounds.classify(544.0), Some(HotspotZone::Bottom));
        assert_eq!(bounds.classify(599.9), Some(HotspotZone::Bottom));
        assert_eq!(bounds.classify(600.0), None);
    }

    #[test]
    fn test_offsets_shift_bands() {
        let bounds = HotspotBounds::from_viewport(600.0, 40.0, 10.0, 20.0).unwrap();
        assert_eq!(bounds.classify(5.0), None);
        assert_eq!(bounds.classify(10.0), Some(HotspotZone::Top));
        assert_eq!(bounds.classify(49.9), Some(HotspotZone::Top));
        // Bottom band: [600 - 40 - 20, 600 - 20) = [540, 580)
        assert_eq!(bounds.classify(540.0), Some(HotspotZone::Bottom));
        assert_eq!(bounds.classify(580.0), None);
        assert_eq!(bounds.classify(590.0), None);
    }

    #[test]
    fn test_zones_mutually_exclusive() {
        let bounds = HotspotBounds::from_viewport(600.0, 56.0, 0.0, 0.0).unwrap();
        for y in 0..600 {
            let y = y as f32;
            let in_top = y >= 0.0 && y < bounds.top_end();
            let in_bottom = y >= bounds.bottom_start() && y < 600.0;
            match bounds.classify(y) {
                Some(HotspotZone::Top) => assert!(in_top),
                Some(HotspotZone::Bottom) => assert!(in_bottom && !in_top),
                None => assert!(!in_top && !in_bottom),
            }
        }
    }

    #[test]
    fn test_top_wins_on_overlap() {
        // Bands taller than half the viewport overlap in the middle.
        let bounds = HotspotBounds::from_viewport(100.0, 80.0, 0.0, 0.0).unwrap();
        assert_eq!(bounds.classify(50.0), Some(HotspotZone::Top));
    }

    #[test]
    fn test_velocity_scales_with_depth() {
        let bounds = HotspotBounds::from_viewport(600.0, 56.0, 0.0, 0.0).unwrap();
        // Deeper into the top band (closer to the screen edge) is faster.
        assert_eq!(bounds.velocity(HotspotZone::Top, 0.0), 28.0);
        assert_eq!(bounds.velocity(HotspotZone::Top, 28.0), 14.0);
        assert!(
            bounds.velocity(HotspotZone::Top, 10.0) > bounds.velocity(HotspotZone::Top, 40.0)
        );
        // Bottom band mirrors: deeper means larger y.
        assert_eq!(bounds.velocity(HotspotZone::Bottom, 544.0), 0.0);
        assert_eq!(bounds.velocity(HotspotZone::Bottom, 572.0), 14.0);
    }

    #[test]
    fn test_zero_height_matches_nothing() {
        let bounds = HotspotBounds::from_viewport(600.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(bounds.classify(0.0), None);
        assert_eq!(bounds.classify(600.0), None);
    }
}
