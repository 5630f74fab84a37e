pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 3.0;
pub const ZOOM_STEP: f32 = 0.2;
/// Zoom change per scroll-delta unit for the Ctrl+wheel gesture.
pub const SCROLL_ZOOM_SENSITIVITY: f32 = 0.001;
/// Horizontal extent of the timeline at zoom 1.0.
pub const BASE_TIMELINE_WIDTH: f32 = 3000.0;

/// Manages the zoom level of the timeline.
#[derive(Debug, Clone)]
pub struct TimelineViewport {
    /// Zoom factor in [`ZOOM_MIN`, `ZOOM_MAX`].
    pub zoom: f32,
}

impl Default for TimelineViewport {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

impl TimelineViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    /// Continuous zoom from a Ctrl+scroll gesture. Positive delta (scrolling
    /// up in egui) zooms in.
    pub fn handle_scroll(&mut self, delta_y: f32) {
        self.zoom = (self.zoom + delta_y * SCROLL_ZOOM_SENSITIVITY).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Pixel width of the time axis at the current zoom.
    pub fn timeline_width(&self) -> f32 {
        BASE_TIMELINE_WIDTH * self.zoom
    }

    pub fn zoom_percent(&self) -> f32 {
        self.zoom * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_steps_clamp_at_the_limits() {
        let mut vp = TimelineViewport::new();
        for _ in 0..20 {
            vp.zoom_in();
        }
        assert_eq!(vp.zoom, ZOOM_MAX);
        for _ in 0..40 {
            vp.zoom_out();
        }
        assert_eq!(vp.zoom, ZOOM_MIN);
        vp.reset_zoom();
        assert_eq!(vp.zoom, 1.0);
    }

    #[test]
    fn scroll_gesture_is_scaled_and_clamped() {
        let mut vp = TimelineViewport::new();
        vp.handle_scroll(100.0);
        assert!((vp.zoom - 1.1).abs() < 1e-6);
        vp.handle_scroll(-10_000.0);
        assert_eq!(vp.zoom, ZOOM_MIN);
        vp.handle_scroll(100_000.0);
        assert_eq!(vp.zoom, ZOOM_MAX);
    }

    #[test]
    fn timeline_width_scales_with_zoom() {
        let mut vp = TimelineViewport::new();
        assert_eq!(vp.timeline_width(), BASE_TIMELINE_WIDTH);
        vp.zoom = 2.0;
        assert_eq!(vp.timeline_width(), BASE_TIMELINE_WIDTH * 2.0);
    }
}
