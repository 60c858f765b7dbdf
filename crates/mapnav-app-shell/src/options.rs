use mapnav_core::GestureError;
use mapnav_foundation::gesture_constants::CLICK_TOLERANCE;
use mapnav_foundation::{DragRotateOptions, PlatformQuirks, ScrollZoomOptions};

/// Configuration of a map's gesture handling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureOptions {
    /// When `false` no handler is enabled and pointer presses never stop
    /// camera animations.
    pub interactive: bool,
    /// Maximum pointer travel, in pixels, for a press to still count as a
    /// click.
    pub click_tolerance: f64,
    pub scroll_zoom: bool,
    pub scroll_zoom_options: ScrollZoomOptions,
    pub box_zoom: bool,
    pub drag_rotate: bool,
    pub drag_rotate_options: DragRotateOptions,
    pub drag_pan: bool,
    pub quirks: PlatformQuirks,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            interactive: true,
            click_tolerance: CLICK_TOLERANCE,
            scroll_zoom: true,
            scroll_zoom_options: ScrollZoomOptions::default(),
            box_zoom: true,
            drag_rotate: true,
            drag_rotate_options: DragRotateOptions::default(),
            drag_pan: true,
            quirks: PlatformQuirks::default(),
        }
    }
}

impl GestureOptions {
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_click_tolerance(mut self, click_tolerance: f64) -> Self {
        self.click_tolerance = click_tolerance;
        self
    }

    pub fn with_scroll_zoom(mut self, enabled: bool) -> Self {
        self.scroll_zoom = enabled;
        self
    }

    pub fn with_scroll_zoom_options(mut self, options: ScrollZoomOptions) -> Self {
        self.scroll_zoom_options = options;
        self
    }

    pub fn with_box_zoom(mut self, enabled: bool) -> Self {
        self.box_zoom = enabled;
        self
    }

    pub fn with_drag_rotate(mut self, enabled: bool) -> Self {
        self.drag_rotate = enabled;
        self
    }

    pub fn with_drag_rotate_options(mut self, options: DragRotateOptions) -> Self {
        self.drag_rotate_options = options;
        self
    }

    pub fn with_drag_pan(mut self, enabled: bool) -> Self {
        self.drag_pan = enabled;
        self
    }

    pub fn with_quirks(mut self, quirks: PlatformQuirks) -> Self {
        self.quirks = quirks;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), GestureError> {
        if !self.click_tolerance.is_finite() || self.click_tolerance < 0.0 {
            return Err(GestureError::InvalidClickTolerance {
                value: self.click_tolerance,
            });
        }
        let snap = self.drag_rotate_options.bearing_snap;
        if !snap.is_finite() || snap < 0.0 {
            return Err(GestureError::InvalidBearingSnap { value: snap });
        }
        Ok(())
    }
}
