//! Shared gesture constants.
//!
//! Distances are in CSS pixels, angles in degrees and durations in
//! milliseconds.

/// Maximum pointer travel between down and click for the click to count.
pub const CLICK_TOLERANCE: f64 = 3.0;

/// Bearings closer to north than this snap back to exactly north after a
/// rotate gesture.
pub const BEARING_SNAP: f64 = 7.0;

/// `keyCode` of the Escape key.
pub const ESCAPE_KEY_CODE: u32 = 27;

/// Bearing change per pixel of horizontal drag.
pub const BEARING_PER_PIXEL: f64 = -0.8;

/// Pitch change per pixel of vertical drag.
pub const PITCH_PER_PIXEL: f64 = 0.5;

/// Pixels per line for wheel events reported in line mode.
pub const LINE_HEIGHT_PX: f64 = 40.0;

/// Shift-held wheel input is divided by this for precise zooming.
pub const PRECISION_ZOOM_DIVISOR: f64 = 4.0;

/// Zoom rate for trackpad input and single wheel ticks.
pub const DEFAULT_ZOOM_RATE: f64 = 1.0 / 100.0;

/// Reduced zoom rate for sustained mouse-wheel bursts.
pub const WHEEL_ZOOM_RATE: f64 = 1.0 / 450.0;

/// Upper bound on the zoom scale applied in a single frame.
pub const MAX_SCALE_PER_FRAME: f64 = 2.0;

/// Length of the eased zoom animation that follows a wheel tick.
pub const WHEEL_EASING_DURATION_MS: f64 = 200.0;

/// Quiet period after the last zoom frame before `zoomend` fires.
pub const ZOOM_END_DELAY_MS: f64 = 200.0;
