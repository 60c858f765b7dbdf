//! The camera collaborator the gestures drive.
//!
//! Projection, transform bookkeeping and the bounded camera animations are
//! owned by the map; handlers only read and write camera state through this
//! trait and hand off fling continuations as animation requests.

use crate::input::InputEvent;
use mapnav_animation::CubicBezier;
use mapnav_graphics::{LngLat, LngLatBounds, Point};

/// Parameters of a camera animation requested by a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AnimationOptions {
    /// `None` lets the camera pick its default duration.
    pub duration_ms: Option<f64>,
    /// `None` lets the camera pick its default easing.
    pub easing: Option<CubicBezier>,
    /// The animation continues a move the gesture already announced, so the
    /// camera must not emit another `movestart`.
    pub no_move_start: bool,
}

impl AnimationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for an animation that continues an ongoing move.
    pub fn continuing() -> Self {
        Self {
            no_move_start: true,
            ..Self::default()
        }
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_easing(mut self, easing: CubicBezier) -> Self {
        self.easing = Some(easing);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FitBoundsOptions {
    /// Animate with a straight zoom/pan rather than a flight curve.
    pub linear: bool,
}

pub trait Camera {
    /// Geographic location under a screen point.
    fn unproject(&self, point: Point) -> LngLat;

    /// Screen point of a geographic location.
    fn project(&self, location: LngLat) -> Point;

    fn center(&self) -> LngLat;

    fn zoom(&self) -> f64;
    fn set_zoom(&mut self, zoom: f64);

    /// Degrees clockwise from north.
    fn bearing(&self) -> f64;
    fn set_bearing(&mut self, bearing: f64);

    /// Degrees away from straight down.
    fn pitch(&self) -> f64;
    fn set_pitch(&mut self, pitch: f64);

    fn min_zoom(&self) -> f64;
    fn max_zoom(&self) -> f64;

    /// Scale factor at `zoom`.
    fn zoom_scale(&self, zoom: f64) -> f64 {
        zoom.exp2()
    }

    /// Zoom level at which the scale factor is `scale`.
    fn scale_zoom(&self, scale: f64) -> f64 {
        scale.log2()
    }

    /// Current scale factor.
    fn scale(&self) -> f64 {
        self.zoom_scale(self.zoom())
    }

    /// Moves the camera so that `location` appears under `point`.
    fn set_location_at_point(&mut self, location: LngLat, point: Point);

    fn pan_by(&mut self, offset: Point, options: AnimationOptions, original: Option<&InputEvent>);

    fn rotate_to(&mut self, bearing: f64, options: AnimationOptions, original: Option<&InputEvent>);

    fn fit_bounds(
        &mut self,
        bounds: LngLatBounds,
        options: FitBoundsOptions,
        original: Option<&InputEvent>,
    );

    /// Animates the bearing back to north.
    fn reset_north(&mut self, options: AnimationOptions, original: Option<&InputEvent>);

    /// Stops any running camera animation.
    fn stop(&mut self);
}
