use mapnav_foundation::{AnimationOptions, Camera, FitBoundsOptions, InputEvent};
use mapnav_graphics::{LngLat, LngLatBounds, Point};
use std::f64::consts::PI;

const TILE_SIZE: f64 = 512.0;

/// Animation request recorded by [`MockCamera`].
#[derive(Clone, Debug, PartialEq)]
pub enum CameraCall {
    PanBy {
        offset: Point,
        options: AnimationOptions,
    },
    RotateTo {
        bearing: f64,
        options: AnimationOptions,
    },
    FitBounds {
        bounds: LngLatBounds,
        options: FitBoundsOptions,
    },
    ResetNorth {
        options: AnimationOptions,
    },
    Stop,
}

/// North-up Web Mercator camera.
///
/// Bearing and pitch are stored but do not affect projection. Animation
/// requests are recorded instead of played.
#[derive(Clone, Debug)]
pub struct MockCamera {
    pub center: LngLat,
    pub zoom: f64,
    pub bearing: f64,
    pub pitch: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub width: f64,
    pub height: f64,
    calls: Vec<CameraCall>,
}

impl Default for MockCamera {
    fn default() -> Self {
        Self {
            center: LngLat::new(0.0, 0.0),
            zoom: 0.0,
            bearing: 0.0,
            pitch: 0.0,
            min_zoom: 0.0,
            max_zoom: 22.0,
            width: 512.0,
            height: 512.0,
            calls: Vec::new(),
        }
    }
}

impl MockCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_bearing(mut self, bearing: f64) -> Self {
        self.bearing = bearing;
        self
    }

    pub fn with_center(mut self, center: LngLat) -> Self {
        self.center = center;
        self
    }

    pub fn with_zoom_range(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    pub fn calls(&self) -> &[CameraCall] {
        &self.calls
    }

    pub fn pan_by_calls(&self) -> Vec<(Point, AnimationOptions)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                CameraCall::PanBy { offset, options } => Some((*offset, *options)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, matches: impl Fn(&CameraCall) -> bool) -> usize {
        self.calls.iter().filter(|call| matches(call)).count()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn world_size(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }

    fn half_viewport(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    fn to_world(&self, location: LngLat) -> Point {
        let size = self.world_size();
        let x = (180.0 + location.lng) / 360.0 * size;
        let y = (180.0 - (180.0 / PI) * (PI / 4.0 + location.lat * PI / 360.0).tan().ln()) / 360.0
            * size;
        Point::new(x, y)
    }

    fn from_world(&self, point: Point) -> LngLat {
        let size = self.world_size();
        let lng = point.x * 360.0 / size - 180.0;
        let y = 180.0 - point.y * 360.0 / size;
        let lat = 360.0 / PI * (y * PI / 180.0).exp().atan() - 90.0;
        LngLat::new(lng, lat)
    }
}

impl Camera for MockCamera {
    fn unproject(&self, point: Point) -> LngLat {
        self.from_world(point - self.half_viewport() + self.to_world(self.center))
    }

    fn project(&self, location: LngLat) -> Point {
        self.to_world(location) - self.to_world(self.center) + self.half_viewport()
    }

    fn center(&self) -> LngLat {
        self.center
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.max(self.min_zoom).min(self.max_zoom);
    }

    fn bearing(&self) -> f64 {
        self.bearing
    }

    fn set_bearing(&mut self, bearing: f64) {
        self.bearing = bearing;
    }

    fn pitch(&self) -> f64 {
        self.pitch
    }

    fn set_pitch(&mut self, pitch: f64) {
        self.pitch = pitch.max(0.0).min(60.0);
    }

    fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    fn set_location_at_point(&mut self, location: LngLat, point: Point) {
        let center = self.to_world(location) - (point - self.half_viewport());
        self.center = self.from_world(center);
    }

    fn pan_by(&mut self, offset: Point, options: AnimationOptions, _original: Option<&InputEvent>) {
        self.calls.push(CameraCall::PanBy { offset, options });
    }

    fn rotate_to(&mut self, bearing: f64, options: AnimationOptions, _original: Option<&InputEvent>) {
        self.calls.push(CameraCall::RotateTo { bearing, options });
    }

    fn fit_bounds(
        &mut self,
        bounds: LngLatBounds,
        options: FitBoundsOptions,
        _original: Option<&InputEvent>,
    ) {
        self.calls.push(CameraCall::FitBounds { bounds, options });
    }

    fn reset_north(&mut self, options: AnimationOptions, _original: Option<&InputEvent>) {
        self.calls.push(CameraCall::ResetNorth { options });
    }

    fn stop(&mut self) {
        self.calls.push(CameraCall::Stop);
    }
}
