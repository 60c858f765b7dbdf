//! Geographic primitives: LngLat, LngLatBounds

/// A geographic location in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// A south-west / north-east pair of corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LngLatBounds {
    pub sw: LngLat,
    pub ne: LngLat,
}

impl LngLatBounds {
    /// Builds bounds from two arbitrary corners, swapping coordinates as
    /// needed so that `sw` holds the minimum and `ne` the maximum of each.
    pub fn from_corners(a: LngLat, b: LngLat) -> Self {
        Self {
            sw: LngLat::new(a.lng.min(b.lng), a.lat.min(b.lat)),
            ne: LngLat::new(a.lng.max(b.lng), a.lat.max(b.lat)),
        }
    }

    pub fn center(&self) -> LngLat {
        LngLat::new(
            (self.sw.lng + self.ne.lng) / 2.0,
            (self.sw.lat + self.ne.lat) / 2.0,
        )
    }
}
