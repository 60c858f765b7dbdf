//! Pure math/data for mapnav
//!
//! This crate contains the screen-space and geographic primitives shared by
//! every gesture handler: points, rectangles, longitude/latitude pairs and
//! bounds, plus the angle helpers used to keep bearings continuous.

mod angle;
mod geo;
mod geometry;

pub use angle::*;
pub use geo::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::angle::{normalize_bearing, wrap};
    pub use crate::geo::{LngLat, LngLatBounds};
    pub use crate::geometry::{Point, Rect};
}
