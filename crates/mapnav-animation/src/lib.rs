//! Easing curves and inertia models for mapnav
//!
//! Provides the unit cubic bezier used by every camera animation, the
//! smooth-out easing factory that keeps successive wheel-zoom animations
//! velocity-continuous, and the rolling-window inertia tracker that turns a
//! drag's recent motion into a fling.

mod easing;
mod inertia;

pub use easing::*;
pub use inertia::*;

#[cfg(test)]
#[path = "tests/easing_tests.rs"]
mod easing_tests;
