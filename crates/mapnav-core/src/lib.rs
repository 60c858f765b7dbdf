//! Core runtime services for mapnav
//!
//! Gesture handlers never talk to the host directly: they read time through
//! a [`Clock`], ask for render ticks through a [`RuntimeScheduler`], coalesce
//! their per-frame work in a [`FrameScheduler`] and track wall-clock delays
//! with [`Timer`]s that the host polls.

pub mod collections;
mod error;
mod frame_clock;
mod platform;
mod timer;

pub use error::GestureError;
pub use frame_clock::FrameScheduler;
pub use platform::{Clock, RuntimeScheduler};
pub use timer::Timer;
