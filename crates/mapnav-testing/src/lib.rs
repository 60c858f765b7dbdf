//! Testing utilities and harness for mapnav
//!
//! Deterministic stand-ins for the host: a manual clock, a frame host that
//! records frame requests, an in-memory selection style, a Web Mercator
//! camera that records animation requests, an event recorder, and
//! [`GestureTestRule`] tying them to a [`MapGestures`](mapnav_app_shell::MapGestures).

pub mod camera;
pub mod host;
pub mod recorder;
pub mod rule;

pub use camera::{CameraCall, MockCamera};
pub use host::{FrameHost, ManualClock, MemorySelection};
pub use recorder::EventRecorder;
pub use rule::GestureTestRule;

pub mod prelude {
    pub use crate::camera::{CameraCall, MockCamera};
    pub use crate::host::{FrameHost, ManualClock, MemorySelection};
    pub use crate::recorder::EventRecorder;
    pub use crate::rule::GestureTestRule;
}
