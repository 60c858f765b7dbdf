//! Input routing shell for mapnav
//!
//! [`MapGestures`] is the single entry point a host feeds raw input, frame
//! ticks and timer polls into. It forwards raw-input map events, arbitrates
//! between the drag-family handlers and keeps click handling consistent
//! with the gestures.

mod clock;
mod map_gestures;
mod options;

pub use clock::SystemClock;
pub use map_gestures::MapGestures;
pub use options::GestureOptions;
