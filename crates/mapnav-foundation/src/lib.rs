//! Input types, map events and gesture handlers for mapnav
//!
//! Each handler owns its own state machine and talks to the outside world
//! only through a [`GestureContext`] (events, time, frames, click and
//! selection suppression) and the [`Camera`] passed into the calls that
//! need it.

pub mod camera;
pub mod click;
pub mod context;
pub mod events;
pub mod gesture_constants;
pub mod gestures;
pub mod input;
pub mod selection;

pub use camera::{AnimationOptions, Camera, FitBoundsOptions};
pub use click::ClickSuppression;
pub use context::{GestureContext, PlatformQuirks};
pub use events::{Emitter, EventBus, EventData, ListenerId, MapEvent, MapEventKind};
pub use gestures::{
    BoxZoomGesture, DragPanGesture, DragRotateGesture, DragRotateOptions, GestureState,
    RotateButton, ScrollZoomGesture, ScrollZoomOptions, WheelClassifier, WheelDevice, ZoomAnchor,
};
pub use input::{
    DeltaMode, GlobalListener, InputEvent, KeyEvent, ListenerSet, Modifiers, PointerButton,
    PointerEvent, PointerEventKind, TouchEvent, TouchEventKind, TouchPoints, WheelEvent,
};
pub use selection::{DragSelection, SelectionHost, SelectionLease};

pub mod prelude {
    pub use crate::camera::{AnimationOptions, Camera, FitBoundsOptions};
    pub use crate::events::{Emitter, EventBus, MapEvent, MapEventKind};
    pub use crate::input::{
        InputEvent, KeyEvent, Modifiers, PointerButton, PointerEvent, PointerEventKind,
        TouchEvent, TouchEventKind, WheelEvent,
    };
}
