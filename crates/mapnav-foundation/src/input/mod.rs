pub mod listeners;
pub mod types;

pub use listeners::{GlobalListener, ListenerSet};
pub use types::{
    DeltaMode, InputEvent, KeyEvent, Modifiers, PointerButton, PointerEvent, PointerEventKind,
    TouchEvent, TouchEventKind, TouchPoints, WheelEvent,
};
