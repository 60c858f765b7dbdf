use mapnav_graphics::Point;
use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;

/// Screen positions of the fingers in a touch event.
pub type TouchPoints = SmallVec<[Point; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Click,
    ContextMenu,
}

/// Mouse button, numbered the way browsers report `MouseEvent.button`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Middle = 1,
    Secondary = 2,
    Back = 3,
    Forward = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1);
    pub const CTRL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);
    pub const META: Self = Self(1 << 3);

    pub fn with(self, other: Modifiers) -> Self {
        Self(self.0 | other.0)
    }

    pub fn contains(&self, other: Modifiers) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub fn shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    pub fn ctrl(&self) -> bool {
        self.contains(Self::CTRL)
    }
}

macro_rules! default_prevented {
    ($($event:ty),* $(,)?) => {
        $(
            impl $event {
                /// Asks the host to skip the browser's default action. The flag
                /// is shared by every clone of the event.
                pub fn prevent_default(&self) {
                    self.default_prevented.set(true);
                }

                pub fn is_default_prevented(&self) -> bool {
                    self.default_prevented.get()
                }
            }
        )*
    };
}

/// Mouse event with a position relative to the map container.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
    default_prevented: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
            default_prevented: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchEventKind {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Debug)]
pub struct TouchEvent {
    pub kind: TouchEventKind,
    /// Fingers still on the surface.
    pub touches: TouchPoints,
    /// Fingers that changed in this event; for `End` these are the lifted
    /// ones.
    pub changed_touches: TouchPoints,
    default_prevented: Rc<Cell<bool>>,
}

impl TouchEvent {
    pub fn new(kind: TouchEventKind, touches: impl IntoIterator<Item = Point>) -> Self {
        let touches: TouchPoints = touches.into_iter().collect();
        Self {
            kind,
            changed_touches: touches.clone(),
            touches,
            default_prevented: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_changed_touches(mut self, changed: impl IntoIterator<Item = Point>) -> Self {
        self.changed_touches = changed.into_iter().collect();
        self
    }

    /// Position of the first finger.
    pub fn position(&self) -> Option<Point> {
        self.touches.first().copied()
    }

    /// The points a map event should report: the lifted fingers for `End`,
    /// the current ones otherwise.
    pub fn reported_points(&self) -> &[Point] {
        match self.kind {
            TouchEventKind::End => &self.changed_touches,
            _ => &self.touches,
        }
    }
}

/// Unit of a wheel event's deltas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

#[derive(Clone, Debug)]
pub struct WheelEvent {
    pub delta_y: f64,
    pub delta_mode: DeltaMode,
    pub position: Point,
    pub modifiers: Modifiers,
    default_prevented: Rc<Cell<bool>>,
}

impl WheelEvent {
    pub fn new(delta_y: f64, position: Point) -> Self {
        Self {
            delta_y,
            delta_mode: DeltaMode::Pixel,
            position,
            modifiers: Modifiers::NONE,
            default_prevented: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_delta_mode(mut self, delta_mode: DeltaMode) -> Self {
        self.delta_mode = delta_mode;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Clone, Debug)]
pub struct KeyEvent {
    pub key_code: u32,
    default_prevented: Rc<Cell<bool>>,
}

impl KeyEvent {
    pub fn new(key_code: u32) -> Self {
        Self {
            key_code,
            default_prevented: Rc::new(Cell::new(false)),
        }
    }
}

default_prevented!(PointerEvent, TouchEvent, WheelEvent, KeyEvent);

/// Any raw input a map event can originate from.
#[derive(Clone, Debug)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Touch(TouchEvent),
    Wheel(WheelEvent),
    Key(KeyEvent),
    Blur,
}

impl InputEvent {
    pub fn as_pointer(&self) -> Option<&PointerEvent> {
        match self {
            InputEvent::Pointer(event) => Some(event),
            _ => None,
        }
    }

    pub fn as_wheel(&self) -> Option<&WheelEvent> {
        match self {
            InputEvent::Wheel(event) => Some(event),
            _ => None,
        }
    }
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        InputEvent::Pointer(event)
    }
}

impl From<TouchEvent> for InputEvent {
    fn from(event: TouchEvent) -> Self {
        InputEvent::Touch(event)
    }
}

impl From<WheelEvent> for InputEvent {
    fn from(event: WheelEvent) -> Self {
        InputEvent::Wheel(event)
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        InputEvent::Key(event)
    }
}
