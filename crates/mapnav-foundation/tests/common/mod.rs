#![allow(dead_code)]

use mapnav_foundation::{
    DragSelection, GestureContext, Modifiers, PlatformQuirks, PointerButton, PointerEvent,
    PointerEventKind,
};
use mapnav_graphics::Point;
use mapnav_testing::{EventRecorder, FrameHost, ManualClock, MemorySelection, MockCamera};
use std::rc::Rc;

pub struct Harness {
    pub clock: Rc<ManualClock>,
    pub frames: Rc<FrameHost>,
    pub events: Rc<EventRecorder>,
    pub selection: Rc<MemorySelection>,
    pub camera: MockCamera,
    ctx: GestureContext,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_quirks(PlatformQuirks::default())
    }

    pub fn with_quirks(quirks: PlatformQuirks) -> Self {
        let clock = Rc::new(ManualClock::new(10_000.0));
        let frames = Rc::new(FrameHost::new());
        let events = Rc::new(EventRecorder::new());
        let selection = Rc::new(MemorySelection::default());
        let ctx = GestureContext::new(events.clone(), clock.clone(), frames.clone())
            .with_selection(DragSelection::init(selection.clone()))
            .with_quirks(quirks);
        Self {
            clock,
            frames,
            events,
            selection,
            camera: MockCamera::new().with_zoom(4.0),
            ctx,
        }
    }

    /// Shared context; clones see the same click suppression flag.
    pub fn context(&self) -> GestureContext {
        self.ctx.clone()
    }

    pub fn clicks_suppressed(&self) -> bool {
        self.ctx.clicks.is_armed()
    }

    pub fn advance(&self, ms: f64) {
        self.clock.advance(ms);
    }
}

pub fn pointer(kind: PointerEventKind, x: f64, y: f64) -> PointerEvent {
    PointerEvent::new(kind, Point::new(x, y))
}

pub fn down(x: f64, y: f64, button: PointerButton, modifiers: Modifiers) -> PointerEvent {
    pointer(PointerEventKind::Down, x, y)
        .with_button(button)
        .with_modifiers(modifiers)
}

pub fn moved(x: f64, y: f64) -> PointerEvent {
    pointer(PointerEventKind::Move, x, y)
}

pub fn up(x: f64, y: f64, button: PointerButton) -> PointerEvent {
    pointer(PointerEventKind::Up, x, y).with_button(button)
}
