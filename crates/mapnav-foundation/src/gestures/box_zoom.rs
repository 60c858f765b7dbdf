//! Shift-drag marquee that zooms the camera to the selected area.

use crate::camera::{Camera, FitBoundsOptions};
use crate::context::GestureContext;
use crate::events::{EventData, MapEventKind};
use crate::gesture_constants::ESCAPE_KEY_CODE;
use crate::input::{GlobalListener, InputEvent, KeyEvent, ListenerSet, PointerButton, PointerEvent};
use crate::selection::SelectionLease;
use mapnav_graphics::{LngLatBounds, Point, Rect};

struct BoxSession {
    start: Point,
    /// Latest pointer position; `None` until the first move.
    current: Option<Point>,
    _selection: SelectionLease,
}

pub struct BoxZoomGesture {
    ctx: GestureContext,
    enabled: bool,
    listeners: ListenerSet,
    session: Option<BoxSession>,
}

impl BoxZoomGesture {
    pub fn new(ctx: GestureContext) -> Self {
        Self {
            ctx,
            enabled: false,
            listeners: ListenerSet::NONE,
            session: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn listeners(&self) -> ListenerSet {
        self.listeners
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stops accepting new marquees. A marquee in progress is cancelled.
    pub fn disable(&mut self) {
        self.enabled = false;
        if self.is_active() {
            self.finish();
            self.ctx.fire(MapEventKind::BoxZoomCancel, None);
        }
    }

    /// The marquee rectangle to draw, once the pointer has moved.
    pub fn marquee(&self) -> Option<Rect> {
        let session = self.session.as_ref()?;
        session
            .current
            .map(|current| Rect::from_corners(session.start, current))
    }

    pub fn on_pointer_down(&mut self, event: &PointerEvent) {
        if !self.enabled || self.is_active() {
            return;
        }
        if !(event.modifiers.shift() && event.button == PointerButton::Primary) {
            return;
        }

        self.listeners = [
            GlobalListener::PointerMove,
            GlobalListener::KeyDown,
            GlobalListener::PointerUp,
        ]
        .into_iter()
        .collect();

        self.session = Some(BoxSession {
            start: event.position,
            current: None,
            _selection: self.ctx.selection.acquire(),
        });
        log::debug!("box zoom: started at {:?}", event.position);
    }

    pub fn on_pointer_move(&mut self, event: &PointerEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let first_move = session.current.is_none();
        session.current = Some(event.position);

        if first_move {
            self.ctx.fire(
                MapEventKind::BoxZoomStart,
                Some(&InputEvent::Pointer(event.clone())),
            );
        }
    }

    pub fn on_pointer_up(&mut self, event: &PointerEvent, camera: &mut dyn Camera) {
        if event.button != PointerButton::Primary {
            return;
        }
        let Some(start) = self.finish() else {
            return;
        };
        let end = event.position;
        let original = InputEvent::Pointer(event.clone());

        self.ctx.clicks.suppress();

        if start == end {
            self.ctx.fire(MapEventKind::BoxZoomCancel, Some(&original));
            return;
        }

        let bounds = LngLatBounds::from_corners(camera.unproject(start), camera.unproject(end));
        log::debug!("box zoom: fitting {bounds:?}");
        camera.fit_bounds(bounds, FitBoundsOptions { linear: true }, Some(&original));
        self.ctx.fire_with(
            MapEventKind::BoxZoomEnd,
            Some(&original),
            EventData::BoxZoom { bounds },
        );
    }

    pub fn on_key_down(&mut self, event: &KeyEvent) {
        if event.key_code != ESCAPE_KEY_CODE {
            return;
        }
        if self.finish().is_some() {
            self.ctx.fire(
                MapEventKind::BoxZoomCancel,
                Some(&InputEvent::Key(event.clone())),
            );
        }
    }

    /// Ends the session, unbinding and releasing the selection lease.
    /// Returns the start position if a session was running.
    fn finish(&mut self) -> Option<Point> {
        self.listeners.clear();
        self.session.take().map(|session| session.start)
    }
}
