//! Click-drag and single-finger panning with fling continuation.

use super::state::GestureState;
use crate::camera::{AnimationOptions, Camera};
use crate::context::GestureContext;
use crate::events::MapEventKind;
use crate::input::{
    GlobalListener, InputEvent, ListenerSet, PointerButton, PointerEvent, TouchEvent,
};
use mapnav_animation::{bezier, CubicBezier, InertiaTracker, LinearDecay};
use mapnav_core::FrameScheduler;
use mapnav_graphics::Point;

/// Easing of the fling continuation.
pub fn pan_inertia_easing() -> CubicBezier {
    bezier(0.0, 0.0, LinearDecay::PAN.linearity, 1.0)
}

struct PanSession {
    previous: Point,
    inertia: InertiaTracker<Point>,
}

pub struct DragPanGesture {
    ctx: GestureContext,
    state: GestureState,
    listeners: ListenerSet,
    frame: FrameScheduler<(InputEvent, Point)>,
    session: Option<PanSession>,
}

impl DragPanGesture {
    pub fn new(ctx: GestureContext) -> Self {
        let frame = FrameScheduler::new("drag_pan", ctx.scheduler.clone());
        Self {
            ctx,
            state: GestureState::Disabled,
            listeners: ListenerSet::NONE,
            frame,
            session: None,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn is_engaged(&self) -> bool {
        self.state.is_engaged()
    }

    pub fn listeners(&self) -> ListenerSet {
        self.listeners
    }

    pub fn enable(&mut self) {
        if self.is_enabled() {
            return;
        }
        self.state = GestureState::Enabled;
    }

    pub fn disable(&mut self) {
        let previous = std::mem::replace(&mut self.state, GestureState::Disabled);
        match previous {
            GestureState::Active => {
                self.unbind();
                self.deactivate();
                self.ctx.fire(MapEventKind::DragEnd, None);
                self.ctx.fire(MapEventKind::MoveEnd, None);
            }
            GestureState::Pending => {
                self.unbind();
                self.deactivate();
            }
            GestureState::Enabled | GestureState::Disabled => {}
        }
    }

    pub fn on_pointer_down(&mut self, event: &PointerEvent) {
        if self.state != GestureState::Enabled {
            return;
        }
        if event.modifiers.ctrl() || self.ctx.mouse_button(event) != PointerButton::Primary {
            return;
        }
        self.listeners.insert(GlobalListener::PointerMove);
        self.listeners.insert(GlobalListener::PointerUp);
        self.start(event.position);
    }

    pub fn on_touch_start(&mut self, event: &TouchEvent) {
        if self.state != GestureState::Enabled || event.touches.len() > 1 {
            return;
        }
        let Some(position) = event.position() else {
            return;
        };
        self.listeners.insert(GlobalListener::TouchMove);
        self.listeners.insert(GlobalListener::TouchEnd);
        self.listeners.insert(GlobalListener::TouchCancel);
        self.start(position);
    }

    fn start(&mut self, position: Point) {
        self.listeners.insert(GlobalListener::Blur);
        self.state = GestureState::Pending;

        let mut inertia = InertiaTracker::new(self.ctx.clock.clone(), LinearDecay::PAN);
        inertia.update(position);
        self.session = Some(PanSession {
            previous: position,
            inertia,
        });
    }

    pub fn on_pointer_move(&mut self, event: &PointerEvent) {
        event.prevent_default();
        self.handle_move(InputEvent::Pointer(event.clone()), event.position);
    }

    pub fn on_touch_move(&mut self, event: &TouchEvent) {
        event.prevent_default();
        if let Some(position) = event.position() {
            self.handle_move(InputEvent::Touch(event.clone()), position);
        }
    }

    fn handle_move(&mut self, original: InputEvent, position: Point) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.inertia.update(position);

        if self.state == GestureState::Pending {
            // The first move, not the press, starts the drag.
            self.state = GestureState::Active;
            log::debug!("drag pan: active");
            self.ctx.fire(MapEventKind::DragStart, Some(&original));
            self.ctx.fire(MapEventKind::MoveStart, Some(&original));
        }
        self.frame.request((original, position));
    }

    /// Applies the latest drag position to the camera.
    pub fn run_frame(&mut self, camera: &mut dyn Camera) {
        let Some((original, position)) = self.frame.take() else {
            return;
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let location = camera.unproject(session.previous);
        camera.set_location_at_point(location, position);
        log::trace!("drag pan: frame at {position:?}");

        self.ctx.fire(MapEventKind::Drag, Some(&original));
        self.ctx.fire(MapEventKind::Move, Some(&original));
        session.previous = position;
    }

    pub fn on_pointer_up(&mut self, event: &PointerEvent, camera: &mut dyn Camera) {
        if self.ctx.mouse_button(event) != PointerButton::Primary {
            return;
        }
        self.release(InputEvent::Pointer(event.clone()), true, camera);
    }

    pub fn on_touch_end(&mut self, event: &TouchEvent, camera: &mut dyn Camera) {
        self.release(InputEvent::Touch(event.clone()), false, camera);
    }

    /// A cancelled touch ends the drag like a lost window focus.
    pub fn on_touch_cancel(&mut self, event: &TouchEvent) {
        self.abort(Some(&InputEvent::Touch(event.clone())));
    }

    pub fn on_blur(&mut self) {
        self.abort(Some(&InputEvent::Blur));
    }

    fn release(&mut self, original: InputEvent, suppress_click: bool, camera: &mut dyn Camera) {
        match self.state {
            GestureState::Active => {
                self.state = GestureState::Enabled;
                if suppress_click {
                    self.ctx.clicks.suppress();
                }
                self.unbind();
                let session = self.deactivate();
                self.inertial_pan(session, &original, camera);
            }
            GestureState::Pending => {
                self.state = GestureState::Enabled;
                self.unbind();
                self.deactivate();
            }
            GestureState::Enabled | GestureState::Disabled => {}
        }
    }

    fn abort(&mut self, original: Option<&InputEvent>) {
        match self.state {
            GestureState::Active => {
                self.state = GestureState::Enabled;
                self.unbind();
                self.deactivate();
                log::debug!("drag pan: aborted");
                self.ctx.fire(MapEventKind::DragEnd, original);
                self.ctx.fire(MapEventKind::MoveEnd, original);
            }
            GestureState::Pending => {
                self.state = GestureState::Enabled;
                self.unbind();
                self.deactivate();
            }
            GestureState::Enabled | GestureState::Disabled => {}
        }
    }

    fn inertial_pan(
        &mut self,
        session: Option<PanSession>,
        original: &InputEvent,
        camera: &mut dyn Camera,
    ) {
        self.ctx.fire(MapEventKind::DragEnd, Some(original));

        let fling = session.and_then(|session| session.inertia.calculate());
        let Some(fling) = fling else {
            self.ctx.fire(MapEventKind::MoveEnd, Some(original));
            return;
        };

        log::debug!(
            "drag pan: fling {:?} over {:.0}ms",
            fling.offset,
            fling.duration_ms
        );
        camera.pan_by(
            fling.offset,
            AnimationOptions::continuing()
                .with_duration(fling.duration_ms)
                .with_easing(pan_inertia_easing()),
            Some(original),
        );
    }

    fn unbind(&mut self) {
        self.listeners.clear();
    }

    fn deactivate(&mut self) -> Option<PanSession> {
        self.frame.cancel();
        self.session.take()
    }
}
