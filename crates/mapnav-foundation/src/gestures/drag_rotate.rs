//! Right-button (or ctrl-click) drag that rotates and optionally pitches the
//! camera, with fling continuation and snapping to north.

use super::state::GestureState;
use crate::camera::{AnimationOptions, Camera};
use crate::context::GestureContext;
use crate::events::MapEventKind;
use crate::gesture_constants::{BEARING_PER_PIXEL, BEARING_SNAP, PITCH_PER_PIXEL};
use crate::input::{GlobalListener, InputEvent, ListenerSet, PointerButton, PointerEvent};
use crate::selection::SelectionLease;
use mapnav_animation::{bezier, CubicBezier, InertiaTracker, LinearDecay};
use mapnav_core::FrameScheduler;
use mapnav_graphics::{normalize_bearing, Point};

/// Easing of the fling continuation.
pub fn rotate_inertia_easing() -> CubicBezier {
    bezier(0.0, 0.0, LinearDecay::ROTATE.linearity, 1.0)
}

/// Which press starts a rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RotateButton {
    /// Secondary button, or a ctrl-held primary click.
    #[default]
    Right,
    /// Primary button without ctrl.
    Left,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRotateOptions {
    pub button: RotateButton,
    /// Degrees within which the bearing snaps to north on release.
    pub bearing_snap: f64,
    /// Vertical drag also changes the pitch.
    pub pitch_with_rotate: bool,
}

impl Default for DragRotateOptions {
    fn default() -> Self {
        Self {
            button: RotateButton::Right,
            bearing_snap: BEARING_SNAP,
            pitch_with_rotate: true,
        }
    }
}

impl DragRotateOptions {
    pub fn with_button(mut self, button: RotateButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_bearing_snap(mut self, bearing_snap: f64) -> Self {
        self.bearing_snap = bearing_snap;
        self
    }

    pub fn with_pitch_with_rotate(mut self, pitch_with_rotate: bool) -> Self {
        self.pitch_with_rotate = pitch_with_rotate;
        self
    }
}

struct RotateSession {
    /// Physical button that started the gesture; only its release ends it.
    button: PointerButton,
    previous_position: Point,
    previous_bearing: f64,
    inertia: InertiaTracker<f64>,
    _selection: SelectionLease,
}

pub struct DragRotateGesture {
    ctx: GestureContext,
    options: DragRotateOptions,
    state: GestureState,
    listeners: ListenerSet,
    frame: FrameScheduler<(InputEvent, Point)>,
    session: Option<RotateSession>,
}

impl DragRotateGesture {
    pub fn new(ctx: GestureContext, options: DragRotateOptions) -> Self {
        let frame = FrameScheduler::new("drag_rotate", ctx.scheduler.clone());
        Self {
            ctx,
            options,
            state: GestureState::Disabled,
            listeners: ListenerSet::NONE,
            frame,
            session: None,
        }
    }

    pub fn options(&self) -> DragRotateOptions {
        self.options
    }

    /// Takes effect from the next gesture.
    pub fn set_options(&mut self, options: DragRotateOptions) {
        self.options = options;
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
                self.fire_end(None);
            }
            GestureState::Pending => {
                self.unbind();
                self.deactivate();
            }
            GestureState::Enabled | GestureState::Disabled => {}
        }
    }

    /// The physical button this press would rotate with, if it qualifies.
    fn trigger_button(&self, event: &PointerEvent) -> Option<PointerButton> {
        let button = self.ctx.mouse_button(event);
        let ctrl = event.modifiers.ctrl();
        let qualifies = match self.options.button {
            RotateButton::Right => {
                let expected = if ctrl {
                    PointerButton::Primary
                } else {
                    PointerButton::Secondary
                };
                button == expected
            }
            RotateButton::Left => !ctrl && button == PointerButton::Primary,
        };
        qualifies.then_some(button)
    }

    pub fn on_pointer_down(&mut self, event: &PointerEvent, camera: &dyn Camera) {
        if self.state != GestureState::Enabled {
            return;
        }
        let Some(button) = self.trigger_button(event) else {
            return;
        };

        self.listeners = [
            GlobalListener::PointerMove,
            GlobalListener::PointerUp,
            GlobalListener::Blur,
        ]
        .into_iter()
        .collect();
        self.state = GestureState::Pending;

        let bearing = camera.bearing();
        let mut inertia = InertiaTracker::new(self.ctx.clock.clone(), LinearDecay::ROTATE);
        inertia.update(bearing);
        self.session = Some(RotateSession {
            button,
            previous_position: event.position,
            previous_bearing: bearing,
            inertia,
            _selection: self.ctx.selection.acquire(),
        });

        event.prevent_default();
    }

    pub fn on_pointer_move(&mut self, event: &PointerEvent) {
        if self.session.is_none() {
            return;
        }
        let original = InputEvent::Pointer(event.clone());

        if self.state == GestureState::Pending {
            self.state = GestureState::Active;
            log::debug!("drag rotate: active");
            self.ctx.fire(MapEventKind::RotateStart, Some(&original));
            self.ctx.fire(MapEventKind::MoveStart, Some(&original));
            if self.options.pitch_with_rotate {
                self.ctx.fire(MapEventKind::PitchStart, Some(&original));
            }
        }
        self.frame.request((original, event.position));
    }

    /// Applies the drag since the previous frame to bearing and pitch.
    pub fn run_frame(&mut self, camera: &mut dyn Camera) {
        let Some((original, position)) = self.frame.take() else {
            return;
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let delta = position - session.previous_position;
        let bearing = camera.bearing() - delta.x * BEARING_PER_PIXEL;
        let pitch = camera.pitch() - delta.y * PITCH_PER_PIXEL;

        let normalized = normalize_bearing(bearing, session.previous_bearing);
        session.inertia.update(normalized);

        camera.set_bearing(bearing);
        if self.options.pitch_with_rotate {
            camera.set_pitch(pitch);
            self.ctx.fire(MapEventKind::Pitch, Some(&original));
        }
        log::trace!("drag rotate: bearing {bearing:.2} pitch {pitch:.2}");

        self.ctx.fire(MapEventKind::Rotate, Some(&original));
        self.ctx.fire(MapEventKind::Move, Some(&original));

        session.previous_bearing = normalized;
        session.previous_position = position;
    }

    pub fn on_pointer_up(&mut self, event: &PointerEvent, camera: &mut dyn Camera) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if self.ctx.mouse_button(event) != session.button {
            return;
        }

        match self.state {
            GestureState::Active => {
                self.state = GestureState::Enabled;
                self.ctx.clicks.suppress();
                self.unbind();
                let session = self.deactivate();
                self.inertial_rotate(session, &InputEvent::Pointer(event.clone()), camera);
            }
            GestureState::Pending => {
                self.state = GestureState::Enabled;
                self.unbind();
                self.deactivate();
            }
            GestureState::Enabled | GestureState::Disabled => {}
        }
    }

    pub fn on_blur(&mut self) {
        match self.state {
            GestureState::Active => {
                self.state = GestureState::Enabled;
                self.unbind();
                self.deactivate();
                log::debug!("drag rotate: aborted");
                self.fire_end(Some(&InputEvent::Blur));
            }
            GestureState::Pending => {
                self.state = GestureState::Enabled;
                self.unbind();
                self.deactivate();
            }
            GestureState::Enabled | GestureState::Disabled => {}
        }
    }

    fn fire_end(&self, original: Option<&InputEvent>) {
        self.ctx.fire(MapEventKind::RotateEnd, original);
        if self.options.pitch_with_rotate {
            self.ctx.fire(MapEventKind::PitchEnd, original);
        }
        self.ctx.fire(MapEventKind::MoveEnd, original);
    }

    fn inertial_rotate(
        &mut self,
        session: Option<RotateSession>,
        original: &InputEvent,
        camera: &mut dyn Camera,
    ) {
        self.ctx.fire(MapEventKind::RotateEnd, Some(original));
        if self.options.pitch_with_rotate {
            self.ctx.fire(MapEventKind::PitchEnd, Some(original));
        }

        let snap = self.options.bearing_snap;
        let target = session.and_then(|session| {
            let fling = session.inertia.calculate()?;
            let mut bearing =
                normalize_bearing(camera.bearing(), session.previous_bearing) + fling.offset;
            if normalize_bearing(bearing, 0.0).abs() < snap {
                bearing = normalize_bearing(0.0, bearing);
            }
            Some((bearing, fling.duration_ms))
        });

        match target {
            Some((bearing, duration_ms)) => {
                log::debug!("drag rotate: fling to {bearing:.2} over {duration_ms:.0}ms");
                camera.rotate_to(
                    bearing,
                    AnimationOptions::continuing()
                        .with_duration(duration_ms)
                        .with_easing(rotate_inertia_easing()),
                    Some(original),
                );
            }
            None if camera.bearing().abs() < snap => {
                camera.reset_north(AnimationOptions::continuing(), Some(original));
            }
            None => self.ctx.fire(MapEventKind::MoveEnd, Some(original)),
        }
    }

    fn unbind(&mut self) {
        self.listeners.clear();
    }

    /// Cancels the pending frame and ends the session, restoring text
    /// selection.
    fn deactivate(&mut self) -> Option<RotateSession> {
        self.frame.cancel();
        self.session.take()
    }
}
