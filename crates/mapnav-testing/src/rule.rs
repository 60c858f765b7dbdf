//! Scripted input for gesture tests.
//!
//! ```
//! use mapnav_testing::GestureTestRule;
//!
//! let mut rule = GestureTestRule::new();
//! rule.mouse_down(10.0, 10.0);
//! rule.mouse_move(30.0, 10.0);
//! rule.flush_frame();
//! rule.mouse_up(30.0, 10.0);
//! assert!(!rule.gestures().is_moving());
//! ```

use crate::camera::MockCamera;
use crate::host::{FrameHost, ManualClock, MemorySelection};
use crate::recorder::EventRecorder;
use mapnav_app_shell::{GestureOptions, MapGestures};
use mapnav_core::{Clock, GestureError};
use mapnav_foundation::{
    DeltaMode, DragSelection, GestureContext, KeyEvent, Modifiers, PointerButton, PointerEvent,
    PointerEventKind, TouchEvent, TouchEventKind, WheelEvent,
};
use mapnav_graphics::Point;
use std::rc::Rc;

/// Frame interval used when advancing time.
pub const FRAME_MS: f64 = 16.0;

/// Time the clock starts at, far enough from zero that nothing looks
/// recent.
const START_TIME_MS: f64 = 10_000.0;

/// A [`MapGestures`] over a [`MockCamera`] with deterministic time, frames
/// and events.
pub struct GestureTestRule {
    gestures: MapGestures<MockCamera>,
    clock: Rc<ManualClock>,
    frames: Rc<FrameHost>,
    events: Rc<EventRecorder>,
    selection: Rc<MemorySelection>,
}

impl GestureTestRule {
    pub fn new() -> Self {
        Self::try_with(MockCamera::new(), GestureOptions::default())
            .unwrap_or_else(|err| panic!("default gesture options rejected: {err}"))
    }

    pub fn with_options(options: GestureOptions) -> Self {
        Self::try_with(MockCamera::new(), options)
            .unwrap_or_else(|err| panic!("gesture options rejected: {err}"))
    }

    pub fn with_camera(camera: MockCamera) -> Self {
        Self::try_with(camera, GestureOptions::default())
            .unwrap_or_else(|err| panic!("camera rejected: {err}"))
    }

    pub fn try_with(camera: MockCamera, options: GestureOptions) -> Result<Self, GestureError> {
        let clock = Rc::new(ManualClock::new(START_TIME_MS));
        let frames = Rc::new(FrameHost::new());
        let events = Rc::new(EventRecorder::new());
        let selection = Rc::new(MemorySelection::default());

        let ctx = GestureContext::new(events.clone(), clock.clone(), frames.clone())
            .with_selection(DragSelection::init(selection.clone()));
        let gestures = MapGestures::new(camera, ctx, options)?;

        Ok(Self {
            gestures,
            clock,
            frames,
            events,
            selection,
        })
    }

    pub fn gestures(&self) -> &MapGestures<MockCamera> {
        &self.gestures
    }

    pub fn gestures_mut(&mut self) -> &mut MapGestures<MockCamera> {
        &mut self.gestures
    }

    pub fn camera(&self) -> &MockCamera {
        self.gestures.camera()
    }

    pub fn camera_mut(&mut self) -> &mut MockCamera {
        self.gestures.camera_mut()
    }

    pub fn events(&self) -> &EventRecorder {
        &self.events
    }

    pub fn frames(&self) -> &FrameHost {
        &self.frames
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn user_select(&self) -> String {
        self.selection.value()
    }

    /// Runs one frame if one was requested. Returns whether it ran.
    pub fn flush_frame(&mut self) -> bool {
        if !self.frames.take_request() {
            return false;
        }
        self.gestures.on_frame();
        true
    }

    /// Moves time forward by `ms` in frame-sized steps, polling timers and
    /// running requested frames at every step.
    pub fn advance_by(&mut self, ms: f64) {
        let mut remaining = ms;
        while remaining > 0.0 {
            let step = remaining.min(FRAME_MS);
            self.clock.advance(step);
            remaining -= step;
            self.gestures.run_timers();
            self.flush_frame();
        }
    }

    /// Polls timers the way a host event loop does: only once
    /// [`MapGestures::next_deadline`] has passed. Returns whether they ran.
    pub fn run_due_timers(&mut self) -> bool {
        match self.gestures.next_deadline() {
            Some(deadline) if deadline <= self.clock.now() => {
                self.gestures.run_timers();
                true
            }
            _ => false,
        }
    }

    /// Moves time forward without running frames or timers.
    pub fn advance_clock(&self, ms: f64) {
        self.clock.advance(ms);
    }

    pub fn pointer(
        kind: PointerEventKind,
        x: f64,
        y: f64,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> PointerEvent {
        PointerEvent::new(kind, Point::new(x, y))
            .with_button(button)
            .with_modifiers(modifiers)
    }

    pub fn mouse_down(&mut self, x: f64, y: f64) -> PointerEvent {
        self.mouse_down_with(x, y, PointerButton::Primary, Modifiers::NONE)
    }

    pub fn mouse_down_with(
        &mut self,
        x: f64,
        y: f64,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> PointerEvent {
        let event = Self::pointer(PointerEventKind::Down, x, y, button, modifiers);
        self.gestures.on_pointer_down(&event);
        event
    }

    pub fn mouse_move(&mut self, x: f64, y: f64) -> PointerEvent {
        self.mouse_move_with(x, y, PointerButton::Primary, Modifiers::NONE)
    }

    pub fn mouse_move_with(
        &mut self,
        x: f64,
        y: f64,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> PointerEvent {
        let event = Self::pointer(PointerEventKind::Move, x, y, button, modifiers);
        self.gestures.on_pointer_move(&event);
        event
    }

    pub fn mouse_up(&mut self, x: f64, y: f64) -> PointerEvent {
        self.mouse_up_with(x, y, PointerButton::Primary, Modifiers::NONE)
    }

    pub fn mouse_up_with(
        &mut self,
        x: f64,
        y: f64,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> PointerEvent {
        let event = Self::pointer(PointerEventKind::Up, x, y, button, modifiers);
        self.gestures.on_pointer_up(&event);
        event
    }

    pub fn click(&mut self, x: f64, y: f64) -> PointerEvent {
        let event = PointerEvent::new(PointerEventKind::Click, Point::new(x, y));
        self.gestures.on_click(&event);
        event
    }

    pub fn context_menu(&mut self, x: f64, y: f64) -> PointerEvent {
        let event = PointerEvent::new(PointerEventKind::ContextMenu, Point::new(x, y))
            .with_button(PointerButton::Secondary);
        self.gestures.on_context_menu(&event);
        event
    }

    pub fn touch_start(&mut self, points: &[(f64, f64)]) -> TouchEvent {
        let event = touch(TouchEventKind::Start, points);
        self.gestures.on_touch_start(&event);
        event
    }

    pub fn touch_move(&mut self, points: &[(f64, f64)]) -> TouchEvent {
        let event = touch(TouchEventKind::Move, points);
        self.gestures.on_touch_move(&event);
        event
    }

    /// Lifts every finger at `points`.
    pub fn touch_end(&mut self, points: &[(f64, f64)]) -> TouchEvent {
        let event = TouchEvent::new(TouchEventKind::End, std::iter::empty::<Point>())
            .with_changed_touches(points.iter().map(|&(x, y)| Point::new(x, y)));
        self.gestures.on_touch_end(&event);
        event
    }

    pub fn touch_cancel(&mut self) -> TouchEvent {
        let event = TouchEvent::new(TouchEventKind::Cancel, std::iter::empty::<Point>());
        self.gestures.on_touch_cancel(&event);
        event
    }

    pub fn wheel(&mut self, delta_y: f64) -> WheelEvent {
        self.wheel_with(delta_y, DeltaMode::Pixel, Modifiers::NONE, Point::new(256.0, 256.0))
    }

    pub fn wheel_with(
        &mut self,
        delta_y: f64,
        delta_mode: DeltaMode,
        modifiers: Modifiers,
        position: Point,
    ) -> WheelEvent {
        let event = WheelEvent::new(delta_y, position)
            .with_delta_mode(delta_mode)
            .with_modifiers(modifiers);
        self.gestures.on_wheel(&event);
        event
    }

    pub fn key_down(&mut self, key_code: u32) -> KeyEvent {
        let event = KeyEvent::new(key_code);
        self.gestures.on_key_down(&event);
        event
    }

    pub fn blur(&mut self) {
        self.gestures.on_blur();
    }
}

impl Default for GestureTestRule {
    fn default() -> Self {
        Self::new()
    }
}

fn touch(kind: TouchEventKind, points: &[(f64, f64)]) -> TouchEvent {
    TouchEvent::new(kind, points.iter().map(|&(x, y)| Point::new(x, y)))
}
