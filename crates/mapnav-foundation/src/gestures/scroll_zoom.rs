//! Wheel and trackpad zoom.
//!
//! Wheel deltas accumulate between frames. Each frame turns the accumulated
//! delta into a zoom target through a sigmoid, so very fast scrolling is
//! capped at [`MAX_SCALE_PER_FRAME`]. Mouse-wheel ticks ease toward the
//! target over a short window whose curve stays velocity-continuous across
//! ticks; trackpad streams apply the target directly. A burst is bracketed
//! by exactly one `movestart`/`zoomstart` and one `zoomend`/`moveend`.

use super::wheel_classifier::{WheelClassifier, WheelDevice, WHEEL_DELTA_QUANTUM};
use crate::camera::Camera;
use crate::context::GestureContext;
use crate::events::MapEventKind;
use crate::gesture_constants::{
    DEFAULT_ZOOM_RATE, LINE_HEIGHT_PX, MAX_SCALE_PER_FRAME, PRECISION_ZOOM_DIVISOR,
    WHEEL_EASING_DURATION_MS, WHEEL_ZOOM_RATE, ZOOM_END_DELAY_MS,
};
use crate::input::{DeltaMode, InputEvent, WheelEvent};
use mapnav_animation::{CubicBezier, Lerp, SmoothOutEasing};
use mapnav_core::{FrameScheduler, Timer};
use mapnav_graphics::{LngLat, Point};

/// Point held fixed while zooming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ZoomAnchor {
    /// The location under the pointer.
    #[default]
    Pointer,
    /// The map center.
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScrollZoomOptions {
    pub around: ZoomAnchor,
}

impl ScrollZoomOptions {
    pub fn with_around(mut self, around: ZoomAnchor) -> Self {
        self.around = around;
        self
    }
}

/// Eased animation toward the target driven by wheel ticks.
#[derive(Clone, Copy, Debug)]
struct WheelEase {
    start_zoom: f64,
    easing: CubicBezier,
}

pub struct ScrollZoomGesture {
    ctx: GestureContext,
    enabled: bool,
    around: ZoomAnchor,
    active: bool,
    zooming: bool,
    classifier: WheelClassifier,
    /// Accumulated, sign-inverted delta not yet applied.
    delta: f64,
    last_wheel: Option<InputEvent>,
    anchor: Option<(LngLat, Point)>,
    target_zoom: Option<f64>,
    wheel_ease: Option<WheelEase>,
    smooth_out: SmoothOutEasing,
    frame: FrameScheduler<()>,
    finish: Timer,
}

impl ScrollZoomGesture {
    pub fn new(ctx: GestureContext) -> Self {
        let frame = FrameScheduler::new("scroll_zoom", ctx.scheduler.clone());
        Self {
            ctx,
            enabled: false,
            around: ZoomAnchor::Pointer,
            active: false,
            zooming: false,
            classifier: WheelClassifier::new(),
            delta: 0.0,
            last_wheel: None,
            anchor: None,
            target_zoom: None,
            wheel_ease: None,
            smooth_out: SmoothOutEasing::new(),
            frame,
            finish: Timer::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A zoom frame is pending or an eased zoom is still running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Between the burst's `zoomstart` and its `zoomend`.
    pub fn is_zooming(&self) -> bool {
        self.zooming
    }

    pub fn around(&self) -> ZoomAnchor {
        self.around
    }

    /// Enables wheel zoom. Options are only applied when the handler was
    /// disabled; see [`set_around`](Self::set_around) to change them later.
    pub fn enable(&mut self, options: ScrollZoomOptions) {
        if self.enabled {
            return;
        }
        self.enabled = true;
        self.around = options.around;
    }

    pub fn set_around(&mut self, around: ZoomAnchor) {
        self.around = around;
    }

    /// Stops accepting wheel input. A burst already in flight finishes and
    /// still fires its terminal events.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn on_wheel(&mut self, event: &WheelEvent, camera: &dyn Camera) {
        if !self.enabled {
            return;
        }
        event.prevent_default();

        let mut value = match event.delta_mode {
            DeltaMode::Line => event.delta_y * LINE_HEIGHT_PX,
            DeltaMode::Pixel | DeltaMode::Page => event.delta_y,
        };
        if value == 0.0 {
            return;
        }

        let now = self.ctx.now();
        value = self.classifier.classify(now, value);
        self.last_wheel = Some(InputEvent::Wheel(event.clone()));

        if event.modifiers.shift() && value != 0.0 {
            value /= PRECISION_ZOOM_DIVISOR;
        }

        if self.classifier.device().is_some() {
            self.delta -= value;
            if !self.active {
                self.start(camera);
            }
        }
    }

    /// Fires the classification deferral and the end-of-burst timer.
    pub fn run_timers(&mut self, camera: &dyn Camera) {
        let now = self.ctx.now();

        if let Some(deferred) = self.classifier.poll(now) {
            self.delta -= deferred;
            if !self.active {
                self.start(camera);
            }
        }

        if self.finish.fire(now) {
            self.zooming = false;
            self.target_zoom = None;
            log::debug!("scroll zoom: burst finished");
            self.ctx.fire(MapEventKind::ZoomEnd, self.last_wheel.as_ref());
            self.ctx.fire(MapEventKind::MoveEnd, self.last_wheel.as_ref());
        }
    }

    pub fn next_deadline(&self) -> Option<f64> {
        match (self.classifier.next_deadline(), self.finish.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn start(&mut self, camera: &dyn Camera) {
        if self.delta == 0.0 {
            return;
        }

        self.frame.cancel();
        self.active = true;

        if !self.zooming {
            self.zooming = true;
            log::debug!("scroll zoom: burst started");
            self.ctx.fire(MapEventKind::MoveStart, self.last_wheel.as_ref());
            self.ctx.fire(MapEventKind::ZoomStart, self.last_wheel.as_ref());
        }

        self.finish.cancel();

        self.anchor = match self.around {
            ZoomAnchor::Center => {
                let center = camera.center();
                Some((center, camera.project(center)))
            }
            ZoomAnchor::Pointer => {
                let point = self
                    .last_wheel
                    .as_ref()
                    .and_then(InputEvent::as_wheel)
                    .map(|wheel| wheel.position)
                    .unwrap_or_default();
                Some((camera.unproject(point), point))
            }
        };
        self.frame.request(());
    }

    /// Applies the accumulated delta and advances the wheel easing.
    pub fn run_frame(&mut self, camera: &mut dyn Camera) {
        if self.frame.take().is_none() || !self.active {
            return;
        }
        let now = self.ctx.now();
        let device = self.classifier.device();

        if self.delta != 0.0 {
            let zoom_rate =
                if device == Some(WheelDevice::Wheel) && self.delta.abs() > WHEEL_DELTA_QUANTUM {
                    WHEEL_ZOOM_RATE
                } else {
                    DEFAULT_ZOOM_RATE
                };
            let mut scale =
                MAX_SCALE_PER_FRAME / (1.0 + (-(self.delta * zoom_rate).abs()).exp());
            if self.delta < 0.0 && scale != 0.0 {
                scale = 1.0 / scale;
            }

            let from_scale = match self.target_zoom {
                Some(target) => camera.zoom_scale(target),
                None => camera.scale(),
            };
            let target = camera
                .scale_zoom(from_scale * scale)
                .max(camera.min_zoom())
                .min(camera.max_zoom());
            self.target_zoom = Some(target);

            if device == Some(WheelDevice::Wheel) {
                self.wheel_ease = Some(WheelEase {
                    start_zoom: camera.zoom(),
                    easing: self.smooth_out.compute(now, WHEEL_EASING_DURATION_MS),
                });
            }
            self.delta = 0.0;
        }

        let target = self.target_zoom.unwrap_or_else(|| camera.zoom());
        let mut finished = true;
        match self.wheel_ease {
            Some(ease) if device == Some(WheelDevice::Wheel) => {
                let since = self.classifier.last_event_time().unwrap_or(now);
                let t = ((now - since) / WHEEL_EASING_DURATION_MS).min(1.0);
                let k = ease.easing.transform(t);
                camera.set_zoom(ease.start_zoom.lerp(&target, k));
                if t < 1.0 {
                    finished = false;
                    self.frame.request(());
                }
            }
            _ => camera.set_zoom(target),
        }

        if let Some((location, point)) = self.anchor {
            camera.set_location_at_point(location, point);
        }
        log::trace!("scroll zoom: zoom {:.4}", camera.zoom());

        self.ctx.fire(MapEventKind::Move, self.last_wheel.as_ref());
        self.ctx.fire(MapEventKind::Zoom, self.last_wheel.as_ref());

        if finished {
            self.active = false;
            self.finish.start(now, ZOOM_END_DELAY_MS);
        }
    }
}
