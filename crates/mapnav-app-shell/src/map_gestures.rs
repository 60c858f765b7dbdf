use crate::options::GestureOptions;
use mapnav_core::GestureError;
use mapnav_foundation::{
    BoxZoomGesture, Camera, DragPanGesture, DragRotateGesture, EventData, GestureContext,
    GlobalListener, InputEvent, KeyEvent, MapEvent, MapEventKind, PointerEvent,
    ScrollZoomGesture, TouchEvent, WheelEvent,
};
use mapnav_graphics::Point;

/// Routes a map's raw input to its gesture handlers.
///
/// Presses are offered to box zoom first, then drag rotate, then drag pan.
/// A handler only sees the press while no other drag-family handler holds a
/// pending or active press, so at most one of them drives the camera. Scroll zoom runs independently
/// and may overlap a drag.
///
/// The host calls [`on_frame`](Self::on_frame) for every frame requested
/// through the context's scheduler and [`run_timers`](Self::run_timers)
/// whenever [`next_deadline`](Self::next_deadline) passes.
pub struct MapGestures<C: Camera> {
    camera: C,
    ctx: GestureContext,
    options: GestureOptions,
    box_zoom: BoxZoomGesture,
    drag_rotate: DragRotateGesture,
    drag_pan: DragPanGesture,
    scroll_zoom: ScrollZoomGesture,
    mouse_down: bool,
    start_position: Option<Point>,
    deferred_context_menu: Option<PointerEvent>,
}

impl<C: Camera> MapGestures<C> {
    pub fn new(camera: C, ctx: GestureContext, options: GestureOptions) -> Result<Self, GestureError> {
        options.validate()?;
        let (min, max) = (camera.min_zoom(), camera.max_zoom());
        if min > max {
            return Err(GestureError::InvalidZoomRange { min, max });
        }

        let ctx = ctx.with_quirks(options.quirks);
        let mut gestures = Self {
            box_zoom: BoxZoomGesture::new(ctx.clone()),
            drag_rotate: DragRotateGesture::new(ctx.clone(), options.drag_rotate_options),
            drag_pan: DragPanGesture::new(ctx.clone()),
            scroll_zoom: ScrollZoomGesture::new(ctx.clone()),
            camera,
            ctx,
            options,
            mouse_down: false,
            start_position: None,
            deferred_context_menu: None,
        };

        if options.interactive {
            if options.scroll_zoom {
                gestures.scroll_zoom.enable(options.scroll_zoom_options);
            }
            if options.box_zoom {
                gestures.box_zoom.enable();
            }
            if options.drag_rotate {
                gestures.drag_rotate.enable();
            }
            if options.drag_pan {
                gestures.drag_pan.enable();
            }
        }
        log::debug!("map gestures ready: {options:?}");
        Ok(gestures)
    }

    pub fn options(&self) -> &GestureOptions {
        &self.options
    }

    pub fn context(&self) -> &GestureContext {
        &self.ctx
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    pub fn box_zoom(&self) -> &BoxZoomGesture {
        &self.box_zoom
    }

    pub fn box_zoom_mut(&mut self) -> &mut BoxZoomGesture {
        &mut self.box_zoom
    }

    pub fn drag_rotate(&self) -> &DragRotateGesture {
        &self.drag_rotate
    }

    pub fn drag_rotate_mut(&mut self) -> &mut DragRotateGesture {
        &mut self.drag_rotate
    }

    pub fn drag_pan(&self) -> &DragPanGesture {
        &self.drag_pan
    }

    pub fn drag_pan_mut(&mut self) -> &mut DragPanGesture {
        &mut self.drag_pan
    }

    pub fn scroll_zoom(&self) -> &ScrollZoomGesture {
        &self.scroll_zoom
    }

    pub fn scroll_zoom_mut(&mut self) -> &mut ScrollZoomGesture {
        &mut self.scroll_zoom
    }

    pub fn is_moving(&self) -> bool {
        self.drag_pan.is_active() || self.drag_rotate.is_active() || self.scroll_zoom.is_active()
    }

    pub fn is_zooming(&self) -> bool {
        self.scroll_zoom.is_zooming()
    }

    pub fn is_rotating(&self) -> bool {
        self.drag_rotate.is_active()
    }

    pub fn on_pointer_down(&mut self, event: &PointerEvent) {
        self.mouse_down = true;
        self.start_position = Some(event.position);

        let map_event = self.mouse_event(MapEventKind::MouseDown, event);
        self.ctx.emitter.emit(&map_event);
        if map_event.is_default_prevented() {
            log::debug!("mousedown vetoed by a listener");
            return;
        }

        if self.options.interactive {
            self.camera.stop();
        }

        self.box_zoom.on_pointer_down(event);

        if !self.box_zoom.is_active() && !self.drag_pan.is_engaged() {
            self.drag_rotate.on_pointer_down(event, &self.camera);
        }

        if !self.box_zoom.is_active() && !self.drag_rotate.is_engaged() {
            self.drag_pan.on_pointer_down(event);
        }
    }

    pub fn on_pointer_move(&mut self, event: &PointerEvent) {
        if self.box_zoom.listeners().contains(GlobalListener::PointerMove) {
            self.box_zoom.on_pointer_move(event);
        }
        if self.drag_rotate.listeners().contains(GlobalListener::PointerMove) {
            self.drag_rotate.on_pointer_move(event);
        }
        if self.drag_pan.listeners().contains(GlobalListener::PointerMove) {
            self.drag_pan.on_pointer_move(event);
        }

        if self.drag_pan.is_active() || self.drag_rotate.is_active() {
            return;
        }
        let map_event = self.mouse_event(MapEventKind::MouseMove, event);
        self.ctx.emitter.emit(&map_event);
    }

    pub fn on_pointer_up(&mut self, event: &PointerEvent) {
        let rotating = self.drag_rotate.is_active();
        if let Some(context_menu) = self.deferred_context_menu.take() {
            if !rotating {
                let map_event = self.mouse_event(MapEventKind::ContextMenu, &context_menu);
                self.ctx.emitter.emit(&map_event);
            }
        }
        self.mouse_down = false;

        let map_event = self.mouse_event(MapEventKind::MouseUp, event);
        self.ctx.emitter.emit(&map_event);

        if self.box_zoom.listeners().contains(GlobalListener::PointerUp) {
            self.box_zoom.on_pointer_up(event, &mut self.camera);
        }
        if self.drag_rotate.listeners().contains(GlobalListener::PointerUp) {
            self.drag_rotate.on_pointer_up(event, &mut self.camera);
        }
        if self.drag_pan.listeners().contains(GlobalListener::PointerUp) {
            self.drag_pan.on_pointer_up(event, &mut self.camera);
        }
    }

    pub fn on_touch_start(&mut self, event: &TouchEvent) {
        let map_event = self.touch_event(MapEventKind::TouchStart, event);
        self.ctx.emitter.emit(&map_event);
        if map_event.is_default_prevented() {
            log::debug!("touchstart vetoed by a listener");
            return;
        }

        if self.options.interactive {
            self.camera.stop();
        }

        if !self.box_zoom.is_active() && !self.drag_rotate.is_engaged() {
            self.drag_pan.on_touch_start(event);
        }
    }

    pub fn on_touch_move(&mut self, event: &TouchEvent) {
        if self.drag_pan.listeners().contains(GlobalListener::TouchMove) {
            self.drag_pan.on_touch_move(event);
        }

        if self.drag_pan.is_active() || self.drag_rotate.is_active() {
            return;
        }
        let map_event = self.touch_event(MapEventKind::TouchMove, event);
        self.ctx.emitter.emit(&map_event);
    }

    pub fn on_touch_end(&mut self, event: &TouchEvent) {
        let map_event = self.touch_event(MapEventKind::TouchEnd, event);
        self.ctx.emitter.emit(&map_event);

        if self.drag_pan.listeners().contains(GlobalListener::TouchEnd) {
            self.drag_pan.on_touch_end(event, &mut self.camera);
        }
    }

    pub fn on_touch_cancel(&mut self, event: &TouchEvent) {
        let map_event = self.touch_event(MapEventKind::TouchCancel, event);
        self.ctx.emitter.emit(&map_event);

        if self.drag_pan.listeners().contains(GlobalListener::TouchCancel) {
            self.drag_pan.on_touch_cancel(event);
        }
    }

    pub fn on_wheel(&mut self, event: &WheelEvent) {
        let map_event = MapEvent::new(MapEventKind::Wheel)
            .with_original(Some(&InputEvent::Wheel(event.clone())));
        self.ctx.emitter.emit(&map_event);
        if map_event.is_default_prevented() {
            return;
        }
        self.scroll_zoom.on_wheel(event, &self.camera);
    }

    pub fn on_key_down(&mut self, event: &KeyEvent) {
        if self.box_zoom.listeners().contains(GlobalListener::KeyDown) {
            self.box_zoom.on_key_down(event);
        }
    }

    /// The window lost focus; drags end without a fling.
    pub fn on_blur(&mut self) {
        if self.drag_rotate.listeners().contains(GlobalListener::Blur) {
            self.drag_rotate.on_blur();
        }
        if self.drag_pan.listeners().contains(GlobalListener::Blur) {
            self.drag_pan.on_blur();
        }
    }

    pub fn on_click(&mut self, event: &PointerEvent) {
        if self.ctx.clicks.take() {
            event.prevent_default();
            log::trace!("click swallowed after drag");
            return;
        }
        if let Some(start) = self.start_position {
            if event.position.dist(start) > self.options.click_tolerance {
                return;
            }
        }
        let map_event = self.mouse_event(MapEventKind::Click, event);
        self.ctx.emitter.emit(&map_event);
    }

    /// Platforms that raise the context menu on press have it held back
    /// until release, and dropped if that press turned into a rotation.
    pub fn on_context_menu(&mut self, event: &PointerEvent) {
        let rotating = self.drag_rotate.is_active();
        if !self.mouse_down && !rotating {
            let map_event = self.mouse_event(MapEventKind::ContextMenu, event);
            self.ctx.emitter.emit(&map_event);
        } else if self.mouse_down {
            self.deferred_context_menu = Some(event.clone());
        }
        event.prevent_default();
    }

    /// Runs the frame work requested since the previous tick.
    pub fn on_frame(&mut self) {
        self.scroll_zoom.run_frame(&mut self.camera);
        self.drag_rotate.run_frame(&mut self.camera);
        self.drag_pan.run_frame(&mut self.camera);
    }

    /// Fires every wall-clock timer whose deadline has passed.
    pub fn run_timers(&mut self) {
        self.ctx.clicks.expire();
        self.scroll_zoom.run_timers(&self.camera);
    }

    /// Earliest pending timer deadline, in clock milliseconds.
    ///
    /// An armed click suppression is due immediately, so it expires on the
    /// host's next poll even when no click follows the drag.
    pub fn next_deadline(&self) -> Option<f64> {
        let clicks = self.ctx.clicks.is_armed().then(|| self.ctx.now());
        match (clicks, self.scroll_zoom.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn mouse_event(&self, kind: MapEventKind, event: &PointerEvent) -> MapEvent {
        let point = event.position;
        MapEvent::new(kind)
            .with_original(Some(&InputEvent::Pointer(event.clone())))
            .with_data(EventData::Mouse {
                point,
                lng_lat: self.camera.unproject(point),
            })
    }

    fn touch_event(&self, kind: MapEventKind, event: &TouchEvent) -> MapEvent {
        let points = event.reported_points();
        let point = Point::centroid(points).unwrap_or_default();
        MapEvent::new(kind)
            .with_original(Some(&InputEvent::Touch(event.clone())))
            .with_data(EventData::Touch {
                points: points.iter().copied().collect(),
                point,
                lng_lats: points.iter().map(|p| self.camera.unproject(*p)).collect(),
                lng_lat: self.camera.unproject(point),
            })
    }
}
