//! Named map events and the emitter capability handlers publish them
//! through.

use crate::input::{InputEvent, TouchPoints};
use mapnav_core::collections::map::HashMap;
use mapnav_graphics::{LngLat, LngLatBounds, Point};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MapEventKind {
    DragStart,
    Drag,
    DragEnd,
    MoveStart,
    Move,
    MoveEnd,
    ZoomStart,
    Zoom,
    ZoomEnd,
    RotateStart,
    Rotate,
    RotateEnd,
    PitchStart,
    Pitch,
    PitchEnd,
    BoxZoomStart,
    BoxZoomEnd,
    BoxZoomCancel,
    MouseDown,
    MouseUp,
    MouseMove,
    Click,
    ContextMenu,
    Wheel,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
}

impl MapEventKind {
    pub fn name(self) -> &'static str {
        match self {
            MapEventKind::DragStart => "dragstart",
            MapEventKind::Drag => "drag",
            MapEventKind::DragEnd => "dragend",
            MapEventKind::MoveStart => "movestart",
            MapEventKind::Move => "move",
            MapEventKind::MoveEnd => "moveend",
            MapEventKind::ZoomStart => "zoomstart",
            MapEventKind::Zoom => "zoom",
            MapEventKind::ZoomEnd => "zoomend",
            MapEventKind::RotateStart => "rotatestart",
            MapEventKind::Rotate => "rotate",
            MapEventKind::RotateEnd => "rotateend",
            MapEventKind::PitchStart => "pitchstart",
            MapEventKind::Pitch => "pitch",
            MapEventKind::PitchEnd => "pitchend",
            MapEventKind::BoxZoomStart => "boxzoomstart",
            MapEventKind::BoxZoomEnd => "boxzoomend",
            MapEventKind::BoxZoomCancel => "boxzoomcancel",
            MapEventKind::MouseDown => "mousedown",
            MapEventKind::MouseUp => "mouseup",
            MapEventKind::MouseMove => "mousemove",
            MapEventKind::Click => "click",
            MapEventKind::ContextMenu => "contextmenu",
            MapEventKind::Wheel => "wheel",
            MapEventKind::TouchStart => "touchstart",
            MapEventKind::TouchMove => "touchmove",
            MapEventKind::TouchEnd => "touchend",
            MapEventKind::TouchCancel => "touchcancel",
        }
    }
}

impl fmt::Display for MapEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Geometry attached to a map event.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EventData {
    #[default]
    None,
    Mouse {
        point: Point,
        lng_lat: LngLat,
    },
    Touch {
        points: TouchPoints,
        /// Centroid of `points`.
        point: Point,
        lng_lats: SmallVec<[LngLat; 4]>,
        lng_lat: LngLat,
    },
    BoxZoom {
        bounds: LngLatBounds,
    },
}

#[derive(Clone, Debug)]
pub struct MapEvent {
    pub kind: MapEventKind,
    pub original: Option<InputEvent>,
    pub data: EventData,
    default_prevented: Cell<bool>,
}

impl MapEvent {
    pub fn new(kind: MapEventKind) -> Self {
        Self {
            kind,
            original: None,
            data: EventData::None,
            default_prevented: Cell::new(false),
        }
    }

    pub fn with_original(mut self, original: Option<&InputEvent>) -> Self {
        self.original = original.cloned();
        self
    }

    pub fn with_data(mut self, data: EventData) -> Self {
        self.data = data;
        self
    }

    /// Vetoes the map's default handling. Honoured for `mousedown`,
    /// `touchstart` and `wheel`.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    pub fn point(&self) -> Option<Point> {
        match &self.data {
            EventData::Mouse { point, .. } | EventData::Touch { point, .. } => Some(*point),
            _ => None,
        }
    }

    pub fn lng_lat(&self) -> Option<LngLat> {
        match &self.data {
            EventData::Mouse { lng_lat, .. } | EventData::Touch { lng_lat, .. } => Some(*lng_lat),
            _ => None,
        }
    }

    pub fn box_zoom_bounds(&self) -> Option<LngLatBounds> {
        match &self.data {
            EventData::BoxZoom { bounds } => Some(*bounds),
            _ => None,
        }
    }
}

/// Publishes map events. Handlers depend on this capability, never on a
/// concrete bus.
pub trait Emitter {
    fn emit(&self, event: &MapEvent);
}

pub type Listener = Rc<dyn Fn(&MapEvent)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A simple in-process [`Emitter`] with per-kind and catch-all listeners.
///
/// Listeners may register or remove listeners while an event is being
/// delivered; such changes take effect from the next emit.
#[derive(Default)]
pub struct EventBus {
    next_id: Cell<u64>,
    by_kind: RefCell<HashMap<MapEventKind, Vec<(ListenerId, Listener)>>>,
    any: RefCell<Vec<(ListenerId, Listener)>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, kind: MapEventKind, listener: impl Fn(&MapEvent) + 'static) -> ListenerId {
        let id = self.allocate_id();
        self.by_kind
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push((id, Rc::new(listener)));
        id
    }

    pub fn on_any(&self, listener: impl Fn(&MapEvent) + 'static) -> ListenerId {
        let id = self.allocate_id();
        self.any.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn off(&self, id: ListenerId) -> bool {
        let mut removed = false;
        for listeners in self.by_kind.borrow_mut().values_mut() {
            let before = listeners.len();
            listeners.retain(|(existing, _)| *existing != id);
            removed |= listeners.len() != before;
        }
        let mut any = self.any.borrow_mut();
        let before = any.len();
        any.retain(|(existing, _)| *existing != id);
        removed || any.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.by_kind.borrow().values().map(Vec::len).sum::<usize>() + self.any.borrow().len()
    }

    fn allocate_id(&self) -> ListenerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        ListenerId(id)
    }
}

impl Emitter for EventBus {
    fn emit(&self, event: &MapEvent) {
        log::trace!("emit {}", event.kind);
        let mut targets: SmallVec<[Listener; 8]> = SmallVec::new();
        if let Some(listeners) = self.by_kind.borrow().get(&event.kind) {
            targets.extend(listeners.iter().map(|(_, listener)| Rc::clone(listener)));
        }
        targets.extend(self.any.borrow().iter().map(|(_, listener)| Rc::clone(listener)));

        for listener in targets {
            listener(event);
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_to_matching_and_catch_all_listeners() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        bus.on(MapEventKind::Zoom, move |event| log.borrow_mut().push(("zoom", event.kind)));
        let log = Rc::clone(&seen);
        bus.on_any(move |event| log.borrow_mut().push(("any", event.kind)));

        bus.emit(&MapEvent::new(MapEventKind::Zoom));
        bus.emit(&MapEvent::new(MapEventKind::Move));

        assert_eq!(
            *seen.borrow(),
            vec![
                ("zoom", MapEventKind::Zoom),
                ("any", MapEventKind::Zoom),
                ("any", MapEventKind::Move),
            ]
        );
    }

    #[test]
    fn listeners_can_veto_and_be_removed() {
        let bus = EventBus::new();
        let id = bus.on(MapEventKind::MouseDown, |event| event.prevent_default());

        let event = MapEvent::new(MapEventKind::MouseDown);
        bus.emit(&event);
        assert!(event.is_default_prevented());

        assert!(bus.off(id));
        assert!(!bus.off(id));
        assert_eq!(bus.listener_count(), 0);

        let event = MapEvent::new(MapEventKind::MouseDown);
        bus.emit(&event);
        assert!(!event.is_default_prevented());
    }

    #[test]
    fn registering_during_emit_takes_effect_next_time() {
        let bus = Rc::new(EventBus::new());
        let hits = Rc::new(Cell::new(0));

        let inner_bus = Rc::clone(&bus);
        let inner_hits = Rc::clone(&hits);
        bus.on(MapEventKind::Click, move |_| {
            let hits = Rc::clone(&inner_hits);
            inner_bus.on(MapEventKind::Click, move |_| hits.set(hits.get() + 1));
        });

        bus.emit(&MapEvent::new(MapEventKind::Click));
        assert_eq!(hits.get(), 0);
        bus.emit(&MapEvent::new(MapEventKind::Click));
        assert_eq!(hits.get(), 1);
    }
}
