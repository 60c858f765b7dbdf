use mapnav_foundation::{Emitter, MapEvent, MapEventKind};
use std::cell::RefCell;

/// [`Emitter`] that keeps every event and can veto chosen kinds.
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: RefCell<Vec<MapEvent>>,
    vetoed: RefCell<Vec<MapEventKind>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls `prevent_default` on every future event of `kind`.
    pub fn prevent(&self, kind: MapEventKind) {
        self.vetoed.borrow_mut().push(kind);
    }

    pub fn allow(&self, kind: MapEventKind) {
        self.vetoed.borrow_mut().retain(|vetoed| *vetoed != kind);
    }

    pub fn events(&self) -> Vec<MapEvent> {
        self.events.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<MapEventKind> {
        self.events.borrow().iter().map(|event| event.kind).collect()
    }

    /// Kinds recorded so far, excluding the raw-input events the arbiter
    /// forwards.
    pub fn gesture_kinds(&self) -> Vec<MapEventKind> {
        self.kinds()
            .into_iter()
            .filter(|kind| !is_raw_input(*kind))
            .collect()
    }

    pub fn count(&self, kind: MapEventKind) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.kind == kind)
            .count()
    }

    pub fn last(&self, kind: MapEventKind) -> Option<MapEvent> {
        self.events
            .borrow()
            .iter()
            .rev()
            .find(|event| event.kind == kind)
            .cloned()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl Emitter for EventRecorder {
    fn emit(&self, event: &MapEvent) {
        if self.vetoed.borrow().contains(&event.kind) {
            event.prevent_default();
        }
        self.events.borrow_mut().push(event.clone());
    }
}

fn is_raw_input(kind: MapEventKind) -> bool {
    matches!(
        kind,
        MapEventKind::MouseDown
            | MapEventKind::MouseUp
            | MapEventKind::MouseMove
            | MapEventKind::Click
            | MapEventKind::ContextMenu
            | MapEventKind::Wheel
            | MapEventKind::TouchStart
            | MapEventKind::TouchMove
            | MapEventKind::TouchEnd
            | MapEventKind::TouchCancel
    )
}
