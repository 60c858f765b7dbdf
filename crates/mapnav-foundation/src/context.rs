use crate::click::ClickSuppression;
use crate::events::{Emitter, EventData, MapEvent, MapEventKind};
use crate::input::{InputEvent, PointerButton, PointerEvent};
use crate::selection::DragSelection;
use mapnav_core::{Clock, RuntimeScheduler};
use std::fmt;
use std::rc::Rc;

/// Host platform behaviours the handlers must compensate for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PlatformQuirks {
    /// The platform reports a ctrl-held primary click as the secondary
    /// button (Firefox on macOS).
    pub ctrl_click_reports_secondary: bool,
}

impl PlatformQuirks {
    pub fn with_ctrl_click_reports_secondary(mut self, enabled: bool) -> Self {
        self.ctrl_click_reports_secondary = enabled;
        self
    }
}

/// Services shared by every gesture handler of one map.
#[derive(Clone)]
pub struct GestureContext {
    pub emitter: Rc<dyn Emitter>,
    pub clock: Rc<dyn Clock>,
    pub scheduler: Rc<dyn RuntimeScheduler>,
    pub clicks: ClickSuppression,
    pub selection: DragSelection,
    pub quirks: PlatformQuirks,
}

impl GestureContext {
    pub fn new(
        emitter: Rc<dyn Emitter>,
        clock: Rc<dyn Clock>,
        scheduler: Rc<dyn RuntimeScheduler>,
    ) -> Self {
        Self {
            emitter,
            clock,
            scheduler,
            clicks: ClickSuppression::new(),
            selection: DragSelection::unsupported(),
            quirks: PlatformQuirks::default(),
        }
    }

    pub fn with_selection(mut self, selection: DragSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_quirks(mut self, quirks: PlatformQuirks) -> Self {
        self.quirks = quirks;
        self
    }

    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Emits a payload-free event.
    pub fn fire(&self, kind: MapEventKind, original: Option<&InputEvent>) {
        self.emitter
            .emit(&MapEvent::new(kind).with_original(original));
    }

    pub fn fire_with(&self, kind: MapEventKind, original: Option<&InputEvent>, data: EventData) {
        self.emitter
            .emit(&MapEvent::new(kind).with_original(original).with_data(data));
    }

    /// The button a pointer event was really pressed with, after platform
    /// corrections.
    pub fn mouse_button(&self, event: &PointerEvent) -> PointerButton {
        if self.quirks.ctrl_click_reports_secondary
            && event.button == PointerButton::Secondary
            && event.modifiers.ctrl()
        {
            return PointerButton::Primary;
        }
        event.button
    }
}

impl fmt::Debug for GestureContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureContext")
            .field("clicks", &self.clicks)
            .field("selection", &self.selection)
            .field("quirks", &self.quirks)
            .finish()
    }
}
