use std::cell::Cell;
use std::rc::Rc;

/// One-shot swallow of the click that follows a drag release.
///
/// A drag-family handler arms it when the gesture ends; the arbiter consults
/// it before dispatching the next click. The arm only covers a click that
/// arrives before the next timer poll, so a later, unrelated click is never
/// lost.
#[derive(Clone, Debug, Default)]
pub struct ClickSuppression {
    armed: Rc<Cell<bool>>,
}

impl ClickSuppression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suppress(&self) {
        self.armed.set(true);
    }

    /// Returns `true` and disarms if a click should be swallowed.
    pub fn take(&self) -> bool {
        self.armed.replace(false)
    }

    /// Drops a pending arm that no click consumed.
    pub fn expire(&self) {
        self.armed.set(false);
    }

    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }
}
