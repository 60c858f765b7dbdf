/// Lifecycle of a drag-family gesture.
///
/// `Disabled → Enabled` through `enable`, `Enabled → Pending` when a
/// qualifying press arrives, `Pending → Active` on the first move, and back
/// to `Enabled` on release, blur or cancel. `disable` returns to
/// `Disabled` from any state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Disabled,
    Enabled,
    Pending,
    Active,
}

impl GestureState {
    pub fn is_enabled(self) -> bool {
        self != GestureState::Disabled
    }

    pub fn is_active(self) -> bool {
        self == GestureState::Active
    }

    /// A press has been claimed, whether or not the pointer has moved yet.
    pub fn is_engaged(self) -> bool {
        matches!(self, GestureState::Pending | GestureState::Active)
    }
}
