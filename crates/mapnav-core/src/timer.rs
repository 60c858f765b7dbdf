/// A one-shot wall-clock deadline.
///
/// Timers are not tied to render frames. The owner arms them with
/// [`start`](Self::start) and the host polls them through the owner; a timer
/// that is re-armed or cancelled before its deadline never fires.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Timer {
    deadline: Option<f64>,
}

impl Timer {
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the timer to fire `delay_ms` after `now`, replacing any earlier
    /// deadline.
    pub fn start(&mut self, now: f64, delay_ms: f64) {
        self.deadline = Some(now + delay_ms);
    }

    /// Disarms the timer, returning whether it was armed.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// Disarms and returns `true` if the deadline has been reached.
    pub fn fire(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
