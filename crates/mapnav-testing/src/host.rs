use mapnav_core::{Clock, RuntimeScheduler};
use mapnav_foundation::SelectionHost;
use std::cell::{Cell, RefCell};

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Records frame requests so a test decides when frames run.
#[derive(Debug, Default)]
pub struct FrameHost {
    pending: Cell<bool>,
    requests: Cell<usize>,
}

impl FrameHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears and returns the pending-frame flag.
    pub fn take_request(&self) -> bool {
        self.pending.replace(false)
    }

    pub fn has_request(&self) -> bool {
        self.pending.get()
    }

    /// Total number of `schedule_frame` calls.
    pub fn request_count(&self) -> usize {
        self.requests.get()
    }
}

impl RuntimeScheduler for FrameHost {
    fn schedule_frame(&self) {
        self.pending.set(true);
        self.requests.set(self.requests.get() + 1);
    }
}

/// In-memory `user-select` style.
#[derive(Debug)]
pub struct MemorySelection {
    value: RefCell<String>,
}

impl MemorySelection {
    pub fn new(initial: &str) -> Self {
        Self {
            value: RefCell::new(initial.to_owned()),
        }
    }

    pub fn value(&self) -> String {
        self.value.borrow().clone()
    }
}

impl Default for MemorySelection {
    fn default() -> Self {
        Self::new("auto")
    }
}

impl SelectionHost for MemorySelection {
    fn user_select(&self) -> String {
        self.value()
    }

    fn set_user_select(&self, value: &str) {
        *self.value.borrow_mut() = value.to_owned();
    }
}
